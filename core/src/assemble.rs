//! Batch rendering over many types, and output bucketing.

use hashbrown::HashMap;
use tracing::debug;

use crate::clip::Clip;
use crate::layers::Layers;
use crate::model::TypeDescriptor;
use crate::render::Renderer;

/// How rendered clips are bucketed for output partitioning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupBy {
    /// Everything in one bucket keyed by the empty string.
    Merged,
    /// One bucket per type.
    Type,
    /// One bucket per namespace.
    Namespace,
    /// One bucket per containing assembly.
    Assembly,
}

/// Render every type, tagging each clip with the layers a writer should
/// render it at.
///
/// A request that mixes body concerns with edge concerns gets the two-pass
/// treatment: every type first tagged with the body sub-combination, then
/// every type again tagged edges-only. The resulting document declares every
/// node before any edge references it. Requests confined to one side render
/// in a single pass.
pub fn render_all(
    renderer: &Renderer,
    types: &[TypeDescriptor],
    request: Layers,
    include_attributes: bool,
) -> Vec<(Clip, Layers)> {
    let body = request.intersection(Layers::TYPE_END);
    let edges = request.intersection(Layers::EDGES);

    if body.is_empty() || edges.is_empty() {
        debug!(?request, count = types.len(), "single-pass render");
        return types
            .iter()
            .map(|ty| (renderer.render(ty, request, include_attributes), request))
            .collect();
    }

    debug!(?request, count = types.len(), "two-pass render");
    let mut out = Vec::with_capacity(types.len() * 2);
    for ty in types {
        out.push((renderer.render(ty, request, include_attributes), body));
    }
    for ty in types {
        out.push((renderer.render(ty, request, include_attributes), edges));
    }
    out
}

/// Re-bucket rendered clips by a key read from each clip's identity.
///
/// Pure and idempotent: no rendering happens, buckets keep first-seen key
/// order, and pairs keep their relative order within a bucket.
pub fn group_clips(
    pairs: Vec<(Clip, Layers)>,
    group_by: GroupBy,
) -> Vec<(String, Vec<(Clip, Layers)>)> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<(Clip, Layers)>> = HashMap::new();

    for (clip, layer) in pairs {
        let key = match group_by {
            GroupBy::Merged => String::new(),
            GroupBy::Type => clip.full_name().to_owned(),
            GroupBy::Namespace => clip.namespace().to_owned(),
            GroupBy::Assembly => clip.assembly().to_owned(),
        };
        if !buckets.contains_key(&key) {
            order.push(key.clone());
        }
        buckets.entry(key).or_default().push((clip, layer));
    }

    order
        .into_iter()
        .map(|key| {
            let bucket = buckets.remove(&key).unwrap_or_default();
            (key, bucket)
        })
        .collect()
}
