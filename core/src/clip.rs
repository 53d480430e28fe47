//! Per-type segment cache with version-stamped memoized rendering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::layers::Layers;
use crate::names;

/// One tagged rendering fragment.
///
/// Immutable after creation; a segment's text holds one or more complete
/// lines without a trailing newline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub layer: Layers,
    pub text: String,
}

#[derive(Debug)]
struct RenderCache {
    /// Clip version at the last recompute; `None` until first render.
    rendered: Option<u64>,
    /// Request the cached text was computed for.
    request: Layers,
    text: String,
}

/// Ordered segments for one type, with memoized rendering.
///
/// A clip is exclusively owned (and mutated) by the renderer pass that
/// creates it; afterwards it is read-only and safe to render from many
/// threads. The cache holds the single most recent render, keyed by the
/// clip version and the requested layers.
#[derive(Debug)]
pub struct Clip {
    display_name: String,
    full_name: String,
    namespace: String,
    assembly: String,
    segments: Vec<Segment>,
    version: u64,
    cache: Mutex<RenderCache>,
    recomputes: AtomicUsize,
}

impl Clip {
    pub fn new(
        display_name: impl Into<String>,
        full_name: impl Into<String>,
        namespace: impl Into<String>,
        assembly: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            full_name: full_name.into(),
            namespace: namespace.into(),
            assembly: assembly.into(),
            segments: Vec::new(),
            version: 0,
            cache: Mutex::new(RenderCache {
                rendered: None,
                request: Layers::empty(),
                text: String::new(),
            }),
            recomputes: AtomicUsize::new(0),
        }
    }

    /// Append a segment. Bumps the version; performs no rendering.
    pub fn push(&mut self, layer: Layers, text: impl Into<String>) {
        self.segments.push(Segment {
            layer,
            text: text.into(),
        });
        self.version += 1;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Normalized namespace-qualified name of the owning type.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    /// Node identifier of the owning type.
    pub fn slug(&self) -> String {
        names::slug(&self.full_name)
    }

    /// Times the recompute path has run. Diagnostic; cache hits leave it
    /// untouched.
    pub fn recomputes(&self) -> usize {
        self.recomputes.load(Ordering::Relaxed)
    }

    /// Render every segment, ignoring tags.
    pub fn render(&self) -> String {
        self.render_with(Layers::ALL)
    }

    /// Render the segments admitted by `request`.
    ///
    /// Included segments are grouped by ascending layer bits (insertion
    /// order within a group) and joined line-wise. For an unchanged clip and
    /// an unchanged request the cached text is returned without recomputing;
    /// the recompute path runs under the clip's own lock, so concurrent
    /// callers observe one recompute and one shared result. A request that
    /// admits nothing renders the empty string.
    pub fn render_with(&self, request: Layers) -> String {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);

        if cache.rendered == Some(self.version) && cache.request == request {
            return cache.text.clone();
        }

        self.recomputes.fetch_add(1, Ordering::Relaxed);

        let mut picked: Vec<&Segment> = self
            .segments
            .iter()
            .filter(|segment| request.admits(segment.layer))
            .collect();
        // Stable sort: insertion order survives within each layer group.
        picked.sort_by_key(|segment| segment.layer.bits());

        let mut text = String::new();
        for segment in picked {
            text.push_str(&segment.text);
            text.push('\n');
        }

        cache.rendered = Some(self.version);
        cache.request = request;
        cache.text = text.clone();
        text
    }
}
