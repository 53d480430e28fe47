//! Tests for batch rendering and clip grouping.

use pretty_assertions::assert_eq;

use crate::assemble::{GroupBy, group_clips, render_all};
use crate::layers::Layers;
use crate::model::{Access, FieldInfo, TypeDescriptor, TypeKind, TypeRef};
use crate::render::Renderer;

fn fixture_types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new("app.ui", "Panel", TypeKind::Class)
            .in_assembly("app.dll")
            .with_base(TypeRef::new("app.ui", "Control"))
            .with_field(FieldInfo::new(
                "gear",
                TypeRef::new("app.core", "Gear"),
                Access::Private,
            )),
        TypeDescriptor::new("app.core", "Gear", TypeKind::Class).in_assembly("app.dll"),
        TypeDescriptor::new("app.core", "Mode", TypeKind::Enum).in_assembly("extras.dll"),
    ]
}

#[test]
fn all_request_renders_two_tagged_groups_per_type() {
    let types = fixture_types();
    let pairs = render_all(&Renderer::default(), &types, Layers::ALL, false);

    assert_eq!(pairs.len(), types.len() * 2);

    let (bodies, edges) = pairs.split_at(types.len());
    for (_, layer) in bodies {
        assert_eq!(*layer, Layers::TYPE_END);
    }
    for (_, layer) in edges {
        assert_eq!(*layer, Layers::EDGES);
    }

    // Body renders carry no edges, edge renders no bodies.
    let (panel_body, layer) = &bodies[0];
    let body_text = panel_body.render_with(*layer);
    assert!(body_text.contains("class \"Panel\""));
    assert!(!body_text.contains("extends"));

    let (panel_edges, layer) = &edges[0];
    let edge_text = panel_edges.render_with(*layer);
    assert!(edge_text.contains("app.ui.Panel -u-|> app.ui.Control : extends"));
    assert!(edge_text.contains("app.ui.Panel -> app.core.Gear : gear << use >>"));
    assert!(!edge_text.contains("class \"Panel\""));
}

#[test]
fn body_only_requests_render_in_a_single_pass() {
    let types = fixture_types();

    let pairs = render_all(&Renderer::default(), &types, Layers::MEMBERS, false);
    assert_eq!(pairs.len(), types.len());
    for (_, layer) in &pairs {
        assert_eq!(*layer, Layers::MEMBERS);
    }

    let pairs = render_all(&Renderer::default(), &types, Layers::TYPE_END, false);
    assert_eq!(pairs.len(), types.len());
}

#[test]
fn edge_only_requests_render_in_a_single_pass() {
    let types = fixture_types();
    let request = Layers::RELATIONSHIPS | Layers::INHERITANCE;

    let pairs = render_all(&Renderer::default(), &types, request, false);
    assert_eq!(pairs.len(), types.len());

    let (clip, layer) = &pairs[0];
    let text = clip.render_with(*layer);
    assert!(text.contains("extends"));
    assert!(!text.contains("class \"Panel\""));
}

#[test]
fn grouping_buckets_by_namespace() {
    let types = fixture_types();
    let pairs = render_all(&Renderer::default(), &types, Layers::TYPE_END, false);
    let groups = group_clips(pairs, GroupBy::Namespace);

    let keys: Vec<&str> = groups.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, ["app.ui", "app.core"]);
    assert_eq!(groups[0].1.len(), 1);
    assert_eq!(groups[1].1.len(), 2);
}

#[test]
fn grouping_buckets_by_assembly_and_type() {
    let types = fixture_types();
    let renderer = Renderer::default();

    let pairs = render_all(&renderer, &types, Layers::TYPE_END, false);
    let by_assembly = group_clips(pairs, GroupBy::Assembly);
    let keys: Vec<&str> = by_assembly.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, ["app.dll", "extras.dll"]);

    let pairs = render_all(&renderer, &types, Layers::TYPE_END, false);
    let by_type = group_clips(pairs, GroupBy::Type);
    assert_eq!(by_type.len(), 3);
    assert_eq!(by_type[0].0, "app.ui.Panel");
}

#[test]
fn merged_grouping_keeps_everything_in_one_bucket() {
    let types = fixture_types();
    let pairs = render_all(&Renderer::default(), &types, Layers::ALL, false);
    let total = pairs.len();

    let groups = group_clips(pairs, GroupBy::Merged);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].0, "");
    assert_eq!(groups[0].1.len(), total);
}

#[test]
fn grouping_is_idempotent_and_side_effect_free() {
    let types = fixture_types();
    let renderer = Renderer::default();

    let first: Vec<Vec<String>> = group_clips(
        render_all(&renderer, &types, Layers::ALL, false),
        GroupBy::Namespace,
    )
    .into_iter()
    .map(|(_, bucket)| {
        bucket
            .into_iter()
            .map(|(clip, layer)| clip.render_with(layer))
            .collect()
    })
    .collect();

    let second: Vec<Vec<String>> = group_clips(
        render_all(&renderer, &types, Layers::ALL, false),
        GroupBy::Namespace,
    )
    .into_iter()
    .map(|(_, bucket)| {
        bucket
            .into_iter()
            .map(|(clip, layer)| clip.render_with(layer))
            .collect()
    })
    .collect();

    assert_eq!(first, second);
}
