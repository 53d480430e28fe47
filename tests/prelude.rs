//! Facade smoke test: the prelude covers the whole pipeline.

use plumage::model::{Access, FieldInfo, TypeDescriptor, TypeKind, TypeRef};
use plumage::prelude::*;

#[test]
fn prelude_covers_the_render_pipeline() {
    let ty = TypeDescriptor::new("app", "Widget", TypeKind::Class).with_field(FieldInfo::new(
        "Count",
        TypeRef::new("System", "Int32"),
        Access::Public,
    ));

    let clips = render_all(&Renderer::default(), &[ty], Layers::ALL, false);

    let mut out = Vec::new();
    write_clips(&mut out, &clips).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("class \"Widget\" as app.Widget {"));
    assert!(text.contains("\t+Count : int"));
}

#[test]
fn layer_validation_is_exposed() {
    assert!(Layers::try_from_bits(1 << 12).is_err());
    assert_eq!(
        Layers::try_from_bits(Layers::MEMBERS.bits()),
        Ok(Layers::MEMBERS)
    );
}
