//! Tests for name normalization and slugs.

use pretty_assertions::assert_eq;

use crate::names::{MISSING_NAME, alias_type_name, normalize_identifier, slug};

#[test]
fn scalar_aliases_apply() {
    assert_eq!(alias_type_name("Int32"), "int");
    assert_eq!(alias_type_name("Boolean"), "bool");
    assert_eq!(alias_type_name("String"), "string");
    assert_eq!(alias_type_name("Decimal"), "decimal");
    assert_eq!(alias_type_name("Void"), "void");
    assert_eq!(alias_type_name("ValueType"), "struct");
}

#[test]
fn canonical_namespace_is_stripped() {
    assert_eq!(alias_type_name("System.Int32"), "int");
    assert_eq!(alias_type_name("System.Text.StringBuilder"), "Text.StringBuilder");
}

#[test]
fn array_forms_alias_element_wise() {
    assert_eq!(alias_type_name("Int32[]"), "int[]");
    assert_eq!(alias_type_name("System.Boolean[]"), "bool[]");
    assert_eq!(alias_type_name("Widget[]"), "Widget[]");
}

#[test]
fn unknown_names_pass_through() {
    assert_eq!(alias_type_name("Widget"), "Widget");
}

#[test]
fn missing_name_gets_placeholder() {
    assert_eq!(normalize_identifier(None), MISSING_NAME);
}

#[test]
fn accessor_names_collapse_to_verb() {
    assert_eq!(normalize_identifier(Some("get_Count")), "get;");
    assert_eq!(normalize_identifier(Some("set_Count")), "set;");
    assert_eq!(normalize_identifier(Some("init_Count")), "init;");
    // Not a prefix match: stays whole.
    assert_eq!(normalize_identifier(Some("target_Count")), "target_Count");
}

#[test]
fn qualified_arity_expands_to_first_argument() {
    assert_eq!(
        normalize_identifier(Some("List`1[[App.Widget, App, Version=1.0.0.0]]")),
        "List<App.Widget>"
    );
}

#[test]
fn bare_arity_marker_is_dropped() {
    assert_eq!(normalize_identifier(Some("List`1")), "List");
    assert_eq!(normalize_identifier(Some("Dictionary`2")), "Dictionary");
}

#[test]
fn plain_identifiers_are_untouched() {
    assert_eq!(normalize_identifier(Some("Count")), "Count");
    assert_eq!(normalize_identifier(Some("_name")), "_name");
}

#[test]
fn slug_replaces_unsafe_characters() {
    assert_eq!(slug("app.Box<T>"), "app.Box_T_");
    assert_eq!(slug("a b-c"), "a_b_c");
    assert_eq!(slug("already._safe9"), "already._safe9");
}

#[test]
fn slug_is_stable() {
    let name = "demo.Pair<int, string>";
    assert_eq!(slug(name), slug(name));
}
