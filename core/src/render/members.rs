//! Member segment construction: one marker plus one line per member.

use crate::clip::Clip;
use crate::layers::Layers;
use crate::model::{
    Access, AttributeInfo, CtorInfo, EventInfo, FieldInfo, MemberFlags, MethodInfo, ParamInfo,
    PropertyInfo, TypeDescriptor,
};
use crate::names;

/// Accessor-method prefixes excluded from the method listing; their
/// properties and events already render them.
const ACCESSOR_METHOD_PREFIXES: &[&str] = &["get_", "set_", "add_", "remove_"];

/// Emit the member segments of every requested partition.
///
/// Categories run in declaration order {fields, constructors, properties,
/// methods, events}; within each, the public partition precedes the
/// non-public one. Each non-empty requested partition of a category gets a
/// leading marker segment, then one segment per member, all tagged with the
/// partition's layer.
pub(super) fn emit(
    ty: &TypeDescriptor,
    request: Layers,
    include_attributes: bool,
    clip: &mut Clip,
) {
    for (layer, public) in [(Layers::PUBLIC, true), (Layers::NON_PUBLIC, false)] {
        if !request.intersects(layer) {
            continue;
        }
        emit_partition(ty, layer, public, include_attributes, clip);
    }
}

fn emit_partition(
    ty: &TypeDescriptor,
    layer: Layers,
    public: bool,
    include_attributes: bool,
    clip: &mut Clip,
) {
    let in_partition = |access: Access, flags: MemberFlags| {
        access.is_public() == public
            && !flags.intersects(MemberFlags::SYNTHETIC | MemberFlags::INHERITED)
    };

    let fields: Vec<String> = ty
        .fields
        .iter()
        .filter(|field| in_partition(field.access, field.flags))
        .filter(|field| !field.ty.is_event_handler())
        .map(|field| field_line(field, include_attributes))
        .collect();
    push_category(clip, layer, "fields", fields);

    let ctors: Vec<String> = ty
        .constructors
        .iter()
        .filter(|ctor| in_partition(ctor.access, ctor.flags))
        .map(|ctor| ctor_line(ctor, include_attributes))
        .collect();
    push_category(clip, layer, "constructors", ctors);

    let properties: Vec<String> = ty
        .properties
        .iter()
        .filter(|property| in_partition(property.access, property.flags))
        .map(|property| property_line(property, include_attributes))
        .collect();
    push_category(clip, layer, "properties", properties);

    let methods: Vec<String> = ty
        .methods
        .iter()
        .filter(|method| in_partition(method.access, method.flags))
        .filter(|method| !is_accessor_method(&method.name))
        .map(|method| method_line(method, include_attributes))
        .collect();
    push_category(clip, layer, "methods", methods);

    let events: Vec<String> = ty
        .events
        .iter()
        .filter(|event| in_partition(event.access, event.flags))
        .map(|event| event_line(event, include_attributes))
        .collect();
    push_category(clip, layer, "events", events);
}

fn push_category(clip: &mut Clip, layer: Layers, marker: &str, lines: Vec<String>) {
    if lines.is_empty() {
        return;
    }
    clip.push(layer, format!("\t... {marker} ..."));
    for line in lines {
        clip.push(layer, line);
    }
}

fn is_accessor_method(name: &str) -> bool {
    ACCESSOR_METHOD_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// `{static} {abstract} +` prefix shared by every member line.
fn member_prefix(access: Access, flags: MemberFlags) -> String {
    format!("{}{}", flags.modifier_prefix(), access.glyph())
}

/// `name: Type = default` parameter list.
fn param_list(params: &[ParamInfo]) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|param| {
            let name = names::normalize_identifier(param.name.as_deref());
            let ty = param.ty.display_name();
            match &param.default {
                Some(default) => format!("{name}: {ty} = {default}"),
                None => format!("{name}: {ty}"),
            }
        })
        .collect();
    rendered.join(", ")
}

/// `\t[Name(args), Other]` annotation line.
pub(super) fn attribute_line(attributes: &[AttributeInfo]) -> String {
    let rendered: Vec<String> = attributes
        .iter()
        .map(|attribute| {
            if attribute.args.is_empty() {
                attribute.name.clone()
            } else {
                format!("{}({})", attribute.name, attribute.args.join(", "))
            }
        })
        .collect();
    format!("\t[{}]", rendered.join(", "))
}

fn with_attributes(line: String, attributes: &[AttributeInfo], include_attributes: bool) -> String {
    if include_attributes && !attributes.is_empty() {
        format!("{}\n{line}", attribute_line(attributes))
    } else {
        line
    }
}

fn field_line(field: &FieldInfo, include_attributes: bool) -> String {
    let line = format!(
        "\t{}{} : {}",
        member_prefix(field.access, field.flags),
        names::normalize_identifier(Some(&field.name)),
        field.ty.display_name()
    );
    with_attributes(line, &field.attributes, include_attributes)
}

fn ctor_line(ctor: &CtorInfo, include_attributes: bool) -> String {
    let line = format!(
        "\t{}ctor({})",
        member_prefix(ctor.access, ctor.flags),
        param_list(&ctor.params)
    );
    with_attributes(line, &ctor.attributes, include_attributes)
}

fn property_line(property: &PropertyInfo, include_attributes: bool) -> String {
    let index = if property.index_params.is_empty() {
        String::new()
    } else {
        format!("[{}]", param_list(&property.index_params))
    };

    let accessors: Vec<String> = property
        .accessors
        .iter()
        .map(|accessor| {
            format!(
                "{}{};{index}",
                member_prefix(accessor.access, accessor.flags),
                accessor.kind.verb()
            )
        })
        .collect();

    let line = format!(
        "\t{}{} ({}) : {} << property >>",
        member_prefix(property.access, property.flags),
        names::normalize_identifier(Some(&property.name)),
        accessors.join(" "),
        property.ty.display_name()
    );
    with_attributes(line, &property.attributes, include_attributes)
}

fn method_line(method: &MethodInfo, include_attributes: bool) -> String {
    let mut name = names::normalize_identifier(Some(&method.name));
    if !method.generic_params.is_empty() {
        name.push_str(&format!("<{}>", method.generic_params.join(", ")));
    }

    let line = format!(
        "\t{}{name}({}) : {}",
        member_prefix(method.access, method.flags),
        param_list(&method.params),
        method.ret.display_name()
    );
    with_attributes(line, &method.attributes, include_attributes)
}

fn event_line(event: &EventInfo, include_attributes: bool) -> String {
    let line = format!(
        "\t{}{}({}) : {} << event >>",
        member_prefix(event.access, event.flags),
        names::normalize_identifier(Some(&event.name)),
        param_list(&event.params),
        event.ret.display_name()
    );
    with_attributes(line, &event.attributes, include_attributes)
}
