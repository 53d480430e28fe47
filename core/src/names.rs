//! Pure name normalization: display aliases, arity expansion, slugs.
//!
//! Raw metadata names arrive in the provider's canonical form: fully
//! qualified, scalar types under their framework names (`System.Int32`),
//! generic definitions carrying an arity marker (`` List`1 ``). Everything
//! here maps those onto the short display forms the diagram uses, and onto
//! identifier-safe slugs for node names. All functions are stateless.

/// Placeholder rendered for names the provider could not supply.
pub const MISSING_NAME: &str = "<<No Name>>";

/// Prefixes of accessor-style member names collapsed to a verb marker.
const ACCESSOR_PREFIXES: &[&str] = &["get_", "set_", "init_"];

fn scalar_alias(name: &str) -> Option<&'static str> {
    let alias = match name {
        "ValueType" => "struct",
        "Void" => "void",
        "Object" => "object",
        "String" => "string",
        "Char" => "char",
        "Int16" => "short",
        "UInt16" => "ushort",
        "Int32" => "int",
        "UInt32" => "uint",
        "Int64" => "long",
        "UInt64" => "ulong",
        "Single" => "float",
        "Double" => "double",
        "Byte" => "byte",
        "SByte" => "sbyte",
        "Decimal" => "decimal",
        "Boolean" => "bool",
        _ => return None,
    };
    Some(alias)
}

/// Map a raw type name onto its display alias.
///
/// Strips the `System.` canonical-namespace prefix and substitutes scalar
/// aliases, element-wise for array forms (`System.Int32[]` becomes `int[]`).
/// Names without an alias pass through unchanged.
pub fn alias_type_name(name: &str) -> String {
    let name = if name.contains("System.") {
        name.replace("System.", "")
    } else {
        name.to_owned()
    };

    if let Some(element) = name.strip_suffix("[]")
        && let Some(alias) = scalar_alias(element)
    {
        return format!("{alias}[]");
    }

    match scalar_alias(&name) {
        Some(alias) => alias.to_owned(),
        None => name,
    }
}

/// Normalize a possibly missing member or type identifier for display.
///
/// A missing name becomes [`MISSING_NAME`] rather than an error. Accessor
/// names (`get_Count`) collapse to their verb plus a `;` terminator
/// (`get;`), which is how property accessor lists render. Arity-encoded
/// generic names gain an explicit argument list.
pub fn normalize_identifier(name: Option<&str>) -> String {
    let Some(name) = name else {
        return MISSING_NAME.to_owned();
    };

    let name = alias_type_name(name);

    for prefix in ACCESSOR_PREFIXES {
        if name.starts_with(prefix) {
            // "get_Count" keeps only the verb: "get;"
            return format!("{};", &prefix[..prefix.len() - 1]);
        }
    }

    expand_arity(&name)
}

/// Rewrite an arity-encoded generic name into angle-bracket form.
///
/// `` Dictionary`2[[A, …],[B, …]] `` keeps the first argument's type name:
/// `Dictionary<A>`. A bare marker (`` List`1 ``) is simply dropped. Names
/// without a marker pass through untouched.
fn expand_arity(name: &str) -> String {
    let Some(tick) = name.find('`') else {
        return name.to_owned();
    };

    let rest = &name[tick + 1..];
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return name.to_owned();
    }

    let base = &name[..tick];
    let after = &rest[digits..];

    if let Some(args) = after.strip_prefix("[[") {
        // The first argument runs to its assembly-qualification comma.
        let end = args.find([',', ' ', ']']).unwrap_or(args.len());
        format!("{base}<{}>", &args[..end])
    } else {
        format!("{base}{after}")
    }
}

/// Derive a diagram-safe node identifier from a normalized name.
///
/// Every character outside `[A-Za-z0-9._]` becomes `_`. Uniqueness is only
/// as good as the input names' uniqueness.
pub fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
