//! References to types appearing in member signatures and inheritance.

use crate::names;

/// Generic collection shapes treated as homogeneous sequences.
///
/// A member whose type matches one of these (by base name, arity marker
/// stripped) contributes an aggregation edge to its element argument rather
/// than a use edge to the collection itself.
const SEQUENCE_SHAPES: &[&str] = &[
    "IEnumerable",
    "ICollection",
    "IList",
    "IReadOnlyCollection",
    "IReadOnlyList",
    "List",
];

/// A reference to a type, as it appears in signatures and edges.
///
/// Unlike [`TypeDescriptor`](crate::model::TypeDescriptor) this carries no
/// members, just enough identity to display a name and target an edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRef {
    /// Raw simple name; may carry an arity marker (`` List`1 ``) and, for
    /// arrays, a `[]` suffix.
    pub name: String,
    /// Namespace the type lives in; empty for global types.
    pub namespace: String,
    /// Generic arguments, empty for non-generic types.
    pub args: Vec<TypeRef>,
    /// Element type when this reference is an array.
    pub element: Option<Box<TypeRef>>,
    /// Enclosing type when this reference is a nested type.
    pub declared_in: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// A plain, non-generic reference.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            args: Vec::new(),
            element: None,
            declared_in: None,
        }
    }

    /// A generic instantiation or definition with explicit arguments.
    pub fn generic(
        namespace: impl Into<String>,
        name: impl Into<String>,
        args: Vec<TypeRef>,
    ) -> Self {
        Self {
            args,
            ..Self::new(namespace, name)
        }
    }

    /// An array of `element`.
    pub fn array_of(element: TypeRef) -> Self {
        Self {
            name: format!("{}[]", element.name),
            namespace: element.namespace.clone(),
            args: Vec::new(),
            element: Some(Box::new(element)),
            declared_in: None,
        }
    }

    /// Mark this reference as nested inside `outer`.
    pub fn nested_in(mut self, outer: TypeRef) -> Self {
        self.declared_in = Some(Box::new(outer));
        self
    }

    /// Simple name with any arity marker stripped.
    pub fn base_name(&self) -> &str {
        self.name.split('`').next().unwrap_or(&self.name)
    }

    pub fn is_array(&self) -> bool {
        self.element.is_some()
    }

    /// Does the display alias table rewrite this name?
    ///
    /// Scalar members never produce relationship edges; a name the alias
    /// table touches is by definition a scalar (or scalar array).
    pub fn is_primitive(&self) -> bool {
        names::alias_type_name(&self.name) != self.name
    }

    /// Delegate/event-handler shapes, which never produce edges.
    pub fn is_event_handler(&self) -> bool {
        self.base_name().ends_with("EventHandler")
    }

    /// The element argument when this is a recognized sequence shape.
    pub fn sequence_element(&self) -> Option<&TypeRef> {
        if SEQUENCE_SHAPES.contains(&self.base_name()) {
            self.args.first()
        } else {
            None
        }
    }

    /// Display form: aliases applied, generic arguments expanded, nested
    /// types dotted onto their enclosing type's display name.
    pub fn display_name(&self) -> String {
        if let Some(element) = &self.element {
            return format!("{}[]", element.display_name());
        }

        let shown = if self.args.is_empty() {
            names::normalize_identifier(Some(&self.name))
        } else {
            let args: Vec<String> = self.args.iter().map(TypeRef::display_name).collect();
            format!("{}<{}>", self.base_name(), args.join(", "))
        };

        match &self.declared_in {
            Some(outer) => format!("{}.{}", outer.display_name(), shown),
            None => shown,
        }
    }

    /// Namespace-qualified display form; the basis for node identifiers.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.display_name()
        } else {
            format!("{}.{}", self.namespace, self.display_name())
        }
    }

    /// Diagram-safe node identifier.
    pub fn slug(&self) -> String {
        names::slug(&self.full_name())
    }

    /// Dedup key for relationship edges: raw namespace plus raw name.
    pub fn key(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}
