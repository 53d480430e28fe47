//! The per-type metadata record supplied by a provider.

use crate::names;

use super::member::{AttributeInfo, CtorInfo, EventInfo, FieldInfo, MethodInfo, PropertyInfo};
use super::type_ref::TypeRef;

/// Shape of a type, resolved once by the provider.
///
/// Closed set, dispatched exhaustively; an unsupported shape maps to
/// [`TypeKind::Value`]'s `entity` keyword rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    AbstractClass,
    Interface,
    Enum,
    Value,
    Array,
}

impl TypeKind {
    /// Declaration keyword for the header line.
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::AbstractClass => "abstract class",
            TypeKind::Enum => "enum",
            TypeKind::Interface => "interface",
            TypeKind::Value | TypeKind::Array => "entity",
        }
    }
}

/// Everything the renderer may read about one type.
///
/// Built by a metadata provider, never mutated by the core. Member lists
/// keep declaration order; interfaces are sorted at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDescriptor {
    /// Raw simple name; may carry an arity marker (`` TestBox`1 ``).
    pub name: String,
    pub namespace: String,
    /// Containing unit (assembly, image, module) used for grouping.
    pub assembly: String,
    pub kind: TypeKind,
    /// Static holder types gain a `<< static >>` marker on the header.
    pub is_static: bool,
    /// Generic parameter names of a generic definition.
    pub generic_params: Vec<String>,
    pub base: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub fields: Vec<FieldInfo>,
    pub constructors: Vec<CtorInfo>,
    pub properties: Vec<PropertyInfo>,
    pub methods: Vec<MethodInfo>,
    pub events: Vec<EventInfo>,
    pub nested: Vec<TypeDescriptor>,
    pub attributes: Vec<AttributeInfo>,
}

impl TypeDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            assembly: String::new(),
            kind,
            is_static: false,
            generic_params: Vec::new(),
            base: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            events: Vec::new(),
            nested: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn in_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = assembly.into();
        self
    }

    pub fn static_type(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_generic_params<S: Into<String>>(
        mut self,
        params: impl IntoIterator<Item = S>,
    ) -> Self {
        self.generic_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base = Some(base);
        self
    }

    pub fn implements(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_ctor(mut self, ctor: CtorInfo) -> Self {
        self.constructors.push(ctor);
        self
    }

    pub fn with_property(mut self, property: PropertyInfo) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_event(mut self, event: EventInfo) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_nested(mut self, nested: TypeDescriptor) -> Self {
        self.nested.push(nested);
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeInfo) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Display name with the type's own generic parameter list.
    ///
    /// A generic definition shows its own parameters (`TestBox<T>`), never a
    /// closed instantiation's arguments.
    pub fn display_name(&self) -> String {
        if self.generic_params.is_empty() {
            names::normalize_identifier(Some(&self.name))
        } else {
            let base = self.name.split('`').next().unwrap_or(&self.name);
            format!("{}<{}>", base, self.generic_params.join(", "))
        }
    }

    /// Namespace-qualified display name; the basis for the node identifier.
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
}
