//! Member descriptors: fields, constructors, properties, methods, events.

use bitflags::bitflags;

use super::type_ref::TypeRef;

bitflags! {
    /// Modifier and bookkeeping flags shared by all member kinds.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct MemberFlags: u8 {
        const STATIC = 1;
        const ABSTRACT = 1 << 1;
        const VIRTUAL = 1 << 2;
        /// Compiler-generated: backing fields, special-name fields,
        /// accessor methods. Never rendered.
        const SYNTHETIC = 1 << 3;
        /// Declared on a base type. Excluded from this type's own listing.
        const INHERITED = 1 << 4;
    }
}

impl MemberFlags {
    /// `{static} `/`{abstract} ` prefixes rendered ahead of the glyph.
    pub fn modifier_prefix(self) -> String {
        let mut prefix = String::new();
        if self.contains(MemberFlags::STATIC) {
            prefix.push_str("{static} ");
        }
        if self.contains(MemberFlags::ABSTRACT) {
            prefix.push_str("{abstract} ");
        }
        prefix
    }
}

/// Member accessibility, partitioned as public vs. everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
    Private,
    Internal,
}

impl Access {
    /// PlantUML visibility glyph.
    pub fn glyph(self) -> char {
        match self {
            Access::Public => '+',
            Access::Protected => '#',
            Access::Private => '-',
            Access::Internal => '~',
        }
    }

    pub fn is_public(self) -> bool {
        matches!(self, Access::Public)
    }
}

/// One attribute annotation on a type or member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeInfo {
    pub name: String,
    pub args: Vec<String>,
}

impl AttributeInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<S: Into<String>>(mut self, args: impl IntoIterator<Item = S>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// One parameter of a constructor, method, indexer, or event handler.
///
/// Providers may legitimately lack a parameter name (stripped metadata);
/// a missing name renders as a placeholder rather than failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: Option<String>,
    pub ty: TypeRef,
    pub default: Option<String>,
}

impl ParamInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            default: None,
        }
    }

    pub fn unnamed(ty: TypeRef) -> Self {
        Self {
            name: None,
            ty,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A declared field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub ty: TypeRef,
    pub access: Access,
    pub flags: MemberFlags,
    pub attributes: Vec<AttributeInfo>,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef, access: Access) -> Self {
        Self {
            name: name.into(),
            ty,
            access,
            flags: MemberFlags::empty(),
            attributes: Vec::new(),
        }
    }

    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeInfo) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// A declared constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CtorInfo {
    pub params: Vec<ParamInfo>,
    pub access: Access,
    pub flags: MemberFlags,
    pub attributes: Vec<AttributeInfo>,
}

impl CtorInfo {
    pub fn new(access: Access, params: Vec<ParamInfo>) -> Self {
        Self {
            params,
            access,
            flags: MemberFlags::empty(),
            attributes: Vec::new(),
        }
    }

    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeInfo) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// Property accessor verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
    Init,
}

impl AccessorKind {
    pub fn verb(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Init => "init",
        }
    }
}

/// One accessor of a property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessorInfo {
    pub kind: AccessorKind,
    pub access: Access,
    pub flags: MemberFlags,
}

impl AccessorInfo {
    pub fn new(kind: AccessorKind, access: Access) -> Self {
        Self {
            kind,
            access,
            flags: MemberFlags::empty(),
        }
    }
}

/// A declared property, possibly indexed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyInfo {
    pub name: String,
    pub ty: TypeRef,
    pub access: Access,
    pub flags: MemberFlags,
    pub accessors: Vec<AccessorInfo>,
    pub index_params: Vec<ParamInfo>,
    pub attributes: Vec<AttributeInfo>,
}

impl PropertyInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef, access: Access) -> Self {
        Self {
            name: name.into(),
            ty,
            access,
            flags: MemberFlags::empty(),
            accessors: vec![AccessorInfo::new(AccessorKind::Get, access)],
            index_params: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Replace the default getter-only accessor list.
    pub fn with_accessors(mut self, accessors: Vec<AccessorInfo>) -> Self {
        self.accessors = accessors;
        self
    }

    pub fn with_index_params(mut self, params: Vec<ParamInfo>) -> Self {
        self.index_params = params;
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeInfo) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// A declared method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    pub ret: TypeRef,
    pub params: Vec<ParamInfo>,
    /// Generic parameter names of a generic method definition.
    pub generic_params: Vec<String>,
    pub access: Access,
    pub flags: MemberFlags,
    pub attributes: Vec<AttributeInfo>,
}

impl MethodInfo {
    pub fn new(
        name: impl Into<String>,
        ret: TypeRef,
        params: Vec<ParamInfo>,
        access: Access,
    ) -> Self {
        Self {
            name: name.into(),
            ret,
            params,
            generic_params: Vec::new(),
            access,
            flags: MemberFlags::empty(),
            attributes: Vec::new(),
        }
    }

    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_generic_params<S: Into<String>>(
        mut self,
        params: impl IntoIterator<Item = S>,
    ) -> Self {
        self.generic_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeInfo) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// A declared event: handler parameter list plus return type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventInfo {
    pub name: String,
    pub params: Vec<ParamInfo>,
    pub ret: TypeRef,
    pub access: Access,
    pub flags: MemberFlags,
    pub attributes: Vec<AttributeInfo>,
}

impl EventInfo {
    pub fn new(
        name: impl Into<String>,
        params: Vec<ParamInfo>,
        ret: TypeRef,
        access: Access,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            ret,
            access,
            flags: MemberFlags::empty(),
            attributes: Vec::new(),
        }
    }

    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeInfo) -> Self {
        self.attributes.push(attribute);
        self
    }
}
