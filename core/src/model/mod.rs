//! Read-only metadata model consumed by the renderer.
//!
//! A metadata provider (reflection bridge, debugger plugin, test fixture)
//! builds one [`TypeDescriptor`] per type; the renderer only ever reads it.

mod descriptor;
mod member;
mod type_ref;


pub use descriptor::{TypeDescriptor, TypeKind};
pub use member::{
    Access, AccessorInfo, AccessorKind, AttributeInfo, CtorInfo, EventInfo, FieldInfo, MemberFlags,
    MethodInfo, ParamInfo, PropertyInfo,
};
pub use type_ref::TypeRef;
