//! Plumage - layered PlantUML class diagrams from type metadata.
//!
//! # Overview
//!
//! Plumage turns structured type descriptions (kind, members, inheritance,
//! cross-references) into PlantUML text, one selectable "layer" of detail
//! at a time: signature only, public members, non-public members,
//! inheritance edges, relationship edges, notes. Rendered fragments are
//! cached per type with version-based invalidation, so re-rendering an
//! unchanged type is free.
//!
//! The heavy lifting lives in [`plumage_core`]; this crate re-exports the
//! public API.
//!
//! # Quick Start
//!
//! ```ignore
//! use plumage::prelude::*;
//! use plumage::model::{Access, FieldInfo, TypeDescriptor, TypeKind, TypeRef};
//!
//! let order = TypeDescriptor::new("shop", "Order", TypeKind::Class)
//!     .with_field(FieldInfo::new(
//!         "total",
//!         TypeRef::new("System", "Decimal"),
//!         Access::Public,
//!     ));
//!
//! let renderer = Renderer::default();
//! let clips = render_all(&renderer, &[order], Layers::ALL, false);
//!
//! let mut out = Vec::new();
//! write_clips(&mut out, &clips).unwrap();
//! println!("{}", String::from_utf8(out).unwrap());
//! ```

pub use plumage_core::{
    Clip, Direction, Document, DocumentError, GroupBy, LayerError, Layers, LineMode, Renderer,
    RendererOptions, Segment, group_clips, render_all, write_clips, write_document,
};

pub use plumage_core::{assemble, clip, document, layers, model, names, render};

/// The names most callers want in scope.
pub mod prelude {
    pub use plumage_core::{
        Clip, Document, GroupBy, Layers, Renderer, RendererOptions, group_clips, render_all,
        write_clips, write_document,
    };
}
