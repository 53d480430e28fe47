//! Layered rendering engine for PlantUML class diagrams.
//!
//! The engine turns a [`model::TypeDescriptor`], the read-only metadata a
//! host supplies for one type, into an ordered collection of tagged text
//! fragments, cached per type in a [`Clip`]. Which fragments appear in a
//! given render is decided by the [`Layers`] bit-flag algebra, so the same
//! clip can serve a signature-only diagram, a full member listing, or an
//! edge-only overlay without re-walking the metadata.
//!
//! # Example
//!
//! ```ignore
//! use plumage_core::{Layers, Renderer, RendererOptions};
//! use plumage_core::model::{TypeDescriptor, TypeKind};
//!
//! let ty = TypeDescriptor::new("app.domain", "Order", TypeKind::Class);
//! let renderer = Renderer::new(RendererOptions::default());
//!
//! let clip = renderer.render(&ty, Layers::ALL, false);
//! println!("{}", clip.render_with(Layers::TYPE_END));
//! ```

pub mod assemble;
pub mod clip;
pub mod document;
pub mod layers;
pub mod model;
pub mod names;
pub mod render;

#[cfg(test)]
mod assemble_test;
#[cfg(test)]
mod document_test;
#[cfg(test)]
mod names_test;

pub use assemble::{GroupBy, group_clips, render_all};
pub use clip::{Clip, Segment};
pub use document::{Direction, Document, DocumentError, LineMode, write_clips, write_document};
pub use layers::{LayerError, Layers};
pub use render::{Renderer, RendererOptions};
