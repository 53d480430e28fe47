//! Walks one type's metadata and populates a [`Clip`](crate::clip::Clip).

mod members;
mod renderer;


pub use renderer::{NoteHook, Renderer, RendererOptions};
