//! BoardSpace Core
//!
//! This crate provides the canvas data model and the narrative export engine
//! for the BoardSpace whiteboard system.
//!
//! # Architecture
//!
//! - **JSON Canvas model**: nodes (text cards, files, groups) and directed,
//!   optionally labeled edges, serialized in JSON Canvas style
//! - **Narrative export**: a pure, stateless transformation that linearizes
//!   one board snapshot into a single self-contained HTML document with a
//!   table of contents and a tag index
//! - **No persistence**: storage, canvas UI, uploads, and hosting live in
//!   other layers; this crate only consumes in-memory snapshots
//!
//! # Modules
//!
//! - [`models`] - Data structures (CanvasNode, CanvasEdge, CanvasDocument)
//! - [`export`] - Narrative linearization and document assembly
//! - [`utils`] - Markdown stripping and HTML escaping helpers

pub mod export;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use export::*;
pub use models::*;
