//! Data Models
//!
//! This module contains the core data structures for BoardSpace:
//!
//! - `CanvasNode` - A positioned content unit (text card, file, or group)
//! - `CanvasEdge` - A directed, optionally labeled connection between nodes
//! - `CanvasDocument` - A JSON Canvas snapshot of one whiteboard
//!
//! Wire formats follow the JSON Canvas convention: camelCase field names
//! and a lowercase `type` discriminator on nodes.

mod canvas;
mod edge;
mod node;

pub use canvas::{CanvasDocument, CanvasError};
pub use edge::CanvasEdge;
pub use node::{CanvasNode, NodeContent, ValidationError};
