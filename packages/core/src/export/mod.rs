//! Narrative Export Engine
//!
//! Linearizes one board snapshot into a single self-contained hypertext
//! document. The pipeline:
//!
//! 1. [`GraphIndex`] - lookup structures over the flat node/edge lists
//! 2. [`Orderer`] - the deduplicated, hierarchy-aware reading order
//! 3. [`SectionRenderer`] - one HTML fragment per ordered node
//! 4. [`NarrativeExporter`] - table of contents, body, tag index, shell
//!
//! The engine is pure and stateless: it tolerates cycles and dangling
//! references, renders every reachable node in full exactly once, and
//! always produces a document from any finite input.

mod assembler;
mod graph_index;
mod markdown;
mod orderer;
mod renderer;
mod section;


pub use assembler::{export_narrative_html, NarrativeExporter};
pub use graph_index::GraphIndex;
pub use markdown::markdown_outline;
pub use orderer::Orderer;
pub use renderer::{BodyRenderer, MarkdownBodyRenderer};
pub use section::{node_title, SectionRenderer};
