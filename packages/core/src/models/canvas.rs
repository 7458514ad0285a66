//! JSON Canvas Snapshot Layer
//!
//! A `CanvasDocument` is the serialized form of one whiteboard: a flat list
//! of nodes and a flat list of edges. This is the boundary the export
//! engine sits behind — callers load or build a document, take an
//! [`export_view`](CanvasDocument::export_view), and hand the result to
//! [`crate::export::NarrativeExporter`].
//!
//! # Examples
//!
//! ```rust
//! use boardspace_core::models::CanvasDocument;
//!
//! let doc = CanvasDocument::from_json(
//!     r#"{"nodes":[{"id":"a","type":"text","text":"Hi","x":0,"y":0}],"edges":[]}"#,
//! ).unwrap();
//! let (nodes, edges) = doc.export_view();
//! assert_eq!(nodes.len(), 1);
//! assert!(edges.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{CanvasEdge, CanvasNode, ValidationError};

/// Errors raised by the snapshot layer
///
/// The export engine itself is infallible; only parsing, serializing, and
/// validating a canvas document can fail.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Malformed JSON Canvas input
    #[error("Malformed canvas document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A node record failed structural validation
    #[error("Canvas validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// One whiteboard snapshot in JSON Canvas form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    /// All nodes on the board
    #[serde(default)]
    pub nodes: Vec<CanvasNode>,

    /// All edges on the board
    #[serde(default)]
    pub edges: Vec<CanvasEdge>,
}

impl CanvasDocument {
    /// Create a document from node and edge lists
    pub fn new(nodes: Vec<CanvasNode>, edges: Vec<CanvasEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Parse a JSON Canvas document
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Parse`] on malformed input. Structural
    /// validation is opt-in via [`validate`](Self::validate); the export
    /// engine tolerates malformed graphs by design.
    pub fn from_json(input: &str) -> Result<Self, CanvasError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serialize to pretty-printed JSON Canvas
    pub fn to_json(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every node record
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), CanvasError> {
        for node in &self.nodes {
            node.validate()?;
        }
        Ok(())
    }

    /// Apply the export-exclusion policy.
    ///
    /// Drops every node marked `exclude_from_export` and every edge touching
    /// one, yielding the pre-filtered snapshot the export engine consumes.
    /// The engine never inspects the flag itself.
    pub fn export_view(&self) -> (Vec<CanvasNode>, Vec<CanvasEdge>) {
        let nodes: Vec<CanvasNode> = self
            .nodes
            .iter()
            .filter(|n| !n.exclude_from_export)
            .cloned()
            .collect();

        let excluded: std::collections::HashSet<&str> = self
            .nodes
            .iter()
            .filter(|n| n.exclude_from_export)
            .map(|n| n.id.as_str())
            .collect();

        let edges: Vec<CanvasEdge> = self
            .edges
            .iter()
            .filter(|e| {
                !excluded.contains(e.from_node.as_str()) && !excluded.contains(e.to_node.as_str())
            })
            .cloned()
            .collect();

        (nodes, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CanvasDocument {
        CanvasDocument::new(
            vec![
                CanvasNode::text("a", "Alpha", 0.0, 0.0),
                CanvasNode::text("b", "Beta", 0.0, 50.0).excluded(),
                CanvasNode::group("g", Some("Group"), 0.0, 100.0),
            ],
            vec![
                CanvasEdge::new("a", "b"),
                CanvasEdge::new("a", "g").with_label("supports"),
            ],
        )
    }

    #[test]
    fn test_json_round_trip() {
        let doc = sample();
        let json = doc.to_json().unwrap();
        let back = CanvasDocument::from_json(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = CanvasDocument::from_json("{not json");
        assert!(matches!(result, Err(CanvasError::Parse(_))));
    }

    #[test]
    fn test_from_json_defaults_missing_lists() {
        let doc = CanvasDocument::from_json("{}").unwrap();
        assert!(doc.nodes.is_empty());
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn test_export_view_drops_excluded_nodes_and_their_edges() {
        let (nodes, edges) = sample().export_view();

        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "g"]);

        // The a->b edge touches the excluded node and is dropped
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to_node, "g");
    }

    #[test]
    fn test_validate_surfaces_node_errors() {
        let doc = CanvasDocument::new(vec![CanvasNode::text("", "x", 0.0, 0.0)], vec![]);
        assert!(matches!(doc.validate(), Err(CanvasError::Validation(_))));
    }
}
