//! Canvas Edge Data Structures
//!
//! A `CanvasEdge` is a directed connection between two nodes, optionally
//! carrying a relation label ("supports", "contradicts", ...). Unlabeled
//! edges read as the default "See also" relation in exports.

use serde::{Deserialize, Serialize};

/// A directed, optionally labeled connection between two canvas nodes.
///
/// Endpoints are node ids; an edge whose endpoint is missing from the
/// snapshot is silently dropped during export indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasEdge {
    /// Source node id
    pub from_node: String,

    /// Target node id
    pub to_node: String,

    /// Relation label shown in exports; `None` reads as "See also"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl CanvasEdge {
    /// Relation label applied when an edge carries none
    pub const DEFAULT_LABEL: &'static str = "See also";

    /// Create an unlabeled edge
    pub fn new(from_node: impl Into<String>, to_node: impl Into<String>) -> Self {
        Self {
            from_node: from_node.into(),
            to_node: to_node.into(),
            label: None,
        }
    }

    /// Attach a relation label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
