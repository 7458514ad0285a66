//! Canvas Node Data Structures
//!
//! This module defines `CanvasNode`, the unified model for everything placed
//! on a whiteboard: text cards, file/image nodes, and group containers.
//!
//! # Design
//!
//! - **One struct, tagged payload**: shared fields (position, parent, tags)
//!   live on `CanvasNode`; kind-specific content lives in the `NodeContent`
//!   sum type, matched exhaustively wherever behavior branches on kind
//! - **JSON Canvas wire format**: the payload is flattened and tagged by a
//!   lowercase `type` field, so a serialized node reads
//!   `{"id": "...", "type": "text", "text": "...", ...}`
//!
//! # Examples
//!
//! ```rust
//! use boardspace_core::models::CanvasNode;
//!
//! let card = CanvasNode::text("card-1", "# Notes\nSome thoughts", 120.0, 80.0)
//!     .with_tags(vec!["ideas".to_string()]);
//! assert!(card.parent_id.is_none());
//!
//! let group = CanvasNode::group("grp-1", Some("Research"), 0.0, 0.0);
//! let member = CanvasNode::text("card-2", "Inside the group", 10.0, 10.0)
//!     .with_parent(&group.id);
//! assert_eq!(member.parent_id.as_deref(), Some("grp-1"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for canvas node records
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Node references itself: {0}")]
    SelfReference(String),
}

/// Kind-specific content payload of a canvas node.
///
/// Serialized inline with the node record, discriminated by the `type`
/// field (`"text"`, `"file"`, or `"group"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeContent {
    /// A text card carrying a markdown body
    Text {
        #[serde(default)]
        text: String,
    },

    /// A file node referencing an uploaded image or attachment by path
    File { file: String },

    /// A group container with an optional display label
    Group {
        #[serde(default)]
        text: Option<String>,
    },
}

impl NodeContent {
    /// Wire name of this content kind
    pub fn kind(&self) -> &'static str {
        match self {
            NodeContent::Text { .. } => "text",
            NodeContent::File { .. } => "file",
            NodeContent::Group { .. } => "group",
        }
    }
}

/// A positioned content unit on the whiteboard.
///
/// # Fields
///
/// - `id`: opaque identifier, unique within one board snapshot
/// - `x`, `y`: virtual world coordinates (used for reading-order tie-breaks)
/// - `width`, `height`: node extent on the canvas (not used by the exporter)
/// - `parent_id`: optional containing group (the containment relation)
/// - `tags`: free-form string labels
/// - `exclude_from_export`: caller-side export policy flag; the export
///   engine never inspects it, [`crate::models::CanvasDocument::export_view`]
///   applies it
/// - `content`: kind-specific payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNode {
    /// Unique identifier within the snapshot
    pub id: String,

    /// Horizontal position in world coordinates
    pub x: f64,

    /// Vertical position in world coordinates
    pub y: f64,

    /// Node width on the canvas
    #[serde(default)]
    pub width: f64,

    /// Node height on the canvas
    #[serde(default)]
    pub height: f64,

    /// Containing group, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Free-form tag labels (order-insensitive)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Whether this node is excluded from document exports
    #[serde(default)]
    pub exclude_from_export: bool,

    /// Kind-specific content (tagged by `type` on the wire)
    #[serde(flatten)]
    pub content: NodeContent,
}

impl CanvasNode {
    /// Create a text card at the given position
    pub fn text(id: impl Into<String>, body: impl Into<String>, x: f64, y: f64) -> Self {
        Self::with_content(
            id,
            x,
            y,
            NodeContent::Text {
                text: body.into(),
            },
        )
    }

    /// Create a file node referencing an uploaded asset path
    pub fn file(id: impl Into<String>, path: impl Into<String>, x: f64, y: f64) -> Self {
        Self::with_content(id, x, y, NodeContent::File { file: path.into() })
    }

    /// Create a group container with an optional display label
    pub fn group(id: impl Into<String>, label: Option<&str>, x: f64, y: f64) -> Self {
        Self::with_content(
            id,
            x,
            y,
            NodeContent::Group {
                text: label.map(str::to_string),
            },
        )
    }

    fn with_content(id: impl Into<String>, x: f64, y: f64, content: NodeContent) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width: 0.0,
            height: 0.0,
            parent_id: None,
            tags: Vec::new(),
            exclude_from_export: false,
            content,
        }
    }

    /// Place this node inside a containing group
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Attach tag labels
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the canvas extent
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Mark this node as excluded from exports
    pub fn excluded(mut self) -> Self {
        self.exclude_from_export = true;
        self
    }

    /// Whether this node is a group container
    pub fn is_group(&self) -> bool {
        matches!(self.content, NodeContent::Group { .. })
    }

    /// Whether this node has no containing group
    pub fn is_orphan(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Validate the node record
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `id` is empty or the node names itself
    /// as its own parent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id".to_string()));
        }

        if self.parent_id.as_deref() == Some(self.id.as_str()) {
            return Err(ValidationError::SelfReference(self.id.clone()));
        }

        Ok(())
    }
}
