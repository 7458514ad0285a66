//! Snapshot Lookup Structures
//!
//! `GraphIndex` turns the flat node/edge lists of one snapshot into the
//! lookup tables the traversal and rendering stages need: node-by-id,
//! outgoing adjacency, children-by-parent, and edge-label lookup. Built
//! once per export, discarded with it.

use std::collections::HashMap;

use crate::models::{CanvasEdge, CanvasNode};

/// Lookup structures derived from one board snapshot.
///
/// - Duplicate node ids resolve last-write-wins
/// - Edges with either endpoint missing from the node set are dropped here
///   and never reach the traversal
/// - Adjacency and children lists preserve input order; spatial sorting
///   happens later in the orderer
pub struct GraphIndex<'a> {
    nodes: HashMap<&'a str, &'a CanvasNode>,
    adjacency: HashMap<&'a str, Vec<&'a str>>,
    children: HashMap<&'a str, Vec<&'a str>>,
    labels: HashMap<(&'a str, &'a str), Option<&'a str>>,
}

impl<'a> GraphIndex<'a> {
    /// Build the index in O(nodes + edges)
    pub fn build(nodes: &'a [CanvasNode], edges: &'a [CanvasEdge]) -> Self {
        let mut index = Self {
            nodes: HashMap::with_capacity(nodes.len()),
            adjacency: HashMap::new(),
            children: HashMap::new(),
            labels: HashMap::with_capacity(edges.len()),
        };

        for node in nodes {
            index.nodes.insert(node.id.as_str(), node);
        }

        let mut dangling = 0usize;
        for edge in edges {
            let from = edge.from_node.as_str();
            let to = edge.to_node.as_str();
            if index.nodes.contains_key(from) && index.nodes.contains_key(to) {
                index.adjacency.entry(from).or_default().push(to);
                // Last write wins when the same (from, to) pair repeats
                index.labels.insert((from, to), edge.label.as_deref());
            } else {
                dangling += 1;
            }
        }
        if dangling > 0 {
            tracing::debug!("Dropped {} dangling edge(s) during indexing", dangling);
        }

        for node in nodes {
            if let Some(parent_id) = node.parent_id.as_deref() {
                if index.nodes.contains_key(parent_id) {
                    index
                        .children
                        .entry(parent_id)
                        .or_default()
                        .push(node.id.as_str());
                }
            }
        }

        index
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&'a CanvasNode> {
        self.nodes.get(id).copied()
    }

    /// Whether the snapshot contains a node with this id
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Outgoing connection targets of a node, in input order
    pub fn outgoing(&self, id: &str) -> &[&'a str] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Direct children of a group, in input order
    pub fn children_of(&self, id: &str) -> &[&'a str] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Relation label for the (from, to) edge, falling back to "See also"
    pub fn edge_label(&self, from: &'a str, to: &'a str) -> &'a str {
        self.labels
            .get(&(from, to))
            .copied()
            .flatten()
            .unwrap_or(CanvasEdge::DEFAULT_LABEL)
    }
}
