//! Narrative Ordering
//!
//! The orderer resolves three competing orderings — spatial position,
//! group containment, and directed connections — into one linear reading
//! order. Containment wins: a contained node is always introduced inside
//! its group's section before any direct connection reaches it.
//!
//! Traversal is depth-first with two sets: *visited* (completed nodes,
//! grows monotonically for the whole export) and *on-path* (the active
//! recursion chain, used only to break cycles and cleared on return).
//! Every node appears in the output at most once; cycles terminate without
//! dropping legitimately reachable nodes.

use std::collections::HashSet;

use crate::models::CanvasNode;

use super::GraphIndex;

/// Computes the linear visitation order over one board snapshot.
pub struct Orderer<'i, 'a> {
    index: &'i GraphIndex<'a>,
    visited: HashSet<&'a str>,
    on_path: HashSet<&'a str>,
    // Nodes whose parent hoist is in progress; cuts containment cycles
    // without keeping the node out of its group's child sweep.
    hoisting: HashSet<&'a str>,
    order: Vec<&'a CanvasNode>,
}

impl<'i, 'a> Orderer<'i, 'a> {
    pub fn new(index: &'i GraphIndex<'a>) -> Self {
        Self {
            index,
            visited: HashSet::new(),
            on_path: HashSet::new(),
            hoisting: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Produce the full visitation order.
    ///
    /// Candidates are swept in (orphans-first, y, x) order; ties keep input
    /// order. The primary sweep starts only from orphans; a safety sweep
    /// afterwards picks up anything a broken ancestor chain left behind, so
    /// every node appears at least once.
    pub fn compute(mut self, nodes: &'a [CanvasNode]) -> Vec<&'a CanvasNode> {
        let mut candidates: Vec<&'a CanvasNode> = nodes.iter().collect();
        candidates.sort_by(|a, b| {
            u8::from(a.parent_id.is_some())
                .cmp(&u8::from(b.parent_id.is_some()))
                .then_with(|| a.y.total_cmp(&b.y))
                .then_with(|| a.x.total_cmp(&b.x))
        });

        for node in &candidates {
            if node.parent_id.is_none() && !self.visited.contains(node.id.as_str()) {
                self.visit(node.id.as_str());
            }
        }

        // Safety sweep: nodes only reachable through unvisited non-orphan
        // ancestor chains or other structural gaps.
        for node in &candidates {
            if !self.visited.contains(node.id.as_str()) {
                self.visit(node.id.as_str());
            }
        }

        self.order
    }

    fn visit(&mut self, node_id: &'a str) {
        if self.visited.contains(node_id) {
            return;
        }
        // Cycle break: never recurse back into an ancestor of this call chain
        if self.on_path.contains(node_id) {
            return;
        }
        let Some(node) = self.index.node(node_id) else {
            return;
        };

        // A contained node is introduced by its group before anything else.
        // Visiting the parent normally reaches this node as a child; if it
        // did, there is nothing left to do here.
        if let Some(parent_id) = node.parent_id.as_deref() {
            if let Some(parent) = self.index.node(parent_id) {
                if !self.visited.contains(parent.id.as_str()) && self.hoisting.insert(node_id) {
                    self.visit(parent.id.as_str());
                    self.hoisting.remove(node_id);
                    if self.visited.contains(node_id) {
                        return;
                    }
                }
            }
        }

        // Childless groups produce no section and no link, but stay marked
        // so they are not reconsidered.
        if node.is_group() && self.index.children_of(node_id).is_empty() {
            self.visited.insert(node_id);
            return;
        }

        self.on_path.insert(node_id);
        self.visited.insert(node_id);
        self.order.push(node);

        for child_id in self.spatial_order(self.index.children_of(node_id)) {
            self.visit(child_id);
        }
        for target_id in self.spatial_order(self.index.outgoing(node_id)) {
            self.visit(target_id);
        }

        self.on_path.remove(node_id);
    }

    /// Sort neighbor ids into reading order (ascending y, then x)
    fn spatial_order(&self, ids: &[&'a str]) -> Vec<&'a str> {
        let mut nodes: Vec<&'a CanvasNode> = ids
            .iter()
            .filter_map(|id| self.index.node(id))
            .collect();
        nodes.sort_by(|a, b| a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x)));
        nodes.into_iter().map(|n| n.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CanvasEdge;

    fn order_ids(nodes: &[CanvasNode], edges: &[CanvasEdge]) -> Vec<String> {
        let index = GraphIndex::build(nodes, edges);
        Orderer::new(&index)
            .compute(nodes)
            .into_iter()
            .map(|n| n.id.clone())
            .collect()
    }

    #[test]
    fn test_orphans_sort_before_contained_nodes() {
        let nodes = vec![
            CanvasNode::text("contained", "", 0.0, 0.0).with_parent("g"),
            CanvasNode::group("g", None, 0.0, 100.0),
            CanvasNode::text("orphan", "", 0.0, 50.0),
        ];

        // The contained card sits topmost but still waits for its group
        let ids = order_ids(&nodes, &[]);
        assert_eq!(ids, vec!["orphan", "g", "contained"]);
    }

    #[test]
    fn test_spatial_reading_order_for_orphans() {
        let nodes = vec![
            CanvasNode::text("right", "", 100.0, 0.0),
            CanvasNode::text("left", "", 0.0, 0.0),
            CanvasNode::text("below", "", 0.0, 50.0),
        ];

        let ids = order_ids(&nodes, &[]);
        assert_eq!(ids, vec!["left", "right", "below"]);
    }

    #[test]
    fn test_group_introduces_child_before_direct_connection() {
        let nodes = vec![
            CanvasNode::text("a", "", 0.0, 0.0),
            CanvasNode::text("b", "", 50.0, 50.0).with_parent("g"),
            CanvasNode::group("g", None, 40.0, 40.0),
        ];
        let edges = vec![CanvasEdge::new("a", "b")];

        let ids = order_ids(&nodes, &edges);
        assert_eq!(ids, vec!["a", "g", "b"]);
    }

    #[test]
    fn test_two_cycle_terminates_with_both_present() {
        let nodes = vec![
            CanvasNode::text("a", "", 0.0, 0.0),
            CanvasNode::text("b", "", 0.0, 50.0),
        ];
        let edges = vec![CanvasEdge::new("a", "b"), CanvasEdge::new("b", "a")];

        let ids = order_ids(&nodes, &edges);
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_self_loop_is_harmless() {
        let nodes = vec![CanvasNode::text("a", "", 0.0, 0.0)];
        let edges = vec![CanvasEdge::new("a", "a")];

        assert_eq!(order_ids(&nodes, &edges), vec!["a"]);
    }

    #[test]
    fn test_empty_group_is_excluded_but_marked() {
        let nodes = vec![
            CanvasNode::group("empty", Some("Empty"), 0.0, 0.0),
            CanvasNode::text("a", "", 0.0, 50.0),
        ];
        let edges = vec![CanvasEdge::new("a", "empty")];

        // Neither the sweep nor the connection resurrects the empty group
        assert_eq!(order_ids(&nodes, &edges), vec!["a"]);
    }

    #[test]
    fn test_children_visited_in_reading_order() {
        let nodes = vec![
            CanvasNode::group("g", None, 0.0, 0.0),
            CanvasNode::text("c2", "", 10.0, 20.0).with_parent("g"),
            CanvasNode::text("c1", "", 10.0, 10.0).with_parent("g"),
            CanvasNode::text("c3", "", 20.0, 20.0).with_parent("g"),
        ];

        assert_eq!(order_ids(&nodes, &[]), vec!["g", "c1", "c2", "c3"]);
    }

    #[test]
    fn test_safety_sweep_covers_parent_cycles() {
        // g1 and g2 claim each other as parents; neither is an orphan, so
        // only the safety sweep reaches them.
        let nodes = vec![
            CanvasNode::group("g1", None, 0.0, 0.0).with_parent("g2"),
            CanvasNode::group("g2", None, 0.0, 10.0).with_parent("g1"),
            CanvasNode::text("a", "", 0.0, 5.0).with_parent("g1"),
        ];

        let ids = order_ids(&nodes, &[]);
        // Every node appears at least once and exactly once
        assert_eq!(ids.len(), 3);
        for id in ["g1", "g2", "a"] {
            assert_eq!(ids.iter().filter(|i| i.as_str() == id).count(), 1, "{id}");
        }
    }

    #[test]
    fn test_each_node_appears_at_most_once() {
        // Diamond: a -> b, a -> c, b -> d, c -> d
        let nodes = vec![
            CanvasNode::text("a", "", 0.0, 0.0),
            CanvasNode::text("b", "", 0.0, 10.0),
            CanvasNode::text("c", "", 10.0, 10.0),
            CanvasNode::text("d", "", 0.0, 20.0),
        ];
        let edges = vec![
            CanvasEdge::new("a", "b"),
            CanvasEdge::new("a", "c"),
            CanvasEdge::new("b", "d"),
            CanvasEdge::new("c", "d"),
        ];

        let ids = order_ids(&nodes, &edges);
        assert_eq!(ids, vec!["a", "b", "d", "c"]);
    }
}
