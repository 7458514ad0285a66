//! Grouped Markdown Outline
//!
//! A flat, connection-free alternative to the narrative export: groups
//! first with their members as subsections, then everything ungrouped.
//! Useful for pasting a board into plain markdown tooling; the narrative
//! HTML export remains the primary output.

use crate::models::{CanvasNode, NodeContent};

use super::section::node_title;

/// Render a board snapshot as a grouped markdown outline.
///
/// Nodes keep their input order inside each section; spatial position and
/// edges are ignored here.
pub fn markdown_outline(nodes: &[CanvasNode], title: &str) -> String {
    let mut out = format!("# {}\n\n", title);

    let groups: Vec<&CanvasNode> = nodes.iter().filter(|n| n.is_group()).collect();
    let group_ids: std::collections::HashSet<&str> =
        groups.iter().map(|g| g.id.as_str()).collect();

    for group in &groups {
        out.push_str(&format!("## Group: {}\n\n", node_title(group)));
        for member in nodes
            .iter()
            .filter(|n| n.parent_id.as_deref() == Some(group.id.as_str()))
        {
            push_member(&mut out, member);
        }
        out.push('\n');
    }

    // Non-group nodes whose parent is absent or not a present group
    let ungrouped: Vec<&CanvasNode> = nodes
        .iter()
        .filter(|n| !n.is_group())
        .filter(|n| match n.parent_id.as_deref() {
            Some(parent_id) => !group_ids.contains(parent_id),
            None => true,
        })
        .collect();

    if !ungrouped.is_empty() {
        out.push_str("## Ungrouped Cards\n\n");
        for member in ungrouped {
            push_member(&mut out, member);
        }
    }

    out
}

fn push_member(out: &mut String, node: &CanvasNode) {
    out.push_str(&format!("### {}\n\n", node_title(node)));
    match &node.content {
        NodeContent::Text { text } => {
            if !text.trim().is_empty() {
                out.push_str(text.trim());
                out.push_str("\n\n");
            }
        }
        NodeContent::File { file } => {
            out.push_str(&format!("![{}]({})\n\n", node_title(node), file));
        }
        // Nested groups contribute their heading via the outer sweep
        NodeContent::Group { .. } => {}
    }
    out.push_str("---\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CanvasNode;

    #[test]
    fn test_groups_come_first_with_members() {
        let nodes = vec![
            CanvasNode::text("solo", "Solo card", 0.0, 0.0),
            CanvasNode::group("g", Some("Research"), 0.0, 0.0),
            CanvasNode::text("m", "# Member\nBody", 0.0, 0.0).with_parent("g"),
        ];

        let md = markdown_outline(&nodes, "Board");

        let group_pos = md.find("## Group: Research").unwrap();
        let member_pos = md.find("### Member").unwrap();
        let ungrouped_pos = md.find("## Ungrouped Cards").unwrap();
        assert!(group_pos < member_pos);
        assert!(member_pos < ungrouped_pos);
        assert!(md.contains("### Solo card"));
    }

    #[test]
    fn test_orphaned_member_falls_back_to_ungrouped() {
        let nodes = vec![CanvasNode::text("m", "Stray", 0.0, 0.0).with_parent("missing")];

        let md = markdown_outline(&nodes, "Board");
        assert!(md.contains("## Ungrouped Cards"));
        assert!(md.contains("### Stray"));
    }

    #[test]
    fn test_file_members_render_as_image_links() {
        let nodes = vec![CanvasNode::file("f", "/static/uploads/x_pic.png", 0.0, 0.0)];

        let md = markdown_outline(&nodes, "Board");
        assert!(md.contains("![pic.png](/static/uploads/x_pic.png)"));
    }

    #[test]
    fn test_empty_board_keeps_title_only() {
        let md = markdown_outline(&[], "Empty");
        assert_eq!(md, "# Empty\n\n");
    }
}
