//! Section Rendering
//!
//! Turns one node of the visitation order into an HTML fragment: either a
//! full section (heading, body, related links, tags) or, when the node was
//! already rendered in full elsewhere, a short "See above" back-reference.
//!
//! File nodes are embedded as base64 `data:` URIs so the document stands
//! alone offline; an unreadable file degrades to an inline placeholder and
//! never aborts the export.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::models::{CanvasNode, NodeContent};
use crate::utils::{escape_html, strip_markdown};

use super::{BodyRenderer, GraphIndex};

/// Derive a node's display title from its content.
///
/// - Text: first non-empty line with markdown formatting stripped
/// - File: file name with any `uuid_` upload prefix removed
/// - Group: explicit label
///
/// Falls back to "Untitled Note" / "Untitled Image" / "Untitled Group".
pub fn node_title(node: &CanvasNode) -> String {
    match &node.content {
        NodeContent::Text { text } => {
            let first = text.trim().lines().next().unwrap_or("").trim();
            let title = strip_markdown(first);
            if title.is_empty() {
                "Untitled Note".to_string()
            } else {
                title
            }
        }
        NodeContent::File { file } => {
            let name = file.rsplit('/').next().unwrap_or("");
            let name = name.split_once('_').map(|(_, rest)| rest).unwrap_or(name);
            if name.is_empty() {
                "Untitled Image".to_string()
            } else {
                name.to_string()
            }
        }
        NodeContent::Group { text } => text
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "Untitled Group".to_string()),
    }
}

/// Renders one node into an HTML fragment.
pub struct SectionRenderer<'i, 'a> {
    index: &'i GraphIndex<'a>,
    renderer: &'i dyn BodyRenderer,
    asset_root: Option<&'i Path>,
}

impl<'i, 'a> SectionRenderer<'i, 'a> {
    pub fn new(
        index: &'i GraphIndex<'a>,
        renderer: &'i dyn BodyRenderer,
        asset_root: Option<&'i Path>,
    ) -> Self {
        Self {
            index,
            renderer,
            asset_root,
        }
    }

    /// Display title for a node (see [`node_title`])
    pub fn title(&self, node: &CanvasNode) -> String {
        node_title(node)
    }

    /// Render one node.
    ///
    /// `rendered` is the set of node ids already rendered in full; a member
    /// of that set comes back as a stub linking its first rendering. The
    /// caller owns the set and marks nodes after rendering them.
    pub fn render(&self, node: &'a CanvasNode, rendered: &HashSet<&'a str>) -> String {
        let title = self.title(node);
        let anchor = escape_html(&node.id);

        if rendered.contains(node.id.as_str()) {
            return format!(
                "<div class=\"node-section\" id=\"{anchor}-link\">\n\
                 <p><strong>See above:</strong> <a href=\"#{anchor}\">{}</a></p>\n\
                 </div>\n",
                escape_html(&title)
            );
        }

        let content_html = match &node.content {
            NodeContent::Text { text } => self.renderer.render(text),
            NodeContent::File { file } => self.embed_file(file, &title),
            NodeContent::Group { .. } => self.group_members(node),
        };

        // A body that opens with its own heading keeps it; rendering a
        // second heading above it would read as a duplicate.
        let owns_heading =
            matches!(node.content, NodeContent::Text { .. }) && starts_with_heading(&content_html);
        let heading_html = if owns_heading {
            String::new()
        } else {
            format!("<h2>{}</h2>\n", escape_html(&title))
        };

        let links_html = self.links_block(node);
        let tags_html = tags_block(&node.tags);

        format!(
            "<div class=\"node-section\" id=\"{anchor}\">\n{heading_html}{content_html}{links_html}{tags_html}</div>\n"
        )
    }

    /// Bulleted link list of a group's present children
    fn group_members(&self, node: &'a CanvasNode) -> String {
        let children = self.index.children_of(node.id.as_str());
        if children.is_empty() {
            return String::new();
        }

        let mut out = String::from("<div class=\"group-members\"><strong>Group Members:</strong><ul>");
        for child_id in children {
            if let Some(child) = self.index.node(child_id) {
                out.push_str(&format!(
                    "<li><a href=\"#{}\">{}</a></li>",
                    escape_html(child_id),
                    escape_html(&self.title(child))
                ));
            }
        }
        out.push_str("</ul></div>\n");
        out
    }

    /// Outgoing connections grouped by relation label
    fn links_block(&self, node: &'a CanvasNode) -> String {
        let outgoing = self.index.outgoing(node.id.as_str());
        if outgoing.is_empty() {
            return String::new();
        }

        // Labels keep first-appearance order
        let mut groups: Vec<(&'a str, Vec<&'a CanvasNode>)> = Vec::new();
        for &target_id in outgoing {
            let Some(target) = self.index.node(target_id) else {
                continue;
            };
            let label = self.index.edge_label(node.id.as_str(), target_id);
            match groups.iter_mut().find(|(l, _)| *l == label) {
                Some((_, targets)) => targets.push(target),
                None => groups.push((label, vec![target])),
            }
        }
        if groups.is_empty() {
            return String::new();
        }

        let mut out = String::from("<div class=\"node-meta\">");
        for (label, targets) in groups {
            let links: Vec<String> = targets
                .iter()
                .map(|target| {
                    format!(
                        "<a href=\"#{}\">{}</a>",
                        escape_html(&target.id),
                        escape_html(&self.title(target))
                    )
                })
                .collect();
            out.push_str(&format!(
                "<div class=\"ref-group\"><strong>{}:</strong> {}</div>",
                escape_html(label),
                links.join(", ")
            ));
        }
        out.push_str("</div>\n");
        out
    }

    /// Embed a referenced file as an inline base64 image
    fn embed_file(&self, file: &str, title: &str) -> String {
        if file.is_empty() {
            return "<p><em>[Missing file path]</em></p>\n".to_string();
        }

        let path = self.resolve(file);
        match fs::read(&path) {
            Ok(bytes) => {
                let mime = mime_for_path(&path);
                format!(
                    "<img src=\"data:{mime};base64,{}\" alt=\"{}\">\n",
                    BASE64.encode(bytes),
                    escape_html(title)
                )
            }
            Err(err) => {
                tracing::warn!("Failed to embed file {}: {}", path.display(), err);
                format!(
                    "<p><em>[Image not found: {}]</em></p>\n",
                    escape_html(title)
                )
            }
        }
    }

    /// Resolve a web-style upload path against the asset root
    fn resolve(&self, file: &str) -> PathBuf {
        let relative = file.trim_start_matches('/');
        match self.asset_root {
            Some(root) => root.join(relative),
            None => PathBuf::from(relative),
        }
    }
}

/// MIME type inferred from the file extension, PNG by default
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

/// Whether rendered markup opens with a top-level heading element
fn starts_with_heading(html: &str) -> bool {
    let trimmed = html.trim_start();
    trimmed.starts_with("<h1") || trimmed.starts_with("<h2") || trimmed.starts_with("<h3")
}

/// Hash-prefixed inline tag labels
fn tags_block(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let labels: Vec<String> = tags
        .iter()
        .map(|tag| format!("#{}", escape_html(tag)))
        .collect();
    format!(
        "<div class=\"node-meta\"><strong>Tags:</strong> {}</div>\n",
        labels.join(", ")
    )
}
