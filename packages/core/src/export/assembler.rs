//! Document Assembly
//!
//! `NarrativeExporter` is the public face of the export engine. It owns the
//! snapshot index, drives the orderer and the section renderer, and wraps
//! table of contents, body, and tag index in a fixed print-friendly HTML
//! shell. All images are embedded inline; the document has no external
//! resource references.
//!
//! # Examples
//!
//! ```rust
//! use boardspace_core::export::NarrativeExporter;
//! use boardspace_core::models::{CanvasEdge, CanvasNode};
//!
//! let nodes = vec![
//!     CanvasNode::text("a", "# Intro\nWelcome", 0.0, 0.0),
//!     CanvasNode::text("b", "Details", 0.0, 100.0),
//! ];
//! let edges = vec![CanvasEdge::new("a", "b").with_label("continues")];
//!
//! let html = NarrativeExporter::new(&nodes, &edges).to_html("My Board");
//! assert!(html.contains("<title>My Board</title>"));
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use crate::models::{CanvasEdge, CanvasNode};
use crate::utils::escape_html;

use super::{BodyRenderer, GraphIndex, MarkdownBodyRenderer, Orderer, SectionRenderer};

/// Print-oriented styling for the exported document
const DOCUMENT_STYLE: &str = r#"
body {
    max-width: 800px;
    margin: 0 auto;
    padding: 40px;
    font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
    line-height: 1.6;
    color: #333;
}
h1, h2, h3 { color: #2c3e50; page-break-after: avoid; }
a { color: #3498db; text-decoration: none; }
a:hover { text-decoration: underline; }
.node-section {
    margin-bottom: 2em;
    padding-bottom: 2em;
    border-bottom: 1px solid #eee;
}
.node-meta {
    font-size: 0.9em;
    color: #555;
    margin-bottom: 0.5em;
    background: #f9f9f9;
    padding: 8px;
    border-radius: 4px;
}
.ref-group { margin-bottom: 4px; }
img { max-width: 100%; height: auto; display: block; margin: 1em 0; border-radius: 4px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
pre {
    background: #f8f9fa;
    padding: 1em;
    border-radius: 4px;
    overflow-x: auto;
}
blockquote {
    border-left: 4px solid #3498db;
    margin: 0;
    padding-left: 1em;
    color: #555;
}
.toc {
    background: #f8f9fa;
    padding: 20px;
    border-radius: 8px;
    margin-bottom: 40px;
}
.toc ul { list-style-type: none; padding-left: 0; }
.toc li { margin-bottom: 8px; }
.tag-index {
    margin-top: 60px;
    padding-top: 20px;
    border-top: 2px solid #333;
    page-break-before: always;
}
.tag-item { margin-bottom: 0.5em; }
@media print {
    body { padding: 0; }
    .toc { display: none; }
    a { text-decoration: none; color: #000; }
    .node-section { break-inside: avoid; }
}
"#;

/// Linearizes one board snapshot into a self-contained HTML document.
///
/// Stateless between calls: every invocation rebuilds its lookup structures
/// and traversal sets, so identical snapshots produce byte-identical output
/// and concurrent exports of different snapshots need no coordination.
pub struct NarrativeExporter<'a> {
    nodes: &'a [CanvasNode],
    index: GraphIndex<'a>,
    renderer: Box<dyn BodyRenderer>,
    asset_root: Option<PathBuf>,
}

impl<'a> NarrativeExporter<'a> {
    /// Index a snapshot for export.
    ///
    /// The caller applies any export-exclusion policy beforehand (see
    /// [`crate::models::CanvasDocument::export_view`]).
    pub fn new(nodes: &'a [CanvasNode], edges: &'a [CanvasEdge]) -> Self {
        Self {
            nodes,
            index: GraphIndex::build(nodes, edges),
            renderer: Box::new(MarkdownBodyRenderer),
            asset_root: None,
        }
    }

    /// Replace the markdown rendering collaborator
    pub fn with_renderer(mut self, renderer: Box<dyn BodyRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Resolve file node paths against this directory
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = Some(root.into());
        self
    }

    /// Compute the narrative reading order without rendering
    pub fn order(&self) -> Vec<&'a CanvasNode> {
        Orderer::new(&self.index).compute(self.nodes)
    }

    /// Produce the complete export document
    pub fn to_html(&self, title: &str) -> String {
        let order = self.order();
        let sections = SectionRenderer::new(
            &self.index,
            self.renderer.as_ref(),
            self.asset_root.as_deref(),
        );

        // Table of contents
        let mut toc = String::from("<div class=\"toc\"><h2>Table of Contents</h2><ul>");
        for node in &order {
            toc.push_str(&format!(
                "<li><a href=\"#{}\">{}</a></li>",
                escape_html(&node.id),
                escape_html(&sections.title(node))
            ));
        }
        toc.push_str("</ul></div>");

        // Body sections and tag collection
        let mut body = String::new();
        let mut rendered: HashSet<&'a str> = HashSet::new();
        let mut tag_map: BTreeMap<&'a str, Vec<(&'a str, String)>> = BTreeMap::new();

        for &node in &order {
            body.push_str(&sections.render(node, &rendered));
            rendered.insert(node.id.as_str());

            let title = sections.title(node);
            for tag in &node.tags {
                tag_map
                    .entry(tag.as_str())
                    .or_default()
                    .push((node.id.as_str(), title.clone()));
            }
        }

        let tag_index = render_tag_index(&tag_map);

        tracing::debug!(
            "Exported {} of {} node(s) as '{}'",
            order.len(),
            self.nodes.len(),
            title
        );

        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"UTF-8\">\n\
             <title>{title}</title>\n\
             <style>{style}</style>\n\
             </head>\n\
             <body>\n\
             <h1>{title}</h1>\n\
             {toc}\n\
             <main>\n{body}</main>\n\
             {tag_index}\
             </body>\n\
             </html>\n",
            title = escape_html(title),
            style = DOCUMENT_STYLE,
        )
    }
}

/// Tag index: one entry per tag in ascending order, members in the order
/// they appear in the document
fn render_tag_index(tag_map: &BTreeMap<&str, Vec<(&str, String)>>) -> String {
    if tag_map.is_empty() {
        return String::new();
    }

    let mut out = String::from("<div class=\"tag-index\"><h2>Tag Index</h2><div class=\"tag-list\">");
    for (tag, members) in tag_map {
        let links: Vec<String> = members
            .iter()
            .map(|(id, title)| {
                format!("<a href=\"#{}\">{}</a>", escape_html(id), escape_html(title))
            })
            .collect();
        out.push_str(&format!(
            "<div class=\"tag-item\"><strong>#{}</strong>: {}</div>",
            escape_html(tag),
            links.join(", ")
        ));
    }
    out.push_str("</div></div>\n");
    out
}

/// One-call convenience wrapper around [`NarrativeExporter`]
pub fn export_narrative_html(
    nodes: &[CanvasNode],
    edges: &[CanvasEdge],
    title: &str,
) -> String {
    NarrativeExporter::new(nodes, edges).to_html(title)
}
