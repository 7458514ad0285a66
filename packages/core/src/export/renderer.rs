//! Body Rendering Collaborator
//!
//! The export engine does not know how markdown becomes markup; it delegates
//! to a [`BodyRenderer`]. The default implementation is backed by
//! pulldown-cmark with the subset the whiteboard editor supports: headings,
//! fenced code blocks, tables, and soft line breaks rendered as line breaks.

use pulldown_cmark::{html, Event, Options, Parser};

/// Converts a text card's markdown body into HTML.
pub trait BodyRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// Default markdown renderer backed by pulldown-cmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownBodyRenderer;

impl BodyRenderer for MarkdownBodyRenderer {
    fn render(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        // Cards treat a single newline as a line break
        let parser = Parser::new_ext(markdown, options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            event => event,
        });

        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}
