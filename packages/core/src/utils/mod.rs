//! Utility functions for BoardSpace Core
//!
//! This module provides common helpers used across the export engine.

mod html;
mod markdown;

pub use html::escape_html;
pub use markdown::strip_markdown;
