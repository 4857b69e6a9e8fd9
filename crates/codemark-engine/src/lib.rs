//! # codemark-engine
//!
//! Markdown to HTML with highlighted code blocks.
//!
//! ```text
//! Markdown ─ markdown ─▶ tree ─ highlight::process ─▶ tree ─ render ─▶ HTML
//! ```
//!
//! The [`highlight`] module is the core: it rewrites the children of every
//! `pre > code` element into token, line and word spans. The other modules
//! get documents into and out of the [`tree`] form.
//!
//! ```
//! use codemark_engine::{HighlightOptions, markdown_to_html};
//!
//! let html = markdown_to_html("```rs line=1\nlet x;\n```\n", &HighlightOptions::default());
//! assert!(html.contains(r#"<span class="line line--highlighted" data-line="1">"#));
//! ```

pub mod highlight;
pub mod io;
pub mod markdown;
pub mod models;
pub mod render;
pub mod tree;

#[cfg(test)]
pub mod tests;

pub use highlight::{
    CodeBlock, HighlightOptions, LineRanges, MarkerError, TokenizeError, WordMarker,
    annotate_lines, annotate_words, highlight, process, process_with, tokenize,
};
pub use io::*;
pub use models::Page;
pub use tree::{ClassList, Element, Node, Root, Text};

pub use codemark_syntax::LanguageId;

/// Parse Markdown and highlight its code blocks.
pub fn markdown_to_tree(source: &str, options: &HighlightOptions) -> Node {
    process_with(markdown::parse_markdown(source).into(), options)
}

/// Markdown to an HTML fragment with highlighted code blocks.
pub fn markdown_to_html(source: &str, options: &HighlightOptions) -> String {
    render::to_html(&markdown_to_tree(source, options))
}
