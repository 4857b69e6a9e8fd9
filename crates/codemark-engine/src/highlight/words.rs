//! Stage 3: turn `__marked__` text into highlighted-word spans.
//!
//! Each line wrapper is scanned on its own, so a highlight never crosses a
//! line. Within a line the concatenated leaf text is searched left to right
//! for an opening marker and then the first closing marker after it. The
//! markers are cut out of whatever tokens they sit in, and the text between
//! them is wrapped in a `span.highlighted-word`. Tokens inside the wrapper
//! keep their classes; tokens cut in half keep them on both halves.
//!
//! An opener without a closer, or with nothing between the two, is left in
//! the output as literal text.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use super::lines::{is_line_element, is_line_wrapper};
use super::vocabulary::{HIGHLIGHTED_WORD, SPAN};
use crate::tree::{Element, Node, Root};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkerError {
    #[error("word marker must not be empty")]
    Empty,
    #[error("word marker {0:?} must not contain whitespace")]
    Whitespace(String),
}

/// The delimiter written on both sides of a highlighted word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMarker(String);

impl WordMarker {
    pub const DEFAULT: &'static str = "__";

    pub fn new(marker: impl Into<String>) -> Result<Self, MarkerError> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(MarkerError::Empty);
        }
        if marker.chars().any(char::is_whitespace) {
            return Err(MarkerError::Whitespace(marker));
        }
        Ok(Self(marker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WordMarker {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl FromStr for WordMarker {
    type Err = MarkerError;

    fn from_str(marker: &str) -> Result<Self, Self::Err> {
        Self::new(marker)
    }
}

impl fmt::Display for WordMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace marker pairs with highlighted-word spans.
///
/// When the root has line wrappers each one is processed separately;
/// otherwise the root's children are processed as one unit and a pair may
/// not enclose a newline.
pub fn annotate_words(root: Root, marker: &WordMarker) -> Root {
    if root.children.iter().any(is_line_wrapper) {
        let children = root
            .children
            .into_iter()
            .map(|child| match child {
                Node::Element(mut line) if is_line_element(&line) => {
                    line.children = annotate_run(std::mem::take(&mut line.children), marker);
                    line.into()
                }
                other => other,
            })
            .collect();
        Root::new(children)
    } else {
        Root::new(annotate_run(root.children, marker))
    }
}

/// Byte ranges of one marker pair within a run's text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pair {
    open: Range<usize>,
    content: Range<usize>,
    close: Range<usize>,
}

fn find_pairs(text: &str, marker: &str) -> Vec<Pair> {
    let mut pairs = Vec::new();
    let mut from = 0;

    while let Some(found) = text[from..].find(marker) {
        let open = from + found..from + found + marker.len();
        let after = &text[open.end..];

        match after.find(marker) {
            Some(len) if len > 0 && !after[..len].contains('\n') => {
                let content = open.end..open.end + len;
                let close = content.end..content.end + marker.len();
                from = close.end;
                pairs.push(Pair {
                    open,
                    content,
                    close,
                });
            }
            _ => from = open.end,
        }
    }

    pairs
}

fn annotate_run(children: Vec<Node>, marker: &WordMarker) -> Vec<Node> {
    let text: String = children.iter().map(Node::to_text).collect();
    let pairs = find_pairs(&text, marker.as_str());
    if pairs.is_empty() {
        return children;
    }

    let mut out = Vec::new();
    let mut kept_from = 0;
    for pair in &pairs {
        out.extend(slice(&children, kept_from..pair.open.start));
        out.push(
            Element::new(SPAN)
                .with_class(HIGHLIGHTED_WORD)
                .with_children(slice(&children, pair.content.clone()))
                .into(),
        );
        kept_from = pair.close.end;
    }
    out.extend(slice(&children, kept_from..text.len()));
    out
}

/// The part of `nodes` covering bytes `range` of their concatenated text.
///
/// Nodes fully inside the range are cloned whole; nodes cut by it are
/// rebuilt from their shell and the covered part of their children.
fn slice(nodes: &[Node], range: Range<usize>) -> Vec<Node> {
    let mut out = Vec::new();
    if range.is_empty() {
        return out;
    }

    let mut offset = 0;
    for node in nodes {
        let start = offset;
        let end = start + node.text_len();
        offset = end;

        if end <= range.start || start >= range.end {
            continue;
        }
        if range.start <= start && end <= range.end {
            out.push(node.clone());
            continue;
        }

        let local = range.start.saturating_sub(start)..range.end.min(end) - start;
        match node {
            Node::Text(text) => out.push(Node::text(&text.value[local])),
            Node::Element(element) => {
                let children = slice(&element.children, local);
                if !children.is_empty() {
                    out.push(element.shell().with_children(children).into());
                }
            }
            Node::Root(root) => out.extend(slice(&root.children, local)),
        }
    }
    out
}
