//! # Code Block Highlighting
//!
//! Three stages run over one code block at a time, each taking the previous
//! stage's tree by value:
//!
//! ```text
//! source ─ tokenize ─▶ token tree ─ annotate_lines ─▶ line wrappers ─ annotate_words ─▶ result
//!          (language)               (line ranges)                     (word marker)
//! ```
//!
//! [`process`] finds `pre > code` blocks in a document and runs the
//! pipeline on each. [`highlight`] runs it on bare source text.
//!
//! Every stage is total: unknown languages, malformed line ranges and
//! unterminated markers all degrade to plain output rather than errors.

mod dispatch;
mod lines;
mod ranges;
mod tokenize;
pub mod vocabulary;
mod words;

use codemark_syntax::LanguageId;

pub use dispatch::{process, process_with};
pub use lines::{annotate_lines, line_wrapper};
pub use ranges::LineRanges;
pub use tokenize::{TokenizeError, plain, token_span, tokenize, try_tokenize};
pub use words::{MarkerError, WordMarker, annotate_words};

use crate::tree::{Element, Root};
use vocabulary::{LANGUAGE_PREFIX, LINE_PROPERTY, MARKER_PROPERTY};

/// Settings used when a code block does not say otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Language for blocks without a `language-*` class.
    pub default_language: LanguageId,
    /// Marker for blocks without a `marker` property.
    pub word_marker: WordMarker,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            default_language: LanguageId::Plain,
            word_marker: WordMarker::default(),
        }
    }
}

/// Everything the pipeline needs to know about one code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub source: String,
    pub language: LanguageId,
    pub lines: LineRanges,
    pub marker: WordMarker,
}

impl CodeBlock {
    /// Read a `code` element's language class, `line` and `marker`
    /// properties and text.
    pub fn from_element(code: &Element, options: &HighlightOptions) -> Self {
        let language = code
            .class_list
            .strip_first_prefixed(LANGUAGE_PREFIX)
            .map(LanguageId::resolve)
            .unwrap_or(options.default_language);

        let lines = code
            .property(LINE_PROPERTY)
            .map(LineRanges::parse)
            .unwrap_or_default();

        let marker = match code.property(MARKER_PROPERTY).map(WordMarker::new) {
            Some(Ok(marker)) => marker,
            Some(Err(err)) => {
                log::debug!("ignoring marker property: {err}");
                options.word_marker.clone()
            }
            None => options.word_marker.clone(),
        };

        Self {
            source: code.to_text(),
            language,
            lines,
            marker,
        }
    }

    pub fn highlight(&self) -> Root {
        highlight(&self.source, self.language, &self.lines, &self.marker)
    }
}

/// Run all three stages on `source`.
pub fn highlight(source: &str, language: LanguageId, lines: &LineRanges, marker: &WordMarker) -> Root {
    let tokens = tokenize(source, language);
    let wrapped = annotate_lines(tokens, lines);
    annotate_words(wrapped, marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;
    use pretty_assertions::assert_eq;

    #[test]
    fn highlight_runs_every_stage() {
        let root = highlight(
            "const __a__ = <b />;\nok",
            LanguageId::Tsx,
            &LineRanges::parse("2"),
            &WordMarker::default(),
        );
        insta::assert_snapshot!(Node::Root(root).outline(), @r#"
        root
          span.line data-line="1"
            span.token.keyword
              "const"
            " "
            span.highlighted-word
              span.token.identifier
                "a"
            " "
            span.token.operator
              "="
            " "
            span.token.tag
              span.token.punctuation
                "<"
              span.token.tag-name
                "b"
              " "
              span.token.punctuation
                "/"
              span.token.punctuation
                ">"
            span.token.punctuation
              ";"
            "\n"
          span.line.line--highlighted data-line="2"
            span.token.identifier
              "ok"
        "#);
    }

    #[test]
    fn code_block_reads_element() {
        let code = Element::new("code")
            .with_class("language-sh")
            .with_class("language-rust")
            .with_property("line", "1-2")
            .with_property("marker", "**")
            .with_text("echo");
        let block = CodeBlock::from_element(&code, &HighlightOptions::default());
        assert_eq!(
            block,
            CodeBlock {
                source: "echo".to_string(),
                language: LanguageId::Bash,
                lines: LineRanges::parse("1,2"),
                marker: WordMarker::new("**").unwrap(),
            }
        );
    }

    #[test]
    fn default_options() {
        let options = HighlightOptions::default();
        assert_eq!(options.default_language, LanguageId::Plain);
        assert_eq!(options.word_marker.as_str(), "__");
    }

    #[test]
    fn tree_types_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Node>();
        assert_send_sync::<HighlightOptions>();
        assert_send_sync::<CodeBlock>();
    }
}
