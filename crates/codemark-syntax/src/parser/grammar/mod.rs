//! # Grammar Rules
//!
//! This module contains the grammar rules that drive parsing. Each function
//! takes a `&mut Parser` and uses its methods to:
//!
//! 1. Inspect the current token (`p.current()`, `p.at()`, `p.nth()`)
//! 2. Consume tokens, possibly reclassified (`p.bump()`, `p.bump_as()`)
//! 3. Build tree structure (`p.start()` → marker → `complete()`/`abandon()`)
//!
//! ## Module Structure
//!
//! - [`code`] - Programming languages: keywords, operator runs, JSX tags
//! - [`tags`] - Tags and attributes shared by markup and JSX
//! - [`markup`] - HTML/XML documents: tags and prose between them
//! - [`markdown`] - Headings, list markers, code spans and link targets
//!
//! ## Writing Grammar Rules
//!
//! A typical grammar function looks like:
//!
//! ```ignore
//! fn attribute(p: &mut Parser) {
//!     let m = p.start();                       // 1. Start a node
//!     p.bump_as(SyntaxKind::ATTR_NAME);        // 2. Consume, reclassified
//!     if p.eat(SyntaxKind::EQ) {
//!         p.bump_as(SyntaxKind::ATTR_VALUE);
//!     }
//!     m.complete(p, SyntaxKind::ATTRIBUTE);    // 3. Complete the node
//! }
//! ```
//!
//! ## Error Recovery
//!
//! Grammar functions must be lenient: source code in a fenced block is often
//! a fragment, and half-written tags or unclosed strings are normal. When
//! something unexpected happens, consume the token as-is and move on. Every
//! loop must make progress, and every input must produce a tree that
//! preserves all bytes.

mod code;
mod markdown;
mod markup;
mod tags;

use crate::language::LexerFamily;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Longest run of raw tokens that can be merged into one tree token.
const MAX_RUN: usize = u8::MAX as usize;

/// Nesting limit for JSX elements and expressions.
///
/// Deeper input is still consumed, just without further structure.
const MAX_DEPTH: usize = 64;

/// Parse the root document.
///
/// This is the entry point for parsing. It creates a ROOT node and hands the
/// token stream to the rules for the grammar's lexer family.
pub fn root(p: &mut Parser<'_, '_>) {
    let m = p.start();

    match p.grammar().family {
        LexerFamily::Plain => {
            while !p.at_end() {
                p.bump();
            }
        }
        LexerFamily::Markdown => markdown::document(p),
        LexerFamily::Markup => markup::document(p),
        LexerFamily::CLike | LexerFamily::Rust | LexerFamily::Script => code::document(p),
    }

    m.complete(p, SyntaxKind::ROOT);
}

/// Merge a run of non-newline tokens into one TEXT token.
///
/// The run ends before a newline or before any token `stop` accepts.
/// Trailing whitespace is left out of the run so it stays trivia. If the
/// current token is trivia or a stop token, it is consumed on its own.
fn text_run(p: &mut Parser<'_, '_>, stop: impl Fn(SyntaxKind, &str) -> bool) {
    if p.current().is_trivia() {
        p.bump();
        return;
    }

    let mut n = 0;
    let mut significant = 0;
    while n < MAX_RUN {
        let kind = p.nth(n);
        if kind == SyntaxKind::EOF || kind == SyntaxKind::NEWLINE || stop(kind, p.nth_text(n)) {
            break;
        }
        n += 1;
        if kind != SyntaxKind::WHITESPACE {
            significant = n;
        }
    }

    if significant == 0 {
        p.bump();
    } else {
        p.bump_n(significant, SyntaxKind::TEXT);
    }
}

/// Non-trivia tokens of the parsed tree, in order.
#[cfg(test)]
fn significant(input: &str, lang: crate::LanguageId) -> Vec<(SyntaxKind, String)> {
    let tree = crate::parse_language(input, lang).unwrap();
    assert_eq!(tree.text().to_string(), input);
    tree.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .filter(|token| !token.kind().is_trivia())
        .map(|token| (token.kind(), token.text().to_string()))
        .collect()
}

/// Texts of the tokens of one kind.
#[cfg(test)]
fn texts_of(input: &str, lang: crate::LanguageId, kind: SyntaxKind) -> Vec<String> {
    significant(input, lang)
        .into_iter()
        .filter(|(k, _)| *k == kind)
        .map(|(_, text)| text)
        .collect()
}
