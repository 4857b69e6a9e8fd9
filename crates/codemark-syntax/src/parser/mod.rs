//! # Parser - Event-Based Tree Construction
//!
//! This module turns a token stream into a syntax tree using the
//! **event-based** architecture from rust-analyzer.
//!
//! For code highlighting the tree is shallow: most tokens hang directly off
//! the ROOT node. The grammar's real work is reclassification (identifiers
//! become keywords, tag names or attribute names depending on where they
//! appear) and grouping markup into TAG and ATTRIBUTE nodes.
//!
//! ## The Marker System
//!
//! When you call `parser.start()`, you get a [`Marker`]. This marker **must**
//! be either:
//!
//! - Completed with `marker.complete(parser, KIND)` → emits Start+Finish
//! - Abandoned with `marker.abandon(parser)` → removes the placeholder
//!
//! If you drop a marker without doing either, **the program panics**. This
//! prevents accidentally leaving the tree in an inconsistent state.
//!
//! ```ignore
//! let m = parser.start();           // Get a marker
//! parser.bump();                    // Consume some tokens
//! m.complete(parser, SyntaxKind::TAG);  // MUST complete or abandon
//! ```
//!
//! ## Public API
//!
//! The main entry points are [`parse`] and [`parse_language`]:
//!
//! ```
//! use codemark_syntax::{LanguageId, SyntaxKind, parse_language};
//!
//! let tree = parse_language("<a href='x'>", LanguageId::Html).unwrap();
//! let tag = tree.children().next().unwrap();
//! assert_eq!(tag.kind(), SyntaxKind::TAG);
//! ```

pub mod event;
pub mod sink;

mod grammar;

use crate::language::{Grammar, LanguageId};
use crate::lexer::{Token, lex};
use crate::syntax_kind::{SyntaxKind, SyntaxNode};
use event::Event;
use sink::Sink;

/// The parser state machine.
///
/// Holds the token stream, current position, and accumulated events.
/// Grammar functions receive `&mut Parser` and use its methods to:
///
/// - Inspect tokens: `current()`, `nth()`, `at()`, `current_text()`
/// - Consume tokens: `bump()`, `bump_as()`, `bump_n()`, `eat()`
/// - Build structure: `start()` → `Marker` → `complete()`/`abandon()`
pub struct Parser<'t, 'input> {
    tokens: &'t [Token<'input>],
    pos: usize,
    events: Vec<Event>,
    grammar: &'static Grammar,
}

impl<'t, 'input> Parser<'t, 'input> {
    pub fn new(tokens: &'t [Token<'input>], grammar: &'static Grammar) -> Self {
        Self {
            tokens,
            pos: 0,
            events: Vec::new(),
            grammar,
        }
    }

    /// Parse the tokens and return a syntax tree.
    pub fn parse(mut self) -> SyntaxNode {
        grammar::root(&mut self);
        let sink = Sink::new(self.tokens, self.events);
        sink.finish()
    }

    /// The grammar table entry driving this parse.
    pub fn grammar(&self) -> &'static Grammar {
        self.grammar
    }

    /// Start a new node and return a marker.
    pub fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            completed: false,
        }
    }

    /// Current token kind, or EOF if past end.
    pub fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    /// Look ahead n tokens.
    pub fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Text of the token n ahead, or "" past the end.
    pub fn nth_text(&self, n: usize) -> &'input str {
        self.tokens.get(self.pos + n).map(|t| t.text).unwrap_or("")
    }

    /// Get the text of the current token.
    pub fn current_text(&self) -> &'input str {
        self.nth_text(0)
    }

    /// Check if at end of input.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Check if current token is of given kind.
    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Check if the current token is exactly `text`.
    pub fn at_text(&self, text: &str) -> bool {
        !self.at_end() && self.current_text() == text
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the current token unconditionally.
    pub fn bump(&mut self) {
        let kind = self.current();
        self.bump_as(kind);
    }

    /// Consume the current token, recording it as `kind`.
    pub fn bump_as(&mut self, kind: SyntaxKind) {
        if !self.at_end() {
            self.events.push(Event::token(kind));
            self.pos += 1;
        }
    }

    /// Consume n tokens as a single composite token.
    pub fn bump_n(&mut self, n: usize, kind: SyntaxKind) {
        if n > 0 && n <= u8::MAX as usize && self.pos + n <= self.tokens.len() {
            self.events.push(Event::Token {
                kind,
                n_raw_tokens: n as u8,
            });
            self.pos += n;
        }
    }

    /// Check if we're at the start of a line (after newline or at start).
    pub fn at_line_start(&self) -> bool {
        if self.pos == 0 {
            return true;
        }
        self.tokens
            .get(self.pos - 1)
            .map(|t| t.kind == SyntaxKind::NEWLINE)
            .unwrap_or(false)
    }

    /// The closest already-consumed token that isn't trivia.
    pub fn prev_significant(&self) -> Option<&Token<'input>> {
        self.tokens[..self.pos.min(self.tokens.len())]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
    }
}

/// A marker for a node being constructed.
///
/// When you call `parser.start()`, a `Placeholder` event is pushed and you get
/// a `Marker` pointing to it. The `#[must_use]` attribute and the `Drop` impl
/// together enforce that every marker is either completed or abandoned.
#[must_use = "Markers must be completed or abandoned, dropping them is a bug"]
pub struct Marker {
    /// Position in the events vector where our Placeholder lives
    pos: usize,
    /// Tracks whether complete() or abandon() was called
    completed: bool,
}

impl Marker {
    /// Complete this marker, creating a node of the given kind.
    pub fn complete(mut self, p: &mut Parser<'_, '_>, kind: SyntaxKind) {
        self.completed = true;
        let event_at_pos = &mut p.events[self.pos];
        assert!(matches!(event_at_pos, Event::Placeholder));
        *event_at_pos = Event::start(kind);
        p.events.push(Event::Finish);
    }

    /// Abandon this marker without creating a node.
    ///
    /// **Note**: This only removes the placeholder if it's the last event.
    /// If other events were pushed after `start()`, the placeholder becomes
    /// inert and is ignored by the Sink.
    pub fn abandon(mut self, p: &mut Parser<'_, '_>) {
        self.completed = true;
        if self.pos == p.events.len() - 1 {
            match p.events.pop() {
                Some(Event::Placeholder) => {}
                _ => unreachable!(),
            }
        }
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.completed && !std::thread::panicking() {
            panic!("Marker must be either completed or abandoned");
        }
    }
}

/// Parse source code with the given grammar.
pub fn parse(source: &str, grammar: &'static Grammar) -> SyntaxNode {
    let tokens = lex(source, grammar.family);
    let parser = Parser::new(&tokens, grammar);
    parser.parse()
}

/// Parse source code in a registered language.
///
/// Returns `None` only if the language has no entry in the grammar table.
pub fn parse_language(source: &str, lang: LanguageId) -> Option<SyntaxNode> {
    crate::language::grammar(lang).map(|grammar| parse(source, grammar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::grammar;
    use pretty_assertions::assert_eq;

    fn plain() -> &'static Grammar {
        grammar(LanguageId::Plain).unwrap()
    }

    #[test]
    fn parse_empty_input() {
        let tree = parse_language("", LanguageId::Rust).unwrap();
        assert_eq!(tree.kind(), SyntaxKind::ROOT);
        assert_eq!(tree.children_with_tokens().count(), 0);
    }

    #[test]
    fn parse_preserves_all_text() {
        for lang in LanguageId::ALL {
            let input = "fn main() { let x = <a b=\"c\">; } # done\n";
            let tree = parse_language(input, lang).unwrap();
            assert_eq!(tree.text(), input, "language {lang:?}");
        }
    }

    #[test]
    fn prev_significant_skips_trivia() {
        let tokens = lex("a  \n<", LexerFamily::CLike);
        let mut parser = Parser::new(&tokens, plain());
        while !parser.at(SyntaxKind::LT) {
            parser.bump();
        }
        assert_eq!(parser.prev_significant().map(|t| t.text), Some("a"));
        let m = parser.start();
        m.abandon(&mut parser);
    }

    #[test]
    fn bump_n_rejects_oversized_groups() {
        let tokens = lex("a b", LexerFamily::Markup);
        let mut parser = Parser::new(&tokens, plain());
        parser.bump_n(4, SyntaxKind::TEXT);
        assert_eq!(parser.current_text(), "a");
        parser.bump_n(3, SyntaxKind::TEXT);
        assert!(parser.at_end());
    }

    #[test]
    fn marker_must_be_completed() {
        let result = std::panic::catch_unwind(|| {
            let tokens = lex("test", LexerFamily::Plain);
            let mut parser = Parser::new(&tokens, plain());
            let _marker = parser.start();
            // Marker dropped without completion - should panic
        });
        assert!(result.is_err());
    }

    #[test]
    fn marker_can_be_abandoned() {
        let tokens = lex("test", LexerFamily::Plain);
        let mut parser = Parser::new(&tokens, plain());
        let marker = parser.start();
        marker.abandon(&mut parser);
        // Should not panic
    }

    use crate::language::LexerFamily;
}
