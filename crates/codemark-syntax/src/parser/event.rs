//! # Parser Events
//!
//! Events are the intermediate representation between parsing and tree building.
//! Instead of building the tree directly, the parser emits a **flat sequence**
//! of events that describe the tree structure:
//!
//! ```text
//! Start(TAG)           ← Begin a TAG node
//!   Token(LT)          ← Add a `<` token
//!   Token(TAG_NAME)    ← An IDENT the grammar reclassified
//!   Token(GT)
//! Finish               ← End the TAG node
//! ```
//!
//! The Sink processes these in order, maintaining a stack of open nodes.
//! Start pushes, Finish pops.

use crate::syntax_kind::SyntaxKind;

/// An event emitted by the parser during tree construction.
///
/// Events form a flat representation of the tree that the [`Sink`](super::sink::Sink)
/// converts into an actual Rowan tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a new composite node.
    Start { kind: SyntaxKind },

    /// Add a token to the current node.
    ///
    /// The `kind` is the lexer token's kind unless the grammar reclassified
    /// it (an `IDENT` that is a keyword, a `<` that is an operator).
    ///
    /// The `n_raw_tokens` field says how many lexer tokens this event
    /// consumes. Usually 1, but prose runs in markup are grouped.
    Token { kind: SyntaxKind, n_raw_tokens: u8 },

    /// Finish the current node.
    ///
    /// Must be paired with a preceding `Start`.
    Finish,

    /// A placeholder that will be replaced.
    ///
    /// When `parser.start()` is called, a `Placeholder` is pushed. Later,
    /// `marker.complete()` replaces it with a real `Start`, or
    /// `marker.abandon()` leaves it (the Sink ignores placeholders).
    Placeholder,
}

impl Event {
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start { kind }
    }

    /// Create a token event for a single raw token.
    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token {
            kind,
            n_raw_tokens: 1,
        }
    }
}
