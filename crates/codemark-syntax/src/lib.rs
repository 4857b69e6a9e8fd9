//! # codemark-syntax
//!
//! Lossless syntax trees for source code in fenced blocks, using [Rowan] +
//! [Logos], following the [rust-analyzer] architecture model.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## Why a Lossless Tree?
//!
//! A highlighter must give back exactly the text it was handed: every space,
//! every newline, every stray character. A Concrete Syntax Tree (CST)
//! preserves **every byte** of the original source, so the concatenated text
//! of all leaf tokens is always the input.
//!
//! ## Architecture Overview
//!
//! The parsing pipeline has three stages:
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Events → Sink → Rowan Tree
//!               (Logos)          (Grammar)        (GreenNodeBuilder)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! One Logos tokenizer per [`LexerFamily`] (C-like, Rust, script, markup,
//! Markdown). Lexers are context-free: an identifier is an identifier, `<` is
//! `<`.
//!
//! ```text
//! "let x = 1;" → [IDENT, WHITESPACE, IDENT, WHITESPACE, EQ, ...]
//! ```
//!
//! ### 2. Parser ([`parser`] module)
//!
//! The grammar walks the tokens and emits **events**. This is where `let`
//! becomes a KEYWORD, `=` an OPERATOR, and `<a href="x">` a TAG node with
//! TAG_NAME and ATTRIBUTE children.
//!
//! ### 3. Sink ([`parser::sink`] module)
//!
//! The sink consumes events and builds a Rowan green tree using
//! `GreenNodeBuilder`.
//!
//! ## Languages
//!
//! [`LanguageId`] is the closed set of supported languages; each has a
//! [`Grammar`] entry in a static table ([`grammar`]). Unknown names resolve
//! to [`LanguageId::Plain`], whose tree is a single TEXT token.
//!
//! ## Module Structure
//!
//! ```text
//! codemark-syntax/
//! ├── lib.rs           # This file - public API and integration tests
//! ├── language.rs      # LanguageId, aliases, static grammar table
//! ├── syntax_kind.rs   # SyntaxKind enum, TokenClass, Rowan integration
//! ├── lexer/           # One Logos tokenizer per lexer family
//! └── parser/
//!     ├── mod.rs       # Parser struct, Marker system, parse() functions
//!     ├── event.rs     # Event enum (Start, Token, Finish, Placeholder)
//!     ├── sink.rs      # Converts events to Rowan GreenNode
//!     └── grammar/     # Code, tags, markup and Markdown rules
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use codemark_syntax::{LanguageId, SyntaxKind, TokenClass, parse_language};
//!
//! let tree = parse_language("let x = 1;", LanguageId::Rust).unwrap();
//!
//! // The tree preserves all text
//! assert_eq!(tree.text().to_string(), "let x = 1;");
//!
//! // The first token is a classified keyword
//! let first = tree.first_token().unwrap();
//! assert_eq!(first.kind(), SyntaxKind::KEYWORD);
//! assert_eq!(first.kind().token_class(), Some(TokenClass::Keyword));
//! ```

pub mod language;
pub mod lexer;
pub mod parser;
pub mod syntax_kind;

pub use language::{Grammar, LanguageId, LexerFamily, grammar};
pub use parser::{parse, parse_language};
pub use syntax_kind::{CodeLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TokenClass};
