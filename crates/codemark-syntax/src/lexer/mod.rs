//! # Lexer - Tokenizing Source Code
//!
//! This module provides the first stage of parsing: breaking source text into
//! tokens using the [Logos] lexer generator. There is one Logos enum per
//! [`LexerFamily`]; the family comes from the language's grammar entry.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! The most important property of every lexer here is that **every byte in the
//! input appears in exactly one token**. We never skip or discard characters.
//! Input a lexer doesn't recognize comes out as that family's fallback kind
//! (`OTHER` for code, `TEXT` for markup and prose):
//!
//! ```
//! use codemark_syntax::{LexerFamily, lexer::lex};
//!
//! let input = "let x = \"é\"; // done\n";
//! let tokens = lex(input, LexerFamily::Rust);
//!
//! // Concatenating all token texts gives back the original
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Context-Free Tokens
//!
//! Lexers don't know whether an identifier is a keyword, whether `<` opens a
//! tag or compares two numbers, or whether a bare word sits inside a tag.
//! They emit raw kinds (`IDENT`, `LT`, `EQ`, ...) and the grammar remaps them.
//!
//! ## Public API
//!
//! - [`lex`] - Tokenize input, returning `Vec<Token>`
//! - [`lex_with_spans`] - Tokenize with byte offset spans
//! - [`Token`] - A token with its kind and text slice

mod c_like;
mod markdown;
mod markup;
mod rust;
mod script;

use std::ops::Range;

use logos::Logos;

use crate::language::LexerFamily;
use crate::syntax_kind::SyntaxKind;

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// A Logos token enum that maps onto [`SyntaxKind`].
trait RawToken: Copy {
    /// Kind used for input the Logos rules reject.
    const UNRECOGNIZED: SyntaxKind;

    fn to_syntax_kind(self) -> SyntaxKind;
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str, family: LexerFamily) -> Vec<Token<'_>> {
    lex_with_spans(input, family)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str, family: LexerFamily) -> Vec<(Token<'_>, Range<usize>)> {
    match family {
        LexerFamily::Plain => plain(input),
        LexerFamily::Markdown => run::<markdown::TokenKind>(input),
        LexerFamily::CLike => run::<c_like::TokenKind>(input),
        LexerFamily::Rust => run::<rust::TokenKind>(input),
        LexerFamily::Script => run::<script::TokenKind>(input),
        LexerFamily::Markup => run::<markup::TokenKind>(input),
    }
}

fn plain(input: &str) -> Vec<(Token<'_>, Range<usize>)> {
    if input.is_empty() {
        return Vec::new();
    }
    vec![(
        Token {
            kind: SyntaxKind::TEXT,
            text: input,
        },
        0..input.len(),
    )]
}

fn run<'a, T>(input: &'a str) -> Vec<(Token<'a>, Range<usize>)>
where
    T: RawToken + Logos<'a, Source = str, Extras = ()>,
{
    let mut tokens = Vec::new();
    let mut lexer = T::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            Err(_) => T::UNRECOGNIZED,
        };
        tokens.push((
            Token {
                kind,
                text: lexer.slice(),
            },
            span,
        ));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const FAMILIES: [LexerFamily; 6] = [
        LexerFamily::Plain,
        LexerFamily::Markdown,
        LexerFamily::CLike,
        LexerFamily::Rust,
        LexerFamily::Script,
        LexerFamily::Markup,
    ];

    #[test]
    fn lex_empty_input() {
        for family in FAMILIES {
            assert_eq!(lex("", family), vec![]);
        }
    }

    #[test]
    fn plain_is_a_single_token() {
        let tokens = lex("a\nb <c>", LexerFamily::Plain);
        assert_eq!(
            tokens,
            vec![Token {
                kind: SyntaxKind::TEXT,
                text: "a\nb <c>"
            }]
        );
    }

    #[test]
    fn spans_are_correct() {
        let input = "const x = `a\n${b}`; /* c */";
        for family in FAMILIES {
            for (token, span) in lex_with_spans(input, family) {
                assert_eq!(token.text, &input[span]);
            }
        }
    }

    proptest! {
        #[test]
        fn all_bytes_preserved(input in "\\PC*") {
            for family in FAMILIES {
                let reconstructed: String = lex(&input, family).iter().map(|t| t.text).collect();
                prop_assert_eq!(&input, &reconstructed);
            }
        }

        #[test]
        fn all_bytes_preserved_in_code_like_input(input in "[a-z<>/=\"'`#*{}() \n\\\\-]{0,40}") {
            for family in FAMILIES {
                let reconstructed: String = lex(&input, family).iter().map(|t| t.text).collect();
                prop_assert_eq!(&input, &reconstructed);
            }
        }
    }
}
