//! Lexer for Markdown code blocks.
//!
//! Tokens are kept **minimal and context-free**. The lexer doesn't know if `*`
//! starts a list, emphasis, or a thematic break - that's the grammar's job.
//!
//! Special characters that have syntactic meaning get their own token so the
//! grammar can look at them one at a time:
//! - `#` (headings), `>` (blockquotes)
//! - `-`, `*`, `+` (lists, emphasis, thematic breaks)
//! - `[`, `]`, `(`, `)`, `|` (links, tables)
//! - `` ` ``, `~` (code spans, fences)
//!
//! Everything else becomes TEXT, grouped into runs of consecutive characters
//! (e.g., "Hello" is one TEXT token, not five).

use logos::Logos;

use super::RawToken;
use crate::syntax_kind::SyntaxKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Horizontal whitespace (spaces, tabs)
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    #[token(">")]
    Gt,

    #[token("-")]
    Dash,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("`")]
    Backtick,

    #[token("~")]
    Tilde,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("|")]
    Pipe,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("#")]
    Hash,

    /// Plain text - anything not matched by other rules
    #[regex(r"[^\s\[\]()>`*+#|~-]+")]
    Text,
}

impl RawToken for TokenKind {
    const UNRECOGNIZED: SyntaxKind = SyntaxKind::TEXT;

    fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Text => SyntaxKind::TEXT,
            TokenKind::Gt
            | TokenKind::Dash
            | TokenKind::Star
            | TokenKind::Plus
            | TokenKind::Backtick
            | TokenKind::Tilde
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::Pipe
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::Hash => SyntaxKind::PUNCTUATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::language::LexerFamily;
    use crate::lexer::{Token, lex};
    use crate::syntax_kind::SyntaxKind;
    use pretty_assertions::assert_eq;

    fn token(kind: SyntaxKind, text: &str) -> Token<'_> {
        Token { kind, text }
    }

    fn punct(text: &str) -> Token<'_> {
        token(SyntaxKind::PUNCTUATION, text)
    }

    fn lex_md(input: &str) -> Vec<Token<'_>> {
        lex(input, LexerFamily::Markdown)
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex_md("hello"), vec![token(SyntaxKind::TEXT, "hello")]);
    }

    #[test]
    fn lex_newline_crlf() {
        assert_eq!(lex_md("\r\n"), vec![token(SyntaxKind::NEWLINE, "\r\n")]);
    }

    #[test]
    fn lex_heading_markers() {
        assert_eq!(
            lex_md("## "),
            vec![
                punct("#"),
                punct("#"),
                token(SyntaxKind::WHITESPACE, " "),
            ]
        );
    }

    #[test]
    fn lex_list_markers() {
        assert_eq!(
            lex_md("- * + "),
            vec![
                punct("-"),
                token(SyntaxKind::WHITESPACE, " "),
                punct("*"),
                token(SyntaxKind::WHITESPACE, " "),
                punct("+"),
                token(SyntaxKind::WHITESPACE, " "),
            ]
        );
    }

    #[test]
    fn lex_link() {
        assert_eq!(
            lex_md("[text](url)"),
            vec![
                punct("["),
                token(SyntaxKind::TEXT, "text"),
                punct("]"),
                punct("("),
                token(SyntaxKind::TEXT, "url"),
                punct(")"),
            ]
        );
    }

    #[test]
    fn lex_code_span() {
        assert_eq!(
            lex_md("`x`"),
            vec![punct("`"), token(SyntaxKind::TEXT, "x"), punct("`")]
        );
    }
}
