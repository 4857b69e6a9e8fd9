//! Lexer for C-style languages: JavaScript, TypeScript (and their JSX
//! dialects), JSON and CSS.
//!
//! `<`, `>`, `/` and `=` are single-character tokens rather than part of the
//! operator run so the grammar can recognize JSX tags. Outside tags the
//! grammar reclassifies them as operators.

use logos::Logos;

use super::RawToken;
use crate::syntax_kind::SyntaxKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    DoubleQuoted,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    SingleQuoted,

    /// Template literals may span lines.
    #[regex(r"`([^`\\]|\\(.|\n))*`")]
    Template,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[A-Za-z0-9_]*")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[A-Za-z%]*")]
    Number,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,

    #[regex(r"[-+*%!&|^~?:]+")]
    Operator,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("/")]
    Slash,

    #[token("=")]
    Eq,

    #[regex(r#"[(){}\[\];,.@#\\"'`]"#)]
    Punctuation,
}

impl RawToken for TokenKind {
    const UNRECOGNIZED: SyntaxKind = SyntaxKind::OTHER;

    fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::LineComment | TokenKind::BlockComment => SyntaxKind::COMMENT,
            TokenKind::DoubleQuoted | TokenKind::SingleQuoted | TokenKind::Template => {
                SyntaxKind::STRING
            }
            TokenKind::Number => SyntaxKind::NUMBER,
            TokenKind::Ident => SyntaxKind::IDENT,
            TokenKind::Operator => SyntaxKind::OPERATOR,
            TokenKind::Lt => SyntaxKind::LT,
            TokenKind::Gt => SyntaxKind::GT,
            TokenKind::Slash => SyntaxKind::SLASH,
            TokenKind::Eq => SyntaxKind::EQ,
            TokenKind::Punctuation => SyntaxKind::PUNCTUATION,
        }
    }
}
