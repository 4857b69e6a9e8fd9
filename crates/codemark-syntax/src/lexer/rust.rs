//! Lexer for Rust.
//!
//! Separate from the C-style lexer because `'` starts either a char literal or
//! a lifetime, and raw strings use their own quoting.

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

    #[regex(r#"b?"([^"\\]|\\(.|\n))*""#)]
    Str,

    #[regex(r#"b?r"[^"]*""#)]
    #[regex(r##"b?r#"([^"]|"[^#])*"#"##)]
    RawStr,

    #[regex(r"b?'([^'\\\n]|\\[^\n]|\\u\{[0-9a-fA-F]{1,6}\})'")]
    Char,

    #[regex(r"'[A-Za-z_][A-Za-z0-9_]*")]
    Lifetime,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[A-Za-z0-9_]*")]
    Number,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
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

    #[regex(r#"[(){}\[\];,.@#$\\"'`]"#)]
    Punctuation,
}

impl RawToken for TokenKind {
    const UNRECOGNIZED: SyntaxKind = SyntaxKind::OTHER;

    fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::LineComment | TokenKind::BlockComment => SyntaxKind::COMMENT,
            TokenKind::Str | TokenKind::RawStr | TokenKind::Char => SyntaxKind::STRING,
            TokenKind::Lifetime => SyntaxKind::OTHER,
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

#[cfg(test)]
mod tests {
    use crate::language::LexerFamily;
    use crate::lexer::{Token, lex};
    use crate::syntax_kind::SyntaxKind;
    use pretty_assertions::assert_eq;

    fn token(kind: SyntaxKind, text: &str) -> Token<'_> {
        Token { kind, text }
    }

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        lex(input, LexerFamily::Rust)
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lifetimes_are_not_strings() {
        assert_eq!(
            lex("&'a str, 'b'", LexerFamily::Rust),
            vec![
                token(SyntaxKind::OPERATOR, "&"),
                token(SyntaxKind::OTHER, "'a"),
                token(SyntaxKind::WHITESPACE, " "),
                token(SyntaxKind::IDENT, "str"),
                token(SyntaxKind::PUNCTUATION, ","),
                token(SyntaxKind::WHITESPACE, " "),
                token(SyntaxKind::STRING, "'b'"),
            ]
        );
    }

    #[test]
    fn char_escapes() {
        assert_eq!(kinds(r"'\n'"), vec![SyntaxKind::STRING]);
        assert_eq!(kinds(r"'\u{1F600}'"), vec![SyntaxKind::STRING]);
        assert_eq!(kinds("b'x'"), vec![SyntaxKind::STRING]);
    }

    #[test]
    fn raw_and_multiline_strings() {
        assert_eq!(kinds(r#"r"C:\path""#), vec![SyntaxKind::STRING]);
        assert_eq!(kinds(r##"r#"say "hi" now"#"##), vec![SyntaxKind::STRING]);
        assert_eq!(kinds("\"a\nb\""), vec![SyntaxKind::STRING]);
    }

    #[test]
    fn range_is_not_a_float() {
        assert_eq!(
            lex("0..10", LexerFamily::Rust),
            vec![
                token(SyntaxKind::NUMBER, "0"),
                token(SyntaxKind::PUNCTUATION, "."),
                token(SyntaxKind::PUNCTUATION, "."),
                token(SyntaxKind::NUMBER, "10"),
            ]
        );
    }

    #[test]
    fn numeric_suffixes() {
        assert_eq!(kinds("1_000u32"), vec![SyntaxKind::NUMBER]);
        assert_eq!(kinds("0xFF"), vec![SyntaxKind::NUMBER]);
    }
}
