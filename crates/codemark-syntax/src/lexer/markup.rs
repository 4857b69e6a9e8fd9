//! Lexer for angle-bracket markup (HTML, XML, SVG).
//!
//! Names and quoted strings are lexed everywhere; the grammar decides whether
//! they sit inside a tag or are part of the text between tags.

use logos::Logos;

use super::RawToken;
use crate::syntax_kind::SyntaxKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"<!--([^-]|-+[^->])*-+->")]
    Comment,

    /// `<!DOCTYPE html>`, `<?xml version="1.0"?>`
    #[regex(r"<![A-Za-z][^>]*>")]
    #[regex(r"<\?[^>]*>")]
    Prolog,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("/")]
    Slash,

    #[token("=")]
    Eq,

    #[regex(r#""[^"<>]*""#)]
    #[regex(r"'[^'<>]*'")]
    Quoted,

    #[regex(r"[A-Za-z_:][A-Za-z0-9_:.\-]*")]
    Name,

    #[regex(r"&([A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9a-fA-F]+);")]
    Entity,

    #[regex(r#"[^\s<>&="'/A-Za-z_:]+"#)]
    Text,
}

impl RawToken for TokenKind {
    const UNRECOGNIZED: SyntaxKind = SyntaxKind::TEXT;

    fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Comment => SyntaxKind::COMMENT,
            TokenKind::Prolog | TokenKind::Entity => SyntaxKind::OTHER,
            TokenKind::Lt => SyntaxKind::LT,
            TokenKind::Gt => SyntaxKind::GT,
            TokenKind::Slash => SyntaxKind::SLASH,
            TokenKind::Eq => SyntaxKind::EQ,
            TokenKind::Quoted => SyntaxKind::STRING,
            TokenKind::Name => SyntaxKind::IDENT,
            TokenKind::Text => SyntaxKind::TEXT,
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

    #[test]
    fn lex_element() {
        assert_eq!(
            lex(r#"<a href="/x">Hi &amp; 42</a>"#, LexerFamily::Markup),
            vec![
                token(SyntaxKind::LT, "<"),
                token(SyntaxKind::IDENT, "a"),
                token(SyntaxKind::WHITESPACE, " "),
                token(SyntaxKind::IDENT, "href"),
                token(SyntaxKind::EQ, "="),
                token(SyntaxKind::STRING, "\"/x\""),
                token(SyntaxKind::GT, ">"),
                token(SyntaxKind::IDENT, "Hi"),
                token(SyntaxKind::WHITESPACE, " "),
                token(SyntaxKind::OTHER, "&amp;"),
                token(SyntaxKind::WHITESPACE, " "),
                token(SyntaxKind::TEXT, "42"),
                token(SyntaxKind::LT, "<"),
                token(SyntaxKind::SLASH, "/"),
                token(SyntaxKind::IDENT, "a"),
                token(SyntaxKind::GT, ">"),
            ]
        );
    }

    #[test]
    fn lex_comment_and_doctype() {
        assert_eq!(
            lex("<!DOCTYPE html><!-- a - b -->", LexerFamily::Markup),
            vec![
                token(SyntaxKind::OTHER, "<!DOCTYPE html>"),
                token(SyntaxKind::COMMENT, "<!-- a - b -->"),
            ]
        );
    }

    #[test]
    fn stray_ampersand_is_text() {
        assert_eq!(
            lex("& ", LexerFamily::Markup),
            vec![
                token(SyntaxKind::TEXT, "&"),
                token(SyntaxKind::WHITESPACE, " "),
            ]
        );
    }
}
