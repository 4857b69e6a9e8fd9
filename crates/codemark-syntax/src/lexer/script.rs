//! Lexer for `#`-comment languages: shell, Python, TOML and YAML.

use logos::Logos;

use super::RawToken;
use crate::syntax_kind::SyntaxKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"#[^\n]*")]
    Comment,

    #[regex(r#""""([^"]|"[^"]|""[^"])*""""#)]
    #[regex(r"'''([^']|'[^']|''[^'])*'''")]
    TripleQuoted,

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    DoubleQuoted,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    SingleQuoted,

    /// Shell parameter expansion (`$HOME`, `${name}`, `$?`).
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*")]
    #[regex(r"\$\{[^}\n]*\}")]
    #[regex(r"\$[0-9@#?*!$-]")]
    Variable,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[A-Za-z0-9_]*")]
    Number,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[-+*/%=<>!&|^~?:]+")]
    Operator,

    #[regex(r#"[(){}\[\];,.@$\\"'`]"#)]
    Punctuation,
}

impl RawToken for TokenKind {
    const UNRECOGNIZED: SyntaxKind = SyntaxKind::OTHER;

    fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Comment => SyntaxKind::COMMENT,
            TokenKind::TripleQuoted | TokenKind::DoubleQuoted | TokenKind::SingleQuoted => {
                SyntaxKind::STRING
            }
            TokenKind::Variable | TokenKind::Ident => SyntaxKind::IDENT,
            TokenKind::Number => SyntaxKind::NUMBER,
            TokenKind::Operator => SyntaxKind::OPERATOR,
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

    #[test]
    fn lex_shell_line() {
        assert_eq!(
            lex("echo \"$HOME\" # home\n", LexerFamily::Script),
            vec![
                token(SyntaxKind::IDENT, "echo"),
                token(SyntaxKind::WHITESPACE, " "),
                token(SyntaxKind::STRING, "\"$HOME\""),
                token(SyntaxKind::WHITESPACE, " "),
                token(SyntaxKind::COMMENT, "# home"),
                token(SyntaxKind::NEWLINE, "\n"),
            ]
        );
    }

    #[test]
    fn lex_variables() {
        let tokens = lex("$1 ${x:-y} $name", LexerFamily::Script);
        let idents: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == SyntaxKind::IDENT)
            .map(|t| t.text)
            .collect();
        assert_eq!(idents, vec!["$1", "${x:-y}", "$name"]);
    }

    #[test]
    fn lex_python_docstring() {
        assert_eq!(
            lex("\"\"\"doc\n\"string\"\n\"\"\"", LexerFamily::Script),
            vec![token(SyntaxKind::STRING, "\"\"\"doc\n\"string\"\n\"\"\"")]
        );
    }

    #[test]
    fn slash_and_angle_brackets_are_operators() {
        assert_eq!(
            lex("a>/b", LexerFamily::Script),
            vec![
                token(SyntaxKind::IDENT, "a"),
                token(SyntaxKind::OPERATOR, ">/"),
                token(SyntaxKind::IDENT, "b"),
            ]
        );
    }
}
