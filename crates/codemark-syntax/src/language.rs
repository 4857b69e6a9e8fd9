//! # Language Registry
//!
//! The finite set of languages the tokenizer understands, the aliases used to
//! name them in fenced code blocks, and the static grammar table that tells
//! the lexer and grammar how to treat each one.
//!
//! The table is built lazily on first use and is read-only afterwards, so it
//! can be shared by any number of threads tokenizing at the same time.
//!
//! Every [`LanguageId`] has an entry, and [`LanguageId::Plain`] is the
//! mandatory fallback: names that resolve to nothing are highlighted as plain
//! text rather than rejected.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// A language with a registered grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LanguageId {
    Plain,
    Markdown,
    Rust,
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Json,
    Css,
    Html,
    Xml,
    Bash,
    Python,
    Toml,
    Yaml,
}

impl LanguageId {
    pub const ALL: [LanguageId; 15] = [
        LanguageId::Plain,
        LanguageId::Markdown,
        LanguageId::Rust,
        LanguageId::JavaScript,
        LanguageId::Jsx,
        LanguageId::TypeScript,
        LanguageId::Tsx,
        LanguageId::Json,
        LanguageId::Css,
        LanguageId::Html,
        LanguageId::Xml,
        LanguageId::Bash,
        LanguageId::Python,
        LanguageId::Toml,
        LanguageId::Yaml,
    ];

    /// Look up a language by name or alias, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<LanguageId> {
        let lang = match name.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "txt" | "plaintext" | "none" => LanguageId::Plain,
            "md" | "markdown" | "mdx" => LanguageId::Markdown,
            "rs" | "rust" => LanguageId::Rust,
            "js" | "javascript" | "mjs" | "cjs" => LanguageId::JavaScript,
            "jsx" => LanguageId::Jsx,
            "ts" | "typescript" | "mts" | "cts" => LanguageId::TypeScript,
            "tsx" => LanguageId::Tsx,
            "json" | "jsonc" | "json5" => LanguageId::Json,
            "css" => LanguageId::Css,
            "html" | "htm" => LanguageId::Html,
            "xml" | "svg" | "xhtml" => LanguageId::Xml,
            "sh" | "bash" | "shell" | "zsh" | "console" => LanguageId::Bash,
            "py" | "python" => LanguageId::Python,
            "toml" => LanguageId::Toml,
            "yml" | "yaml" => LanguageId::Yaml,
            _ => return None,
        };
        Some(lang)
    }

    /// Like [`LanguageId::from_name`], but unknown names fall back to
    /// [`LanguageId::Plain`].
    pub fn resolve(name: &str) -> LanguageId {
        LanguageId::from_name(name).unwrap_or_else(|| {
            log::debug!("unknown language {name:?}, highlighting as plain text");
            LanguageId::Plain
        })
    }

    /// Canonical name, as accepted by [`LanguageId::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            LanguageId::Plain => "plain",
            LanguageId::Markdown => "markdown",
            LanguageId::Rust => "rust",
            LanguageId::JavaScript => "javascript",
            LanguageId::Jsx => "jsx",
            LanguageId::TypeScript => "typescript",
            LanguageId::Tsx => "tsx",
            LanguageId::Json => "json",
            LanguageId::Css => "css",
            LanguageId::Html => "html",
            LanguageId::Xml => "xml",
            LanguageId::Bash => "bash",
            LanguageId::Python => "python",
            LanguageId::Toml => "toml",
            LanguageId::Yaml => "yaml",
        }
    }
}

/// Which lexer tokenizes a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerFamily {
    /// No lexing: the whole input is one TEXT token.
    Plain,
    /// Markdown punctuation and text runs.
    Markdown,
    /// C-style comments, quotes and operators (JavaScript, CSS, JSON, ...).
    CLike,
    /// Rust: lifetimes, char literals, raw strings.
    Rust,
    /// `#` comments (shell, Python, TOML, YAML).
    Script,
    /// Angle-bracket markup (HTML, XML).
    Markup,
}

/// Static grammar data for one language.
#[derive(Debug)]
pub struct Grammar {
    pub language: LanguageId,
    pub family: LexerFamily,
    keywords: HashSet<&'static str>,
    /// Whether `<Name ...>` in expression position starts a JSX tag.
    pub jsx: bool,
}

impl Grammar {
    fn new(language: LanguageId, family: LexerFamily, keywords: &[&'static str]) -> Self {
        Self {
            language,
            family,
            keywords: keywords.iter().copied().collect(),
            jsx: false,
        }
    }

    fn with_jsx(mut self) -> Self {
        self.jsx = true;
        self
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "union",
    "unsafe", "use", "where", "while", "yield",
];

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "false", "finally", "for", "from",
    "function", "if", "import", "in", "instanceof", "let", "new", "null", "of", "return",
    "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var",
    "void", "while", "with", "yield",
];

const TS_KEYWORDS: &[&str] = &[
    "abstract", "any", "as", "asserts", "boolean", "declare", "enum", "implements", "infer",
    "interface", "is", "keyof", "namespace", "never", "number", "object", "private", "protected",
    "public", "readonly", "satisfies", "string", "symbol", "type", "unique", "unknown",
];

const JSON_KEYWORDS: &[&str] = &["true", "false", "null"];

const BASH_KEYWORDS: &[&str] = &[
    "case", "declare", "do", "done", "elif", "else", "esac", "exit", "export", "fi", "for",
    "function", "if", "in", "local", "readonly", "return", "select", "shift", "then", "time",
    "unset", "until", "while",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "case", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "match", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

const TOML_KEYWORDS: &[&str] = &["true", "false"];

const YAML_KEYWORDS: &[&str] = &["true", "false", "null", "yes", "no", "on", "off"];

static GRAMMARS: Lazy<HashMap<LanguageId, Grammar>> = Lazy::new(|| {
    let ts_keywords: Vec<&'static str> = JS_KEYWORDS.iter().chain(TS_KEYWORDS).copied().collect();

    [
        Grammar::new(LanguageId::Plain, LexerFamily::Plain, &[]),
        Grammar::new(LanguageId::Markdown, LexerFamily::Markdown, &[]),
        Grammar::new(LanguageId::Rust, LexerFamily::Rust, RUST_KEYWORDS),
        Grammar::new(LanguageId::JavaScript, LexerFamily::CLike, JS_KEYWORDS),
        Grammar::new(LanguageId::Jsx, LexerFamily::CLike, JS_KEYWORDS).with_jsx(),
        Grammar::new(LanguageId::TypeScript, LexerFamily::CLike, &ts_keywords),
        Grammar::new(LanguageId::Tsx, LexerFamily::CLike, &ts_keywords).with_jsx(),
        Grammar::new(LanguageId::Json, LexerFamily::CLike, JSON_KEYWORDS),
        Grammar::new(LanguageId::Css, LexerFamily::CLike, &[]),
        Grammar::new(LanguageId::Html, LexerFamily::Markup, &[]),
        Grammar::new(LanguageId::Xml, LexerFamily::Markup, &[]),
        Grammar::new(LanguageId::Bash, LexerFamily::Script, BASH_KEYWORDS),
        Grammar::new(LanguageId::Python, LexerFamily::Script, PYTHON_KEYWORDS),
        Grammar::new(LanguageId::Toml, LexerFamily::Script, TOML_KEYWORDS),
        Grammar::new(LanguageId::Yaml, LexerFamily::Script, YAML_KEYWORDS),
    ]
    .into_iter()
    .map(|grammar| (grammar.language, grammar))
    .collect()
});

/// The registered grammar for `lang`, if any.
pub fn grammar(lang: LanguageId) -> Option<&'static Grammar> {
    GRAMMARS.get(&lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("rs", LanguageId::Rust)]
    #[case("tsx", LanguageId::Tsx)]
    #[case("TSX", LanguageId::Tsx)]
    #[case(" js ", LanguageId::JavaScript)]
    #[case("shell", LanguageId::Bash)]
    #[case("svg", LanguageId::Xml)]
    #[case("md", LanguageId::Markdown)]
    #[case("yml", LanguageId::Yaml)]
    fn resolves_aliases(#[case] name: &str, #[case] expected: LanguageId) {
        assert_eq!(LanguageId::from_name(name), Some(expected));
    }

    #[test]
    fn unknown_names_fall_back_to_plain() {
        assert_eq!(LanguageId::from_name("brainfuck"), None);
        assert_eq!(LanguageId::resolve("brainfuck"), LanguageId::Plain);
        assert_eq!(LanguageId::resolve(""), LanguageId::Plain);
    }

    #[test]
    fn canonical_names_round_trip() {
        for lang in LanguageId::ALL {
            assert_eq!(LanguageId::from_name(lang.name()), Some(lang));
        }
    }

    #[test]
    fn every_language_has_a_grammar() {
        for lang in LanguageId::ALL {
            let grammar = grammar(lang).unwrap();
            assert_eq!(grammar.language, lang);
        }
    }

    #[test]
    fn typescript_extends_javascript_keywords() {
        let ts = grammar(LanguageId::TypeScript).unwrap();
        assert!(ts.is_keyword("interface"));
        assert!(ts.is_keyword("const"));
        assert!(!ts.jsx);

        let js = grammar(LanguageId::JavaScript).unwrap();
        assert!(!js.is_keyword("interface"));
    }

    #[test]
    fn only_jsx_dialects_parse_tags() {
        let jsx: Vec<_> = LanguageId::ALL
            .into_iter()
            .filter(|&lang| grammar(lang).unwrap().jsx)
            .collect();
        assert_eq!(jsx, vec![LanguageId::Jsx, LanguageId::Tsx]);
    }
}
