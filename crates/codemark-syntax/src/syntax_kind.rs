//! SyntaxKind enum for all tokens and nodes in the code CST.
//!
//! Following the rust-analyzer model, all tokens and nodes share a single enum.
//! Every byte in the source must appear as a token in the tree.

/// All syntax kinds for the code CST.
///
/// Lexers produce the raw token kinds (`IDENT`, `LT`, `EQ`, ...). The grammar
/// remaps some of them to classified kinds (`KEYWORD`, `TAG_NAME`, ...)
/// depending on where they appear, and wraps tags and attributes in nodes.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Tokens (lexer output) ===
    /// Horizontal whitespace (spaces, tabs)
    WHITESPACE,
    /// Line ending
    NEWLINE,
    /// Identifier or bare name
    IDENT,
    /// Reserved word of the language
    KEYWORD,
    /// Numeric literal
    NUMBER,
    /// String or character literal
    STRING,
    /// Line or block comment
    COMMENT,
    /// Operator run (`+=`, `&&`, `-`)
    OPERATOR,
    /// Brackets, separators and stray quote characters
    PUNCTUATION,
    /// `<`
    LT,
    /// `>`
    GT,
    /// `/`
    SLASH,
    /// `=`
    EQ,
    /// Prose between markup tags, or unhighlighted text
    TEXT,
    /// Element name inside a tag
    TAG_NAME,
    /// Attribute name inside a tag
    ATTR_NAME,
    /// Attribute value inside a tag
    ATTR_VALUE,
    /// Anything the grammar recognizes but has no better class for
    /// (entities, doctypes, lifetimes, unrecognized characters)
    OTHER,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Root node
    ROOT,
    /// Markup or JSX tag (`<a href="x">`, `</a>`, `<br/>`)
    TAG,
    /// `name="value"` inside a tag
    ATTRIBUTE,
}

impl SyntaxKind {
    /// Returns true if this kind represents a token (lexer output).
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns true if this kind is trivia (whitespace/newlines).
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE)
    }

    /// The highlight class of a token, or `None` for trivia and nodes.
    pub fn token_class(self) -> Option<TokenClass> {
        let class = match self {
            Self::WHITESPACE | Self::NEWLINE | Self::EOF => return None,
            Self::ROOT | Self::TAG | Self::ATTRIBUTE => return None,
            Self::IDENT => TokenClass::Identifier,
            Self::KEYWORD => TokenClass::Keyword,
            Self::NUMBER => TokenClass::Number,
            Self::STRING => TokenClass::String,
            Self::COMMENT => TokenClass::Comment,
            Self::OPERATOR => TokenClass::Operator,
            Self::PUNCTUATION | Self::LT | Self::GT | Self::SLASH | Self::EQ => {
                TokenClass::Punctuation
            }
            Self::TEXT => TokenClass::PlainText,
            Self::TAG_NAME => TokenClass::TagName,
            Self::ATTR_NAME => TokenClass::AttributeName,
            Self::ATTR_VALUE => TokenClass::AttributeValue,
            Self::OTHER => TokenClass::Other,
        };
        Some(class)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The closed set of token classifications a renderer can style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenClass {
    Keyword,
    String,
    Comment,
    Number,
    Operator,
    Punctuation,
    Identifier,
    PlainText,
    TagName,
    AttributeName,
    AttributeValue,
    Other,
}

impl TokenClass {
    pub const ALL: [TokenClass; 12] = [
        TokenClass::Keyword,
        TokenClass::String,
        TokenClass::Comment,
        TokenClass::Number,
        TokenClass::Operator,
        TokenClass::Punctuation,
        TokenClass::Identifier,
        TokenClass::PlainText,
        TokenClass::TagName,
        TokenClass::AttributeName,
        TokenClass::AttributeValue,
        TokenClass::Other,
    ];

    /// The CSS class name emitted for this classification.
    pub fn class_name(self) -> &'static str {
        match self {
            TokenClass::Keyword => "keyword",
            TokenClass::String => "string",
            TokenClass::Comment => "comment",
            TokenClass::Number => "number",
            TokenClass::Operator => "operator",
            TokenClass::Punctuation => "punctuation",
            TokenClass::Identifier => "identifier",
            TokenClass::PlainText => "plain-text",
            TokenClass::TagName => "tag-name",
            TokenClass::AttributeName => "attribute-name",
            TokenClass::AttributeValue => "attribute-value",
            TokenClass::Other => "other",
        }
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CodeLang {}

impl rowan::Language for CodeLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::ATTRIBUTE as u16);
        // SAFETY: We check bounds above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<CodeLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<CodeLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<CodeLang>;
