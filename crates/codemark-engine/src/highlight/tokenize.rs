//! Stage 1: source text to a tree of classified tokens.
//!
//! The syntax crate produces a lossless CST; this module maps it onto the
//! document tree. Classified tokens become `span.token.<class>` with a single
//! text child, whitespace and newlines become bare text, TAG and ATTRIBUTE
//! nodes become `span.token.tag` and `span.token.attribute` groups.

use std::panic::{self, AssertUnwindSafe};

use codemark_syntax::{LanguageId, SyntaxKind, SyntaxNode, SyntaxToken, TokenClass};
use rowan::NodeOrToken;

use super::vocabulary::{ATTRIBUTE, SPAN, TAG, TOKEN};
use crate::tree::{Element, Node, Root};

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("no grammar registered for {}", .0.name())]
    MissingGrammar(LanguageId),
    #[error("{} parser panicked: {message}", .language.name())]
    Panicked {
        language: LanguageId,
        message: String,
    },
    #[error("{} token tree has {actual} bytes, source has {expected}", .language.name())]
    Lossy {
        language: LanguageId,
        expected: usize,
        actual: usize,
    },
}

/// Tokenize `source`, falling back to a single plain-text token on any
/// internal failure.
pub fn tokenize(source: &str, language: LanguageId) -> Root {
    degrade(source, try_tokenize(source, language))
}

/// Tokenize `source`, reporting internal failures instead of degrading.
pub fn try_tokenize(source: &str, language: LanguageId) -> Result<Root, TokenizeError> {
    let grammar =
        codemark_syntax::grammar(language).ok_or(TokenizeError::MissingGrammar(language))?;
    tokenize_with(source, language, |source| codemark_syntax::parse(source, grammar))
}

fn tokenize_with<F>(source: &str, language: LanguageId, parse: F) -> Result<Root, TokenizeError>
where
    F: FnOnce(&str) -> SyntaxNode,
{
    let tree = panic::catch_unwind(AssertUnwindSafe(|| parse(source))).map_err(|payload| {
        TokenizeError::Panicked {
            language,
            message: panic_message(payload.as_ref()),
        }
    })?;

    let text = tree.text();
    if text != source {
        return Err(TokenizeError::Lossy {
            language,
            expected: source.len(),
            actual: usize::from(text.len()),
        });
    }

    Ok(Root::new(convert_children(&tree)))
}

fn degrade(source: &str, result: Result<Root, TokenizeError>) -> Root {
    result.unwrap_or_else(|err| {
        log::warn!("highlighting as plain text: {err}");
        plain(source)
    })
}

/// The fallback tree: the whole source as one plain-text token.
pub fn plain(source: &str) -> Root {
    if source.is_empty() {
        return Root::default();
    }
    Root::new(vec![token_span(TokenClass::PlainText, source).into()])
}

/// `span.token.<class>` wrapping `text`.
pub fn token_span(class: TokenClass, text: &str) -> Element {
    Element::new(SPAN)
        .with_class(TOKEN)
        .with_class(class.class_name())
        .with_text(text)
}

fn convert_children(node: &SyntaxNode) -> Vec<Node> {
    node.children_with_tokens()
        .map(|child| match child {
            NodeOrToken::Node(group) => convert_group(&group).into(),
            NodeOrToken::Token(token) => convert_token(&token),
        })
        .collect()
}

fn convert_group(node: &SyntaxNode) -> Element {
    let class = match node.kind() {
        SyntaxKind::ATTRIBUTE => ATTRIBUTE,
        _ => TAG,
    };
    Element::new(SPAN)
        .with_class(TOKEN)
        .with_class(class)
        .with_children(convert_children(node))
}

fn convert_token(token: &SyntaxToken) -> Node {
    match token.kind().token_class() {
        Some(class) => token_span(class, token.text()).into(),
        None => Node::text(token.text()),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
