//! Rules for programming languages.
//!
//! Code needs very little structure for highlighting. Identifiers are checked
//! against the language's keyword table, adjacent operator characters are
//! merged into one operator (`<=`, `=>`, `!==`), and in JSX dialects a `<` in
//! expression position opens a tag.

use super::{MAX_DEPTH, MAX_RUN, tags};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

pub(super) fn document(p: &mut Parser<'_, '_>) {
    while !p.at_end() {
        item(p, 0);
    }
}

/// Consume one token of code, or one JSX element.
pub(super) fn item(p: &mut Parser<'_, '_>, depth: usize) {
    match p.current() {
        SyntaxKind::IDENT => {
            let kind = if p.grammar().is_keyword(p.current_text()) {
                SyntaxKind::KEYWORD
            } else {
                SyntaxKind::IDENT
            };
            p.bump_as(kind);
        }
        SyntaxKind::LT if depth < MAX_DEPTH && jsx_tag_starts(p, 0) => {
            tags::jsx_element(p, depth);
        }
        kind if is_operator_part(kind) => operator_run(p),
        _ => p.bump(),
    }
}

fn is_operator_part(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::OPERATOR
            | SyntaxKind::LT
            | SyntaxKind::GT
            | SyntaxKind::SLASH
            | SyntaxKind::EQ
    )
}

fn operator_run(p: &mut Parser<'_, '_>) {
    let mut n = 1;
    while n < MAX_RUN && is_operator_part(p.nth(n)) && !jsx_tag_starts(p, n) {
        n += 1;
    }
    p.bump_n(n, SyntaxKind::OPERATOR);
}

/// Whether the `<` n tokens ahead opens a JSX tag.
///
/// `<` must be followed by a name, `/` or `>` (fragments), and must not
/// follow something that can end an operand: `a < b` and `f(x) < y` are
/// comparisons, `Array<string>` is a type argument.
fn jsx_tag_starts(p: &Parser<'_, '_>, n: usize) -> bool {
    if !p.grammar().jsx || p.nth(n) != SyntaxKind::LT {
        return false;
    }
    if !matches!(
        p.nth(n + 1),
        SyntaxKind::IDENT | SyntaxKind::SLASH | SyntaxKind::GT
    ) {
        return false;
    }

    let prev = if n == 0 {
        p.prev_significant().map(|t| (t.kind, t.text))
    } else {
        Some((p.nth(n - 1), p.nth_text(n - 1)))
    };

    match prev {
        None => true,
        Some((SyntaxKind::IDENT, text)) => p.grammar().is_keyword(text),
        Some((SyntaxKind::NUMBER | SyntaxKind::STRING, _)) => false,
        Some((SyntaxKind::PUNCTUATION, ")" | "]")) => false,
        Some(_) => true,
    }
}
