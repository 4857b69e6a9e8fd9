//! HTML and XML documents.

use super::tags::{self, Dialect};
use super::text_run;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

pub(super) fn document(p: &mut Parser<'_, '_>) {
    while !p.at_end() {
        match p.current() {
            SyntaxKind::LT if starts_tag(p) => {
                tags::tag(p, Dialect::Markup, 0);
            }
            SyntaxKind::LT => p.bump_as(SyntaxKind::TEXT),
            SyntaxKind::COMMENT | SyntaxKind::OTHER => p.bump(),
            _ => text_run(p, |kind, _| {
                matches!(kind, SyntaxKind::LT | SyntaxKind::COMMENT | SyntaxKind::OTHER)
            }),
        }
    }
}

fn starts_tag(p: &Parser<'_, '_>) -> bool {
    match p.nth(1) {
        SyntaxKind::IDENT => true,
        SyntaxKind::SLASH => matches!(p.nth(2), SyntaxKind::IDENT | SyntaxKind::GT),
        _ => false,
    }
}
