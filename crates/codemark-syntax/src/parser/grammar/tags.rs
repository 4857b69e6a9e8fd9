//! Tags and attributes, shared by markup documents and JSX.
//!
//! A tag becomes a TAG node holding its delimiters, a TAG_NAME and one
//! ATTRIBUTE node per attribute. Unterminated tags end at the next `<` or at
//! end of input.

use super::{MAX_DEPTH, MAX_RUN, code, text_run};
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Dialect {
    Markup,
    Jsx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TagShape {
    Opening,
    Closing,
    SelfClosing,
    Unterminated,
}

/// Parse a tag starting at `<`.
pub(super) fn tag(p: &mut Parser<'_, '_>, dialect: Dialect, depth: usize) -> TagShape {
    let m = p.start();
    p.bump();
    let closing = p.eat(SyntaxKind::SLASH);

    if p.at(SyntaxKind::IDENT) {
        let n = match dialect {
            Dialect::Markup => 1,
            Dialect::Jsx => name_len(p, true),
        };
        p.bump_n(n, SyntaxKind::TAG_NAME);
    }

    let shape = loop {
        match p.current() {
            SyntaxKind::GT => {
                p.bump();
                break if closing {
                    TagShape::Closing
                } else {
                    TagShape::Opening
                };
            }
            SyntaxKind::SLASH if p.nth(1) == SyntaxKind::GT => {
                p.bump();
                p.bump();
                break TagShape::SelfClosing;
            }
            SyntaxKind::IDENT => attribute(p, dialect, depth),
            SyntaxKind::PUNCTUATION if dialect == Dialect::Jsx && p.at_text("{") => {
                expression(p, depth);
            }
            SyntaxKind::LT | SyntaxKind::EOF => break TagShape::Unterminated,
            _ => p.bump(),
        }
    };

    m.complete(p, SyntaxKind::TAG);
    shape
}

/// Parse a JSX element: its opening tag, children and closing tag.
pub(super) fn jsx_element(p: &mut Parser<'_, '_>, depth: usize) {
    if tag(p, Dialect::Jsx, depth) != TagShape::Opening || depth >= MAX_DEPTH {
        return;
    }

    while !p.at_end() {
        if p.at(SyntaxKind::LT) && p.nth(1) == SyntaxKind::SLASH {
            tag(p, Dialect::Jsx, depth);
            return;
        }

        if p.at(SyntaxKind::LT) && matches!(p.nth(1), SyntaxKind::IDENT | SyntaxKind::GT) {
            jsx_element(p, depth + 1);
        } else if p.at_text("{") {
            expression(p, depth + 1);
        } else {
            text_run(p, |kind, text| {
                kind == SyntaxKind::LT || (kind == SyntaxKind::PUNCTUATION && text == "{")
            });
        }
    }
}

/// Parse a `{ ... }` JSX expression up to its matching brace.
fn expression(p: &mut Parser<'_, '_>, depth: usize) {
    p.bump();
    let mut open = 0usize;

    while !p.at_end() {
        if p.at(SyntaxKind::PUNCTUATION) {
            match p.current_text() {
                "{" => open += 1,
                "}" if open == 0 => {
                    p.bump();
                    return;
                }
                "}" => open -= 1,
                _ => {}
            }
            p.bump();
        } else {
            code::item(p, depth + 1);
        }
    }
}

fn attribute(p: &mut Parser<'_, '_>, dialect: Dialect, depth: usize) {
    let m = p.start();
    let n = match dialect {
        Dialect::Markup => 1,
        Dialect::Jsx => name_len(p, false),
    };
    p.bump_n(n, SyntaxKind::ATTR_NAME);

    let mut k = 0;
    while p.nth(k).is_trivia() {
        k += 1;
    }
    if p.nth(k) == SyntaxKind::EQ {
        for _ in 0..=k {
            p.bump();
        }
        while p.current().is_trivia() {
            p.bump();
        }
        attribute_value(p, dialect, depth);
    }

    m.complete(p, SyntaxKind::ATTRIBUTE);
}

fn attribute_value(p: &mut Parser<'_, '_>, dialect: Dialect, depth: usize) {
    if p.at(SyntaxKind::STRING) {
        p.bump_as(SyntaxKind::ATTR_VALUE);
        return;
    }

    match dialect {
        Dialect::Jsx if p.at_text("{") => expression(p, depth),
        Dialect::Jsx => {}
        Dialect::Markup => {
            // Unquoted values run to whitespace or the end of the tag.
            let mut n = 0;
            while n < MAX_RUN
                && !matches!(
                    p.nth(n),
                    SyntaxKind::WHITESPACE
                        | SyntaxKind::NEWLINE
                        | SyntaxKind::GT
                        | SyntaxKind::LT
                        | SyntaxKind::EQ
                        | SyntaxKind::STRING
                        | SyntaxKind::EOF
                )
            {
                n += 1;
            }
            if n > 0 {
                p.bump_n(n, SyntaxKind::ATTR_VALUE);
            }
        }
    }
}

/// Length in tokens of a JSX name such as `svg:rect`, `data-id` or `Foo.Bar`.
fn name_len(p: &Parser<'_, '_>, allow_member: bool) -> usize {
    let mut n = 1;
    while n + 2 <= MAX_RUN && p.nth(n + 1) == SyntaxKind::IDENT {
        let joins = match (p.nth(n), p.nth_text(n)) {
            (SyntaxKind::OPERATOR, "-" | ":") => true,
            (SyntaxKind::PUNCTUATION, ".") => allow_member,
            _ => false,
        };
        if !joins {
            break;
        }
        n += 2;
    }
    n
}
