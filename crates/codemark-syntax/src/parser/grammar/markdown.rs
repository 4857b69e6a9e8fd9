//! Markdown shown as source code.
//!
//! Only the markers a reader scans for are classified: ATX heading hashes,
//! blockquote `>` and list bullets become KEYWORD, code spans and link
//! destinations become STRING. Everything else keeps its lexer kind.

use super::MAX_RUN;
use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

pub(super) fn document(p: &mut Parser<'_, '_>) {
    while !p.at_end() {
        line(p);
    }
}

fn line(p: &mut Parser<'_, '_>) {
    while p.at(SyntaxKind::WHITESPACE) {
        p.bump();
    }

    block_marker(p);

    while !p.at_end() && !p.at(SyntaxKind::NEWLINE) {
        inline(p);
    }
    p.eat(SyntaxKind::NEWLINE);
}

fn block_marker(p: &mut Parser<'_, '_>) {
    if p.at_text("#") {
        let mut n = 0;
        while n <= 6 && p.nth_text(n) == "#" {
            n += 1;
        }
        if n <= 6 && matches!(p.nth(n), SyntaxKind::WHITESPACE | SyntaxKind::NEWLINE | SyntaxKind::EOF) {
            p.bump_n(n, SyntaxKind::KEYWORD);
        }
        return;
    }

    while p.at_text(">") {
        p.bump_as(SyntaxKind::KEYWORD);
        while p.at(SyntaxKind::WHITESPACE) {
            p.bump();
        }
    }

    let bullet = p.at_text("-") || p.at_text("*") || p.at_text("+");
    let ordered = p.at(SyntaxKind::TEXT) && is_ordered_marker(p.current_text());
    if (bullet || ordered) && p.nth(1) == SyntaxKind::WHITESPACE {
        p.bump_as(SyntaxKind::KEYWORD);
    }
}

/// `1.` through `999999999.`
fn is_ordered_marker(text: &str) -> bool {
    text.strip_suffix('.').is_some_and(|digits| {
        !digits.is_empty() && digits.len() <= 9 && digits.bytes().all(|b| b.is_ascii_digit())
    })
}

fn inline(p: &mut Parser<'_, '_>) {
    if p.at_text("`") {
        code_span(p);
    } else if p.at_text("]") && p.nth_text(1) == "(" {
        link_destination(p);
    } else {
        p.bump();
    }
}

/// A backtick run closed by a run of the same length on the same line.
fn code_span(p: &mut Parser<'_, '_>) {
    let mut open = 0;
    while open < MAX_RUN && p.nth_text(open) == "`" {
        open += 1;
    }

    let mut n = open;
    while n < MAX_RUN {
        if matches!(p.nth(n), SyntaxKind::NEWLINE | SyntaxKind::EOF) {
            break;
        }
        if p.nth_text(n) != "`" {
            n += 1;
            continue;
        }

        let mut close = 0;
        while p.nth_text(n + close) == "`" {
            close += 1;
        }
        if close == open && n + close <= MAX_RUN {
            p.bump_n(n + close, SyntaxKind::STRING);
            return;
        }
        n += close;
    }

    p.bump_n(open, SyntaxKind::PUNCTUATION);
}

/// `](url)`: the brackets stay punctuation, the destination is a string.
fn link_destination(p: &mut Parser<'_, '_>) {
    p.bump();
    p.bump();

    let mut n = 0;
    while n < MAX_RUN
        && !matches!(p.nth(n), SyntaxKind::NEWLINE | SyntaxKind::EOF)
        && p.nth_text(n) != ")"
    {
        n += 1;
    }
    if n > 0 && p.nth_text(n) == ")" {
        p.bump_n(n, SyntaxKind::STRING);
    }
}
