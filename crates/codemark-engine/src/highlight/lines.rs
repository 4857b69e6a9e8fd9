//! Stage 2: wrap each source line in a `span.line`.
//!
//! Lines are found by counting `\n` alone. A newline stays at the end of the
//! line it closes, and a tree for text with N newlines always gets N + 1
//! wrappers, the last possibly empty. Elements that straddle a newline are
//! split, each piece getting a copy of the original tag, classes and
//! properties, so a multi-line string token stays a string token on every
//! line it touches.

use super::ranges::LineRanges;
use super::vocabulary::{DATA_LINE, LINE, LINE_HIGHLIGHTED, SPAN};
use crate::tree::{Element, Node, Root, Text};

/// Group the root's children into numbered line wrappers, marking the lines
/// in `highlighted`.
pub fn annotate_lines(root: Root, highlighted: &LineRanges) -> Root {
    let mut finished: Vec<Vec<Node>> = Vec::new();
    let mut current: Vec<Node> = Vec::new();

    for child in root.children {
        for (i, piece) in split_lines(child).into_iter().enumerate() {
            if i > 0 {
                finished.push(std::mem::take(&mut current));
            }
            current.extend(piece);
        }
    }
    finished.push(current);

    let children = finished
        .into_iter()
        .zip(1u32..)
        .map(|(children, number)| line_wrapper(number, highlighted.contains(number), children).into())
        .collect();

    Root::new(children)
}

/// A `span.line` for line `number`.
pub fn line_wrapper(number: u32, highlighted: bool, children: Vec<Node>) -> Element {
    let mut wrapper = Element::new(SPAN).with_class(LINE);
    if highlighted {
        wrapper.class_list.add(LINE_HIGHLIGHTED);
    }
    wrapper
        .with_property(DATA_LINE, number.to_string())
        .with_children(children)
}

pub(crate) fn is_line_wrapper(node: &Node) -> bool {
    node.as_element().is_some_and(is_line_element)
}

pub(crate) fn is_line_element(element: &Element) -> bool {
    element.is(SPAN) && element.has_class(LINE)
}

/// Split a node at its newlines.
///
/// Returns one entry per line the node touches: `count('\n') + 1` entries,
/// every one but the last ending in `\n`. An entry is `None` when the node
/// contributes nothing to that line.
fn split_lines(node: Node) -> Vec<Option<Node>> {
    match node {
        Node::Text(text) => split_text(text),
        Node::Element(element) => split_element(element),
        Node::Root(root) => split_children(root.children)
            .into_iter()
            .map(|children| (!children.is_empty()).then(|| Root::new(children).into()))
            .collect(),
    }
}

fn split_text(text: Text) -> Vec<Option<Node>> {
    if !text.value.contains('\n') {
        return vec![Some(Node::Text(text))];
    }

    let mut pieces: Vec<Option<Node>> = text
        .value
        .split_inclusive('\n')
        .map(|piece| Some(Node::text(piece)))
        .collect();
    if text.value.ends_with('\n') {
        pieces.push(None);
    }
    pieces
}

fn split_element(mut element: Element) -> Vec<Option<Node>> {
    if element.children.is_empty() {
        return vec![Some(element.into())];
    }

    let children = std::mem::take(&mut element.children);
    let lines = split_children(children);
    if lines.len() == 1 {
        element.children = lines.into_iter().flatten().collect();
        return vec![Some(element.into())];
    }

    lines
        .into_iter()
        .map(|children| {
            (!children.is_empty()).then(|| element.shell().with_children(children).into())
        })
        .collect()
}

/// Distribute children over the lines they touch.
fn split_children(children: Vec<Node>) -> Vec<Vec<Node>> {
    let mut lines = vec![Vec::new()];
    for child in children {
        for (i, piece) in split_lines(child).into_iter().enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if let (Some(piece), Some(line)) = (piece, lines.last_mut()) {
                line.push(piece);
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::tokenize::tokenize;
    use crate::render::to_html;
    use codemark_syntax::LanguageId;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn html(source: &str, lang: LanguageId, setting: &str) -> String {
        let root = annotate_lines(tokenize(source, lang), &LineRanges::parse(setting));
        to_html(&root.into())
    }

    fn highlighted_lines(root: &Root) -> Vec<String> {
        root.children
            .iter()
            .filter_map(Node::as_element)
            .filter(|line| line.has_class(LINE_HIGHLIGHTED))
            .filter_map(|line| line.property(DATA_LINE).map(str::to_string))
            .collect()
    }

    #[test]
    fn marks_requested_lines() {
        let root = annotate_lines(
            tokenize("a\nb\nc\nd\n", LanguageId::Plain),
            &LineRanges::parse("2,4"),
        );
        assert_eq!(root.children.len(), 5);
        assert_eq!(highlighted_lines(&root), vec!["2", "4"]);
    }

    #[test]
    fn splits_plain_token_per_line() {
        assert_eq!(
            html("a\nb", LanguageId::Plain, "2"),
            concat!(
                r#"<span class="line" data-line="1"><span class="token plain-text">a"#,
                "\n",
                r#"</span></span><span class="line line--highlighted" data-line="2">"#,
                r#"<span class="token plain-text">b</span></span>"#,
            )
        );
    }

    #[test]
    fn trailing_newline_leaves_an_empty_last_line() {
        assert_eq!(
            html("x\n", LanguageId::Rust, ""),
            concat!(
                r#"<span class="line" data-line="1"><span class="token identifier">x</span>"#,
                "\n",
                r#"</span><span class="line" data-line="2"></span>"#,
            )
        );
    }

    #[test]
    fn empty_source_is_one_empty_line() {
        assert_eq!(
            html("", LanguageId::Rust, "1"),
            r#"<span class="line line--highlighted" data-line="1"></span>"#
        );
    }

    #[test]
    fn multi_line_token_keeps_its_class_on_each_piece() {
        let root = annotate_lines(
            tokenize("/* a\nb */ x", LanguageId::JavaScript),
            &LineRanges::new(),
        );
        insta::assert_snapshot!(Node::Root(root).outline(), @r#"
        root
          span.line data-line="1"
            span.token.comment
              "/* a\n"
          span.line data-line="2"
            span.token.comment
              "b */"
            " "
            span.token.identifier
              "x"
        "#);
    }

    #[test]
    fn tag_spanning_lines_is_split_at_every_level() {
        let root = annotate_lines(
            tokenize("<a\nb=\"1\">", LanguageId::Html),
            &LineRanges::new(),
        );
        insta::assert_snapshot!(Node::Root(root).outline(), @r#"
        root
          span.line data-line="1"
            span.token.tag
              span.token.punctuation
                "<"
              span.token.tag-name
                "a"
              "\n"
          span.line data-line="2"
            span.token.tag
              span.token.attribute
                span.token.attribute-name
                  "b"
                span.token.punctuation
                  "="
                span.token.attribute-value
                  "\"1\""
              span.token.punctuation
                ">"
        "#);
    }

    #[test]
    fn lines_past_the_end_are_ignored() {
        let root = annotate_lines(tokenize("a", LanguageId::Plain), &LineRanges::parse("2-9"));
        assert_eq!(root.children.len(), 1);
        assert!(highlighted_lines(&root).is_empty());
    }

    proptest! {
        #[test]
        fn one_wrapper_per_line_and_lossless(source in "[a-z\"<>/ \n]{0,60}") {
            let tokens = tokenize(&source, LanguageId::Html);
            let root = annotate_lines(tokens, &LineRanges::parse("1-3"));
            prop_assert_eq!(root.children.len(), source.matches('\n').count() + 1);
            prop_assert_eq!(root.to_text(), source.clone());
            for (i, line) in root.children.iter().enumerate() {
                let text = line.to_text();
                let newlines = text.matches('\n').count();
                let last = i + 1 == root.children.len();
                prop_assert_eq!(newlines, usize::from(!last));
                prop_assert!(last || text.ends_with('\n'));
            }
        }
    }
}
