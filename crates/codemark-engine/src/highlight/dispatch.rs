//! Find `pre > code` blocks in a document and highlight them in place.

use super::{CodeBlock, HighlightOptions};
use crate::tree::{Element, Node, Root};

/// Highlight every code block in `document` with the default options.
pub fn process(document: Node) -> Node {
    process_with(document, &HighlightOptions::default())
}

/// Highlight every code block in `document`.
///
/// A code block is a `code` element whose direct parent is a `pre` element.
/// Its children are replaced by the annotated tree; its tag, classes and
/// properties are kept. Every other node is returned unchanged.
///
/// The walk recurses once per element level. The depth of trees from
/// [`parse_markdown`](crate::markdown::parse_markdown) is bounded by
/// [`MAX_NESTING`](crate::markdown::MAX_NESTING).
pub fn process_with(document: Node, options: &HighlightOptions) -> Node {
    visit(document, false, options)
}

fn visit(node: Node, parent_is_pre: bool, options: &HighlightOptions) -> Node {
    match node {
        Node::Element(element) if parent_is_pre && element.is("code") => {
            highlight_block(element, options).into()
        }
        Node::Element(mut element) => {
            let is_pre = element.is("pre");
            element.children = visit_children(element.children, is_pre, options);
            element.into()
        }
        Node::Root(root) => Root::new(visit_children(root.children, false, options)).into(),
        text @ Node::Text(_) => text,
    }
}

fn visit_children(children: Vec<Node>, parent_is_pre: bool, options: &HighlightOptions) -> Vec<Node> {
    children
        .into_iter()
        .map(|child| visit(child, parent_is_pre, options))
        .collect()
}

fn highlight_block(mut code: Element, options: &HighlightOptions) -> Element {
    let block = CodeBlock::from_element(&code, options);
    log::debug!(
        "highlighting {} code block: {} bytes, lines [{}], marker {:?}",
        block.language.name(),
        block.source.len(),
        block.lines,
        block.marker.as_str(),
    );
    code.children = block.highlight().children;
    code
}
