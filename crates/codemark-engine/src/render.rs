//! HTML serialization of the document tree.
//!
//! Classes are written first as a single `class` attribute, then properties
//! in key order. Text and attribute values are escaped with `html-escape`.
//! Void elements (`img`, `br`, `hr`, `input`, ...) get no closing tag and
//! their children, if any, are dropped.
//!
//! Serialization recurses once per element level, so very deep trees need a
//! matching stack; [`crate::markdown::MAX_NESTING`] bounds Markdown input.

use crate::tree::{Element, Node};

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize `body` inside a minimal HTML5 page.
pub fn to_html_page(title: &str, body: &Node) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    out.push_str(&html_escape::encode_text(title));
    out.push_str("</title>\n</head>\n<body>\n");
    write_node(body, &mut out);
    out.push_str("\n</body>\n</html>\n");
    out
}

pub fn is_void(tag_name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag_name))
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Root(root) => {
            for child in &root.children {
                write_node(child, out);
            }
        }
        Node::Element(element) => write_element(element, out),
        Node::Text(text) => out.push_str(&html_escape::encode_text(&text.value)),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag_name);
    if !element.class_list.is_empty() {
        write_attribute("class", &element.class_list.to_string(), out);
    }
    for (key, value) in &element.properties {
        write_attribute(key, value, out);
    }
    out.push('>');

    if is_void(&element.tag_name) {
        return;
    }

    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(&element.tag_name);
    out.push('>');
}

fn write_attribute(key: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Root;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_text_and_attributes() {
        let node: Node = Element::new("a")
            .with_property("href", "/?a=1&b=\"2\"")
            .with_text("<x> & y")
            .into();
        assert_eq!(
            to_html(&node),
            r#"<a href="/?a=1&amp;b=&quot;2&quot;">&lt;x&gt; &amp; y</a>"#
        );
    }

    #[test]
    fn classes_come_before_properties() {
        let node: Node = Element::new("span")
            .with_class("line")
            .with_class("line--highlighted")
            .with_property("data-line", "3")
            .into();
        assert_eq!(
            to_html(&node),
            r#"<span class="line line--highlighted" data-line="3"></span>"#
        );
    }

    #[test]
    fn void_elements_have_no_end_tag() {
        let node: Node = Root::new(vec![
            Element::new("img").with_property("alt", "cat").into(),
            Element::new("BR").into(),
        ])
        .into();
        assert_eq!(to_html(&node), r#"<img alt="cat"><BR>"#);
    }

    #[test]
    fn page_wraps_body() {
        let page = to_html_page("a < b", &Node::text("hi"));
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>a &lt; b</title>"));
        assert!(page.contains("<body>\nhi\n</body>"));
    }
}
