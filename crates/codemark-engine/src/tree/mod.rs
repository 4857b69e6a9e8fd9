//! # Document Tree
//!
//! The tree every stage reads and writes: the Markdown front end builds it,
//! the highlighter rewrites the children of code blocks, and the renderer
//! serializes it.
//!
//! It is a small HTML-shaped tree with three closed variants:
//!
//! - [`Root`]: ordered children, no attributes
//! - [`Element`]: tag name, [`ClassList`], string properties, children
//! - [`Text`]: an immutable string leaf
//!
//! Stages take trees by value and return new trees. Pieces of a split
//! element are made with [`Element::shell`], which copies the tag, classes
//! and properties but not the children.

mod class_list;

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

pub use class_list::ClassList;

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Root(Root),
    Element(Element),
    Text(Text),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Root {
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag_name: String,
    pub class_list: ClassList,
    pub properties: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub value: String,
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(root) => &root.children,
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of all `Text` leaves below this node.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&text.value),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Byte length of [`Node::to_text`], without building the string.
    pub fn text_len(&self) -> usize {
        match self {
            Node::Text(text) => text.value.len(),
            _ => self.children().iter().map(Node::text_len).sum(),
        }
    }

    /// Indented one-node-per-line dump, for tests and `--format tree`.
    ///
    /// ```
    /// use codemark_engine::tree::{Element, Node};
    ///
    /// let node = Node::Element(Element::new("span").with_class("token").with_text("x"));
    /// assert_eq!(node.outline(), "span.token\n  \"x\"\n");
    /// ```
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Node::Root(root) => {
                let _ = writeln!(out, "{indent}root");
                for child in &root.children {
                    child.write_outline(out, depth + 1);
                }
            }
            Node::Element(element) => {
                let _ = write!(out, "{indent}{}", element.tag_name);
                for class in element.class_list.iter() {
                    let _ = write!(out, ".{class}");
                }
                for (key, value) in &element.properties {
                    let _ = write!(out, " {key}={value:?}");
                }
                out.push('\n');
                for child in &element.children {
                    child.write_outline(out, depth + 1);
                }
            }
            Node::Text(text) => {
                let _ = writeln!(out, "{indent}{:?}", text.value);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Root> for Node {
    fn from(root: Root) -> Self {
        Node::Root(root)
    }
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn to_text(&self) -> String {
        self.children.iter().map(Node::to_text).collect()
    }
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            class_list: ClassList::new(),
            properties: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_list.add(class);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_text(self, value: impl Into<String>) -> Self {
        self.with_children(vec![Node::text(value)])
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.contains(class)
    }

    pub fn is(&self, tag_name: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag_name)
    }

    /// A copy of this element without its children.
    pub fn shell(&self) -> Element {
        Element {
            tag_name: self.tag_name.clone(),
            class_list: self.class_list.clone(),
            properties: self.properties.clone(),
            children: Vec::new(),
        }
    }

    pub fn to_text(&self) -> String {
        self.children.iter().map(Node::to_text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Node {
        Node::Root(Root::new(vec![
            Element::new("span")
                .with_class("token")
                .with_class("keyword")
                .with_text("let")
                .into(),
            Node::text(" x\n"),
        ]))
    }

    #[test]
    fn text_concatenates_leaves() {
        let tree = sample();
        assert_eq!(tree.to_text(), "let x\n");
        assert_eq!(tree.text_len(), 6);
    }

    #[test]
    fn shell_drops_children_only() {
        let element = Element::new("code")
            .with_class("language-rust")
            .with_property("line", "1")
            .with_text("fn");
        let shell = element.shell();
        assert!(shell.children.is_empty());
        assert_eq!(shell.class_list, element.class_list);
        assert_eq!(shell.property("line"), Some("1"));
    }

    #[test]
    fn outline_dump() {
        insta::assert_snapshot!(sample().outline(), @r#"
        root
          span.token.keyword
            "let"
          " x\n"
        "#);
    }

    #[test]
    fn serializes_with_type_tags() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "root");
        assert_eq!(json["children"][0]["type"], "element");
        assert_eq!(json["children"][0]["class_list"][1], "keyword");
        assert_eq!(json["children"][1]["value"], " x\n");
    }
}
