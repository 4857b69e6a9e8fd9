//! Markdown to document tree, via `pulldown-cmark` events.
//!
//! Fenced code blocks become `pre > code` elements ready for the
//! highlighter. The fence info string names the language and may carry
//! `key=value` settings after it:
//!
//! ````text
//! ```tsx line=1,3-5 marker="=="
//! ````
//!
//! gives `<pre><code class="language-tsx" line="1,3-5" marker="==">`.
//!
//! Raw HTML in the source is kept as text and escaped on output.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use pulldown_cmark::{Alignment, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

use crate::highlight::vocabulary::LANGUAGE_PREFIX;
use crate::tree::{Element, Node, Root};

static FENCE_SETTING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_][\w-]*)=(?:"([^"]*)"|'([^']*)'|(\S+))"#)
        .expect("fence setting pattern is valid")
});

/// The parsed info string of a fenced code block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FenceInfo {
    pub language: Option<String>,
    pub settings: BTreeMap<String, String>,
}

impl FenceInfo {
    pub fn parse(info: &str) -> Self {
        let info = info.trim();
        let (language, rest) = match info.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest),
            None => (info, ""),
        };

        let mut fence = FenceInfo::default();
        let rest = if language.is_empty() || language.contains('=') {
            info
        } else {
            fence.language = Some(language.to_string());
            rest
        };

        for capture in FENCE_SETTING.captures_iter(rest) {
            let value = capture
                .get(2)
                .or_else(|| capture.get(3))
                .or_else(|| capture.get(4))
                .map_or("", |m| m.as_str());
            fence
                .settings
                .insert(capture[1].to_string(), value.to_string());
        }
        fence
    }

    /// The `code` element this fence opens.
    pub fn code_element(&self) -> Element {
        let mut code = Element::new("code");
        if let Some(language) = &self.language {
            code.class_list.add(format!("{LANGUAGE_PREFIX}{language}"));
        }
        for (key, value) in &self.settings {
            code.properties.insert(key.clone(), value.clone());
        }
        code
    }
}

/// Deepest element nesting [`parse_markdown`] builds. Elements opened
/// below it are flattened into their parent; code blocks are always kept.
pub const MAX_NESTING: usize = 128;

/// Parse Markdown into a document tree. Code blocks are not highlighted.
pub fn parse_markdown(source: &str) -> Root {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(source, options) {
        builder.process_event(event);
    }
    builder.finalize()
}

/// Elements opened by one `Start` event, outermost first, and the children
/// collected for the innermost one. An empty chain is transparent: its
/// children go straight to the parent.
#[derive(Debug, Default)]
struct Open {
    chain: Vec<Element>,
    children: Vec<Node>,
}

/// Turns the flat event stream into a tree with a stack of open elements.
struct TreeBuilder {
    stack: Vec<Open>,
    /// Elements open across the whole stack.
    depth: usize,
    root: Vec<Node>,
    alignments: Vec<Alignment>,
    cell: usize,
    in_table_head: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            depth: 0,
            root: Vec::new(),
            alignments: Vec::new(),
            cell: 0,
            in_table_head: false,
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => {
                let is_code = matches!(tag, Tag::CodeBlock(_));
                let mut chain = self.open_tag(tag);
                if !is_code && self.depth + chain.len() > MAX_NESTING {
                    log::debug!("flattening markdown element nested deeper than {MAX_NESTING}");
                    chain.clear();
                }
                self.depth += chain.len();
                self.stack.push(Open {
                    chain,
                    children: Vec::new(),
                });
            }
            Event::End(end) => self.close_tag(end),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => self.push(Element::new("code").with_text(code.to_string()).into()),
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(&html),
            Event::SoftBreak => self.push_text("\n"),
            Event::HardBreak => self.push(Element::new("br").into()),
            Event::Rule => self.push(Element::new("hr").into()),
            Event::TaskListMarker(checked) => {
                let mut input = Element::new("input")
                    .with_property("type", "checkbox")
                    .with_property("disabled", "");
                if checked {
                    input = input.with_property("checked", "");
                }
                self.push(input.into());
            }
            other => log::debug!("skipping markdown event {other:?}"),
        }
    }

    fn open_tag(&mut self, tag: Tag<'_>) -> Vec<Element> {
        let element = match tag {
            Tag::Paragraph => Element::new("p"),
            Tag::Heading {
                level, id, classes, ..
            } => {
                let mut heading = Element::new(format!("h{}", level as usize));
                heading.class_list.extend(classes.iter().map(|class| class.to_string()));
                if let Some(id) = id {
                    heading = heading.with_property("id", id.to_string());
                }
                heading
            }
            Tag::BlockQuote(_) => Element::new("blockquote"),
            Tag::CodeBlock(kind) => {
                let code = match kind {
                    CodeBlockKind::Fenced(info) => FenceInfo::parse(&info).code_element(),
                    CodeBlockKind::Indented => Element::new("code"),
                };
                return vec![Element::new("pre"), code];
            }
            Tag::List(Some(start)) => {
                let list = Element::new("ol");
                if start == 1 {
                    list
                } else {
                    list.with_property("start", start.to_string())
                }
            }
            Tag::List(None) => Element::new("ul"),
            Tag::Item => Element::new("li"),
            Tag::Table(alignments) => {
                self.alignments = alignments;
                Element::new("table")
            }
            Tag::TableHead => {
                self.in_table_head = true;
                self.cell = 0;
                return vec![Element::new("thead"), Element::new("tr")];
            }
            Tag::TableRow => {
                self.cell = 0;
                Element::new("tr")
            }
            Tag::TableCell => {
                let mut cell = Element::new(if self.in_table_head { "th" } else { "td" });
                let align = match self.alignments.get(self.cell) {
                    Some(Alignment::Left) => Some("left"),
                    Some(Alignment::Center) => Some("center"),
                    Some(Alignment::Right) => Some("right"),
                    Some(Alignment::None) | None => None,
                };
                if let Some(align) = align {
                    cell = cell.with_property("style", format!("text-align: {align}"));
                }
                self.cell += 1;
                cell
            }
            Tag::Emphasis => Element::new("em"),
            Tag::Strong => Element::new("strong"),
            Tag::Strikethrough => Element::new("del"),
            Tag::Link {
                dest_url, title, ..
            } => {
                let link = Element::new("a").with_property("href", dest_url.to_string());
                if title.is_empty() {
                    link
                } else {
                    link.with_property("title", title.to_string())
                }
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                let image = Element::new("img").with_property("src", dest_url.to_string());
                if title.is_empty() {
                    image
                } else {
                    image.with_property("title", title.to_string())
                }
            }
            other => {
                log::debug!("flattening markdown tag {other:?}");
                return Vec::new();
            }
        };
        vec![element]
    }

    fn close_tag(&mut self, end: TagEnd) {
        let Some(open) = self.stack.pop() else {
            log::warn!("unbalanced markdown end tag {end:?}");
            return;
        };
        self.depth -= open.chain.len();

        match end {
            TagEnd::TableHead => self.in_table_head = false,
            TagEnd::Table => self.alignments.clear(),
            _ => {}
        }

        for node in fold(open) {
            self.push(node);
        }
    }

    fn push(&mut self, node: Node) {
        let siblings = match self.stack.last_mut() {
            Some(open) => &mut open.children,
            None => &mut self.root,
        };
        if let (Node::Text(text), Some(Node::Text(last))) = (&node, siblings.last_mut()) {
            last.value.push_str(&text.value);
            return;
        }
        siblings.push(node);
    }

    fn push_text(&mut self, text: &str) {
        self.push(Node::text(text));
    }

    fn finalize(mut self) -> Root {
        while let Some(open) = self.stack.pop() {
            log::warn!("closing unterminated markdown element");
            self.depth -= open.chain.len();
            for node in fold(open) {
                self.push(node);
            }
        }
        Root::new(self.root)
    }
}

/// Close every element in the chain, innermost first.
fn fold(open: Open) -> Vec<Node> {
    let mut children = open.children;
    for mut element in open.chain.into_iter().rev() {
        element.children = children;
        finish_element(&mut element);
        children = vec![element.into()];
    }
    children
}

/// Fix-ups that need an element's full content.
fn finish_element(element: &mut Element) {
    if element.is("img") {
        let alt = element.to_text();
        element.children.clear();
        element.properties.insert("alt".to_string(), alt);
    } else if element.is("table") {
        let mut head = Vec::new();
        let mut rows = Vec::new();
        for child in std::mem::take(&mut element.children) {
            match child.as_element() {
                Some(section) if section.is("thead") => head.push(child),
                _ => rows.push(child),
            }
        }
        if !rows.is_empty() {
            head.push(Element::new("tbody").with_children(rows).into());
        }
        element.children = head;
    }
}
