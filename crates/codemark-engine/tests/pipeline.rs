use codemark_engine::{
    Element, HighlightOptions, LanguageId, Node, WordMarker, markdown_to_html, markdown_to_tree,
    process,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn find_all<'a>(node: &'a Node, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if let Node::Element(element) = node
        && pred(element)
    {
        out.push(element);
    }
    for child in node.children() {
        find_all(child, pred, out);
    }
}

#[test]
fn fixture_post_renders_expected_html() {
    let html = markdown_to_html(&fixture("post.md"), &HighlightOptions::default());
    assert_eq!(html, fixture("post.html").trim_end());
}

#[test]
fn fixture_jsx_block_with_custom_marker() {
    let tree = markdown_to_tree(&fixture("jsx.md"), &HighlightOptions::default());

    let mut lines = Vec::new();
    find_all(&tree, &|e: &Element| e.has_class("line"), &mut lines);
    assert_eq!(lines.len(), 4);

    let mut words = Vec::new();
    find_all(&tree, &|e: &Element| e.has_class("highlighted-word"), &mut words);
    let words: Vec<String> = words.iter().map(|e| e.to_text()).collect();
    assert_eq!(words, vec!["url"]);

    let mut tags = Vec::new();
    find_all(&tree, &|e: &Element| e.has_class("tag-name"), &mut tags);
    let tags: Vec<String> = tags.iter().map(|e| e.to_text()).collect();
    assert_eq!(tags, vec!["a", "a"]);

    assert_eq!(tree.to_text(), "<a href={url}>\n  hi\n</a>\n");
}

#[test]
fn documents_without_code_blocks_pass_through() {
    let source = "# Title\n\nSome `__inline__` code and __bold__ text.\n";
    let parsed: Node = codemark_engine::markdown::parse_markdown(source).into();
    assert_eq!(process(parsed.clone()), parsed);
}

#[test]
fn options_apply_to_blocks_without_settings() {
    let options = HighlightOptions {
        default_language: LanguageId::Rust,
        word_marker: WordMarker::new("**").unwrap(),
    };
    let html = markdown_to_html("```\nfn **main**\n```\n", &options);
    assert!(html.contains(r#"<span class="token keyword">fn</span>"#));
    assert!(html.contains(
        r#"<span class="highlighted-word"><span class="token identifier">main</span></span>"#
    ));
}

#[test]
fn documents_render_on_many_threads() {
    let sources: Vec<String> = (1..=8)
        .map(|n| format!("```js line={n}\n{}```\n", "x;\n".repeat(n)))
        .collect();

    let rendered: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| scope.spawn(move || markdown_to_html(source, &HighlightOptions::default())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (n, html) in (1..=8).zip(&rendered) {
        let marked = format!(r#"<span class="line line--highlighted" data-line="{n}">"#);
        assert!(html.contains(&marked), "{html}");
        assert_eq!(html.matches(r#"class="line"#).count(), n + 1);
    }
}

#[test]
fn deeply_nested_quotes_fit_a_small_stack() {
    let source = format!("{} deep\n", ">".repeat(20_000));
    let html = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || markdown_to_html(&source, &HighlightOptions::default()))
        .unwrap()
        .join()
        .unwrap();
    assert!(html.contains("deep"));
    assert!(html.matches("<blockquote>").count() <= codemark_engine::markdown::MAX_NESTING);
}
