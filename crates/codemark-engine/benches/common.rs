// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with `inline` code.\n\n```rust line=2-3\nfn example() {\n    let __name__ = \"Hello\";\n    println!(\"{name}\");\n}\n```\n\n```tsx\nconst App = () => <div className=\"app\">{items.map((i) => <Item key={i} />)}</div>;\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_code(lines: usize) -> String {
    let mut content = String::new();
    for line in 0..lines {
        content.push_str(&format!(
            "let value_{line} = compute(\"__key__\", {line}) + 0x{line:x}; // note\n"
        ));
    }
    content
}
