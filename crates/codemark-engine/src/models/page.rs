use relative_path::{RelativePath, RelativePathBuf};

use crate::highlight::HighlightOptions;
use crate::render::to_html_page;
use crate::tree::Node;

/// A Markdown source file and the HTML file it renders to.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// File name without the `.md` extension; the title when the page has
    /// no top-level heading.
    display_name: String,
    output_path: RelativePathBuf,
}

impl Page {
    pub fn new(relative_path: &RelativePath) -> Self {
        Self {
            display_name: Self::extract_display_name(relative_path),
            output_path: relative_path.with_extension("html"),
        }
    }

    /// Where the rendered page goes, relative to the output directory.
    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }

    /// Render `source` as a complete HTML page with highlighted code blocks.
    pub fn render(&self, source: &str, options: &HighlightOptions) -> String {
        let document = crate::markdown_to_tree(source, options);
        let title = first_heading(&document).unwrap_or_else(|| self.display_name.clone());
        to_html_page(&title, &document)
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string()
    }
}

fn first_heading(document: &Node) -> Option<String> {
    document
        .children()
        .iter()
        .filter_map(Node::as_element)
        .find(|element| element.is("h1"))
        .map(|heading| heading.to_text())
}
