//! Class and property names the highlighter reads and writes.
//!
//! Stylesheets target exactly these names, so the set is closed: every class
//! the highlighter emits is either listed here or is one of the twelve
//! [`TokenClass`] names.

use codemark_syntax::TokenClass;

/// Marks every classified token and token group.
pub const TOKEN: &str = "token";
/// A markup or JSX tag group.
pub const TAG: &str = "tag";
/// An attribute group inside a tag.
pub const ATTRIBUTE: &str = "attribute";
/// Per-line wrapper.
pub const LINE: &str = "line";
/// Added to wrappers of requested lines.
pub const LINE_HIGHLIGHTED: &str = "line--highlighted";
/// Wrapper around text enclosed in word markers.
pub const HIGHLIGHTED_WORD: &str = "highlighted-word";

/// Class prefix naming a code block's language (`language-tsx`).
pub const LANGUAGE_PREFIX: &str = "language-";

/// Line number property on line wrappers.
pub const DATA_LINE: &str = "data-line";
/// Code block property holding the line range setting.
pub const LINE_PROPERTY: &str = "line";
/// Code block property overriding the word marker.
pub const MARKER_PROPERTY: &str = "marker";

/// Tag name of every element the highlighter creates.
pub const SPAN: &str = "span";

const STRUCTURAL: [&str; 6] = [
    TOKEN,
    TAG,
    ATTRIBUTE,
    LINE,
    LINE_HIGHLIGHTED,
    HIGHLIGHTED_WORD,
];

/// Every class the highlighter can emit.
pub fn classes() -> impl Iterator<Item = &'static str> {
    STRUCTURAL
        .into_iter()
        .chain(TokenClass::ALL.into_iter().map(TokenClass::class_name))
}

pub fn is_known_class(class: &str) -> bool {
    classes().any(|known| known == class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_eighteen_distinct_names() {
        let mut names: Vec<_> = classes().collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 18);
    }

    #[test]
    fn token_kinds_are_known() {
        assert!(is_known_class("keyword"));
        assert!(is_known_class("attribute-value"));
        assert!(is_known_class("line--highlighted"));
        assert!(!is_known_class("language-rust"));
    }
}
