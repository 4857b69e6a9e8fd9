use std::fmt;

use serde::Serialize;

/// An element's classes.
///
/// Behaves as a set (adding a class twice keeps one copy) but remembers
/// insertion order so rendered output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated `class` attribute value.
    pub fn parse(value: &str) -> Self {
        value.split_whitespace().collect()
    }

    /// Add a class, returning false if it was already present.
    pub fn add(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if class.is_empty() || self.contains(&class) {
            return false;
        }
        self.0.push(class);
        true
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// First class starting with `prefix`, with the prefix removed.
    pub fn strip_first_prefixed(&self, prefix: &str) -> Option<&str> {
        self.iter().find_map(|class| class.strip_prefix(prefix))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = ClassList::new();
        for class in iter {
            list.add(class);
        }
        list
    }
}

impl<S: Into<String>> Extend<S> for ClassList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for class in iter {
            self.add(class);
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn duplicates_collapse_and_order_is_kept() {
        let mut classes = ClassList::new();
        assert!(classes.add("token"));
        assert!(classes.add("keyword"));
        assert!(!classes.add("token"));
        assert!(!classes.add(""));
        assert_eq!(classes.iter().collect::<Vec<_>>(), vec!["token", "keyword"]);
        assert_eq!(classes.to_string(), "token keyword");
    }

    #[test]
    fn parse_attribute_value() {
        let classes = ClassList::parse("  language-tsx  numbered language-tsx ");
        assert_eq!(classes.len(), 2);
        assert_eq!(classes.strip_first_prefixed("language-"), Some("tsx"));
        assert_eq!(classes.strip_first_prefixed("lang-"), None);
    }

    #[test]
    fn serializes_as_array() {
        let classes: ClassList = ["line", "line--highlighted"].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&classes).unwrap(),
            r#"["line","line--highlighted"]"#
        );
    }
}
