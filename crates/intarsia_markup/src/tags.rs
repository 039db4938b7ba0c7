//! HTML tag and attribute-name tables.

use phf::{phf_set, Set};

/// Void elements never take children and render without a closing tag.
static VOID_TAGS: Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "param", "source", "track", "wbr",
};

/// Check if a tag is a void element.
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(tag)
}

/// Check that an attribute name cannot break out of its position in a start
/// tag. Names containing quotes, `>`, `/`, `=`, whitespace, or control
/// characters are unsafe.
pub fn is_safe_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_tags() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("img"));
        assert!(!is_void_tag("div"));
        assert!(!is_void_tag("span"));
    }

    #[test]
    fn test_safe_attr_names() {
        assert!(is_safe_attr_name("id"));
        assert!(is_safe_attr_name("data-user"));
        assert!(is_safe_attr_name("aria-label"));
        assert!(!is_safe_attr_name(""));
        assert!(!is_safe_attr_name("on click"));
        assert!(!is_safe_attr_name("x=\"y\""));
        assert!(!is_safe_attr_name("a>b"));
    }
}
