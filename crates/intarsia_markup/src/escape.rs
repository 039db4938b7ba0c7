//! HTML escaping.
//!
//! Thin wrappers over `htmlize` so the rest of the crate has one place that
//! decides which escape applies where: text content and attribute values are
//! escaped differently.

use std::borrow::Cow;

/// Escape a string for use as text content.
pub fn text(raw: &str) -> Cow<'_, str> {
    htmlize::escape_text(raw)
}

/// Escape a string for use inside a double-quoted attribute value.
pub fn attribute(raw: &str) -> Cow<'_, str> {
    htmlize::escape_attribute(raw)
}
