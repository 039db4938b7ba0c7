//! Pre-escaped markup text.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::escape;

/// Text that is already escaped and safe to emit into HTML verbatim.
///
/// Everything the renderer produces is wrapped in `Markup`, so rendered
/// output can be embedded as a child of another tree without being escaped a
/// second time. Construct one with [`Markup::escape`] for arbitrary input,
/// or [`Markup::from_safe`] for text you already know is safe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wrap a string that is already escaped.
    ///
    /// The caller asserts safety; no inspection is performed.
    pub fn from_safe(safe: impl Into<String>) -> Self {
        Self(safe.into())
    }

    /// Escape arbitrary text into markup.
    pub fn escape(raw: &str) -> Self {
        Self(escape::text(raw).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for Markup {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> String {
        markup.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_constructor() {
        assert_eq!(Markup::escape("a < b").as_str(), "a &lt; b");
    }

    #[test]
    fn test_from_safe_is_verbatim() {
        assert_eq!(Markup::from_safe("<b>bold</b>").as_str(), "<b>bold</b>");
    }

    #[test]
    fn test_serde_transparent() {
        let markup = Markup::from_safe("<i>x</i>");
        let json = serde_json::to_string(&markup).unwrap();
        assert_eq!(json, "\"<i>x</i>\"");
    }
}
