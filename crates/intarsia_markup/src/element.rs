//! HTML elements and their builder surface.

use std::fmt;

use compact_str::{CompactString, ToCompactString};
use smallvec::SmallVec;

use crate::markup::Markup;
use crate::node::{IntoNode, Node};
use crate::render::RenderContext;
use crate::tags::is_safe_attr_name;

/// A single attribute. A `None` value renders as a bare name
/// (`<input disabled>`), otherwise as `name="escaped value"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: CompactString,
    pub value: Option<CompactString>,
}

/// An HTML element: tag, attributes, children.
///
/// Built with chainable methods and serialized with [`Element::render`].
/// Void tags (`br`, `img`, ...) render without a closing tag; children
/// attached to one are a caller bug and are guarded by `debug_assert!`.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: CompactString,
    pub attributes: SmallVec<[Attribute; 4]>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute. The value is escaped at render time.
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl fmt::Display) -> Self {
        let name = name.into();
        debug_assert!(is_safe_attr_name(&name), "unsafe attribute name: {name}");
        self.attributes.push(Attribute {
            name,
            value: Some(value.to_compact_string()),
        });
        self
    }

    /// Add a valueless attribute (`<input disabled>`).
    pub fn flag(mut self, name: impl Into<CompactString>) -> Self {
        let name = name.into();
        debug_assert!(is_safe_attr_name(&name), "unsafe attribute name: {name}");
        self.attributes.push(Attribute { name, value: None });
        self
    }

    /// Add a class. Repeated calls join with a space into a single
    /// `class` attribute.
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        let class = class.as_ref();
        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|attr| attr.name == "class")
        {
            if let Some(value) = &mut existing.value {
                value.push(' ');
                value.push_str(class);
                return self;
            }
        }
        self.attr("class", class)
    }

    pub fn id(self, id: impl fmt::Display) -> Self {
        self.attr("id", id)
    }

    /// Append a single child.
    pub fn child(mut self, child: impl IntoNode) -> Self {
        debug_assert!(
            !crate::tags::is_void_tag(&self.tag),
            "void element <{}> cannot have children",
            self.tag
        );
        self.children.push(child.into_node());
        self
    }

    /// Append children from an iterator, in order.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoNode,
    {
        self.children
            .extend(children.into_iter().map(IntoNode::into_node));
        self
    }

    /// Serialize this element to escaped markup.
    pub fn render(&self) -> Markup {
        let mut ctx = RenderContext::default();
        self.render_with(&mut ctx)
    }

    /// Serialize with a caller-supplied context.
    pub fn render_with(&self, ctx: &mut RenderContext) -> Markup {
        let mut out = String::with_capacity(64);
        crate::render::write_element(self, ctx, &mut out);
        Markup::from_safe(out)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render().as_str())
    }
}

/// Create an element with an arbitrary tag.
pub fn element(tag: impl Into<CompactString>) -> Element {
    Element::new(tag)
}

pub fn a() -> Element {
    Element::new("a")
}

pub fn article() -> Element {
    Element::new("article")
}

pub fn br() -> Element {
    Element::new("br")
}

pub fn button() -> Element {
    Element::new("button")
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn em() -> Element {
    Element::new("em")
}

pub fn footer() -> Element {
    Element::new("footer")
}

pub fn form() -> Element {
    Element::new("form")
}

pub fn h1() -> Element {
    Element::new("h1")
}

pub fn h2() -> Element {
    Element::new("h2")
}

pub fn h3() -> Element {
    Element::new("h3")
}

pub fn h4() -> Element {
    Element::new("h4")
}

pub fn header() -> Element {
    Element::new("header")
}

pub fn hr() -> Element {
    Element::new("hr")
}

pub fn img() -> Element {
    Element::new("img")
}

pub fn input() -> Element {
    Element::new("input")
}

pub fn label() -> Element {
    Element::new("label")
}

pub fn li() -> Element {
    Element::new("li")
}

pub fn nav() -> Element {
    Element::new("nav")
}

pub fn ol() -> Element {
    Element::new("ol")
}

pub fn p() -> Element {
    Element::new("p")
}

pub fn section() -> Element {
    Element::new("section")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn strong() -> Element {
    Element::new("strong")
}

pub fn table() -> Element {
    Element::new("table")
}

pub fn tbody() -> Element {
    Element::new("tbody")
}

pub fn td() -> Element {
    Element::new("td")
}

pub fn th() -> Element {
    Element::new("th")
}

pub fn thead() -> Element {
    Element::new("thead")
}

pub fn tr() -> Element {
    Element::new("tr")
}

pub fn ul() -> Element {
    Element::new("ul")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element() {
        assert_eq!(div().render().as_str(), "<div></div>");
    }

    #[test]
    fn test_attribute_value_is_escaped() {
        let el = div().attr("title", "a \"quote\" & more");
        assert_eq!(
            el.render().as_str(),
            "<div title=\"a &quot;quote&quot; &amp; more\"></div>"
        );
    }

    #[test]
    fn test_flag_attribute() {
        let el = input().flag("disabled");
        assert_eq!(el.render().as_str(), "<input disabled>");
    }

    #[test]
    fn test_class_merging() {
        let el = div().class("card").class("highlight");
        assert_eq!(el.render().as_str(), "<div class=\"card highlight\"></div>");
    }

    #[test]
    fn test_attribute_order_is_preserved() {
        let el = div().attr("data-x", "1").class("c").id("main");
        assert_eq!(
            el.render().as_str(),
            "<div data-x=\"1\" class=\"c\" id=\"main\"></div>"
        );
    }

    #[test]
    fn test_void_tag_has_no_closing_tag() {
        assert_eq!(br().render().as_str(), "<br>");
        assert_eq!(img().attr("src", "x.png").render().as_str(), "<img src=\"x.png\">");
    }

    #[test]
    fn test_children_in_order() {
        let el = ul().children(["a", "b", "c"].map(|s| li().child(s)));
        assert_eq!(
            el.render().as_str(),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn test_custom_tag() {
        assert_eq!(
            element("my-widget").render().as_str(),
            "<my-widget></my-widget>"
        );
    }
}
