//! Tree node types.
//!
//! [`Node`] is anything that can occupy a child position: a nested element,
//! text (escaped on render), pre-escaped markup (emitted verbatim), a
//! fragment (children concatenated with no wrapper), or a lazy renderable
//! that is asked for its chunks only when the tree is serialized.

use std::fmt;
use std::rc::Rc;

use compact_str::{CompactString, ToCompactString};

use crate::element::Element;
use crate::markup::Markup;
use crate::render::{Render, RenderContext};

/// A child position in the markup tree.
#[derive(Clone)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Plain text, escaped when rendered.
    Text(CompactString),
    /// Pre-escaped markup, emitted verbatim.
    Raw(Markup),
    /// A sequence of nodes rendered back to back with no separators.
    Fragment(Vec<Node>),
    /// A custom renderable, resolved at serialization time through its
    /// chunk hook.
    Lazy(Rc<dyn Render>),
}

impl Node {
    pub fn text(text: impl Into<CompactString>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(markup: impl Into<Markup>) -> Self {
        Node::Raw(markup.into())
    }

    pub fn fragment(nodes: Vec<Node>) -> Self {
        Node::Fragment(nodes)
    }

    /// Wrap a custom renderable. Its chunks are pulled when the surrounding
    /// tree is serialized, not now.
    pub fn lazy(renderable: impl Render + 'static) -> Self {
        Node::Lazy(Rc::new(renderable))
    }

    /// Serialize this node to escaped markup.
    pub fn render(&self) -> Markup {
        let mut ctx = RenderContext::default();
        let mut out = String::new();
        crate::render::write_node(self, &mut ctx, &mut out);
        Markup::from_safe(out)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => f.debug_tuple("Element").field(el).finish(),
            Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Node::Raw(markup) => f.debug_tuple("Raw").field(markup).finish(),
            Node::Fragment(nodes) => f.debug_tuple("Fragment").field(nodes).finish(),
            Node::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render().as_str())
    }
}

/// Conversion into a [`Node`].
///
/// Implemented for the types that make sense in a child position: nodes,
/// elements, pre-escaped markup, strings, integers, node vectors, and
/// `Option` of any of those (`None` renders nothing).
pub trait IntoNode {
    fn into_node(self) -> Node;
}

impl IntoNode for Node {
    fn into_node(self) -> Node {
        self
    }
}

impl IntoNode for Element {
    fn into_node(self) -> Node {
        Node::Element(self)
    }
}

impl IntoNode for Markup {
    fn into_node(self) -> Node {
        Node::Raw(self)
    }
}

impl IntoNode for &str {
    fn into_node(self) -> Node {
        Node::Text(CompactString::from(self))
    }
}

impl IntoNode for String {
    fn into_node(self) -> Node {
        Node::Text(CompactString::from(self))
    }
}

impl IntoNode for CompactString {
    fn into_node(self) -> Node {
        Node::Text(self)
    }
}

impl IntoNode for Vec<Node> {
    fn into_node(self) -> Node {
        Node::Fragment(self)
    }
}

impl<T: IntoNode> IntoNode for Option<T> {
    fn into_node(self) -> Node {
        match self {
            Some(value) => value.into_node(),
            None => Node::Fragment(Vec::new()),
        }
    }
}

impl IntoNode for i32 {
    fn into_node(self) -> Node {
        Node::Text(self.to_compact_string())
    }
}

impl IntoNode for i64 {
    fn into_node(self) -> Node {
        Node::Text(self.to_compact_string())
    }
}

impl IntoNode for u32 {
    fn into_node(self) -> Node {
        Node::Text(self.to_compact_string())
    }
}

impl IntoNode for u64 {
    fn into_node(self) -> Node {
        Node::Text(self.to_compact_string())
    }
}

impl IntoNode for usize {
    fn into_node(self) -> Node {
        Node::Text(self.to_compact_string())
    }
}
