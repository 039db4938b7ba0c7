//! Tree serialization.
//!
//! Rendering is a synchronous depth-first walk that pushes escaped text into
//! a single output buffer: start tag, attributes, early return for void
//! tags, children, end tag. Custom renderables participate through the
//! [`Render`] chunk hook, pulled only when the walk reaches them.

use crate::element::Element;
use crate::escape;
use crate::node::Node;
use crate::tags::is_void_tag;

/// Opaque context handed to [`Render::render_chunks`].
///
/// Carries no state of its own; it exists so the chunk hook has a stable
/// calling convention. Renderables should pass it through untouched.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    _reserved: (),
}

/// The contract that lets a custom type sit in a child position.
///
/// A renderable produces a finite sequence of pre-escaped text chunks on
/// demand. The tree walk prefers this hook over eager stringification, so a
/// deeply nested renderable is not serialized until the final pass reaches
/// it. Calling the hook again is safe; it recomputes from current state.
pub trait Render {
    fn render_chunks(&self, ctx: &mut RenderContext) -> Chunks;
}

/// A finite iterator of rendered text chunks.
///
/// Holds an unserialized fragment and stringifies it when the iterator is
/// driven, which is the lazy half of the [`Render`] contract.
#[derive(Debug, Default)]
pub struct Chunks {
    fragment: Option<Element>,
}

impl Chunks {
    /// A single chunk: the given fragment, serialized on demand.
    pub fn from_fragment(fragment: Element) -> Self {
        Self {
            fragment: Some(fragment),
        }
    }

    /// No chunks at all.
    pub fn empty() -> Self {
        Self { fragment: None }
    }
}

impl Iterator for Chunks {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.fragment
            .take()
            .map(|fragment| fragment.render().into_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.fragment.is_some());
        (n, Some(n))
    }
}

impl std::iter::FusedIterator for Chunks {}

pub(crate) fn write_node(node: &Node, ctx: &mut RenderContext, out: &mut String) {
    match node {
        Node::Element(el) => write_element(el, ctx, out),
        Node::Text(text) => out.push_str(&escape::text(text)),
        Node::Raw(markup) => out.push_str(markup.as_str()),
        Node::Fragment(nodes) => {
            for child in nodes {
                write_node(child, ctx, out);
            }
        }
        Node::Lazy(renderable) => {
            // Chunks are already escaped markup.
            for chunk in renderable.render_chunks(ctx) {
                out.push_str(&chunk);
            }
        }
    }
}

pub(crate) fn write_element(el: &Element, ctx: &mut RenderContext, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    for attr in &el.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        if let Some(value) = &attr.value {
            out.push_str("=\"");
            out.push_str(&escape::attribute(value));
            out.push('"');
        }
    }

    if is_void_tag(&el.tag) {
        out.push('>');
        return;
    }

    out.push('>');

    for child in &el.children {
        write_node(child, ctx, out);
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{div, span};

    struct Shout;

    impl Render for Shout {
        fn render_chunks(&self, _ctx: &mut RenderContext) -> Chunks {
            Chunks::from_fragment(span().child("LOUD"))
        }
    }

    #[test]
    fn test_lazy_node_resolves_through_chunk_hook() {
        let tree = div().child(Node::lazy(Shout));
        assert_eq!(tree.render().as_str(), "<div><span>LOUD</span></div>");
    }

    #[test]
    fn test_chunks_are_finite_and_fused() {
        let mut chunks = Shout.render_chunks(&mut RenderContext::default());
        assert_eq!(chunks.next().as_deref(), Some("<span>LOUD</span>"));
        assert_eq!(chunks.next(), None);
        assert_eq!(chunks.next(), None);
    }

    #[test]
    fn test_empty_chunks() {
        assert_eq!(Chunks::empty().count(), 0);
    }

    #[test]
    fn test_repeated_render_is_identical() {
        let tree = div().child("x").child(span().child("y"));
        assert_eq!(tree.render(), tree.render());
    }
}
