//! The component capabilities: child storage access and rendering.

use intarsia_markup::{div, Chunks, Element, Markup, Node, Render, RenderContext};

use crate::children::{Children, IntoChildren};

/// Capability: the component owns a hidden [`Children`] slot.
///
/// Implementations point the two accessors at the model's `Children` field;
/// everything else is provided.
pub trait HasChildren {
    /// Read-only view of the attached content (empty if none assigned).
    fn children(&self) -> &Children;

    fn children_mut(&mut self) -> &mut Children;

    /// Attach child content, replacing whatever was assigned before, and
    /// hand the component back so construction and attachment fit in one
    /// expression:
    ///
    /// ```ignore
    /// Card { title: "Hi".into(), ..Default::default() }.with_children(("a", "b"))
    /// ```
    fn with_children(mut self, content: impl IntoChildren) -> Self
    where
        Self: Sized,
    {
        *self.children_mut() = content.into_children();
        self
    }
}

/// Capability: the component can describe itself as a markup fragment.
///
/// Override [`Component::to_markup`]; the chunk hook and string conversion
/// are derived from it. A component that forgets to override still renders -
/// as a visible placeholder naming the type - so the omission shows up in
/// output instead of failing the render pass.
pub trait Component: HasChildren {
    /// Produce this component's markup fragment.
    ///
    /// Typical implementations build an element embedding the model's
    /// fields and `self.children()`; nested components inside the slot are
    /// resolved recursively when the fragment is serialized.
    fn to_markup(&self) -> Element {
        div().child(format!(
            "to_markup() not implemented in {}",
            short_type_name::<Self>()
        ))
    }

    /// The serialization hook: a finite sequence of pre-escaped text chunks.
    ///
    /// The context is accepted and passed through untouched; its meaning
    /// belongs to the caller. Each call recomputes from current field and
    /// children state.
    fn render_chunks(&self, _ctx: &mut RenderContext) -> Chunks {
        Chunks::from_fragment(self.to_markup())
    }

    /// String conversion: all chunks concatenated, wrapped as pre-escaped
    /// markup so embedding the result in another tree does not escape it
    /// again.
    fn markup(&self) -> Markup {
        let mut ctx = RenderContext::default();
        let mut out = String::new();
        for chunk in self.render_chunks(&mut ctx) {
            out.push_str(&chunk);
        }
        Markup::from_safe(out)
    }

    /// Move the component into a tree as a lazy node. The surrounding tree
    /// serializes it through the chunk hook when rendering reaches it.
    fn into_node(self) -> Node
    where
        Self: Sized + 'static,
    {
        Node::lazy(Inlay(self))
    }
}

/// Adapter tying a component into the markup crate's [`Render`] contract.
struct Inlay<T: Component>(T);

impl<T: Component> Render for Inlay<T> {
    fn render_chunks(&self, ctx: &mut RenderContext) -> Chunks {
        self.0.render_chunks(ctx)
    }
}

/// Last path segment of a type name, with any generic arguments dropped.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Bare {
        children: Children,
    }

    impl HasChildren for Bare {
        fn children(&self) -> &Children {
            &self.children
        }

        fn children_mut(&mut self) -> &mut Children {
            &mut self.children
        }
    }

    impl Component for Bare {}

    #[test]
    fn test_default_placeholder_names_the_type() {
        let rendered = Bare::default().markup();
        assert_eq!(
            rendered.as_str(),
            "<div>to_markup() not implemented in Bare</div>"
        );
    }

    #[test]
    fn test_short_type_name_strips_path_and_generics() {
        assert_eq!(short_type_name::<Bare>(), "Bare");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec");
    }

    #[test]
    fn test_chunk_hook_is_single_and_recomputes() {
        let bare = Bare::default();
        let mut ctx = RenderContext::default();
        let first: Vec<String> = bare.render_chunks(&mut ctx).collect();
        let second: Vec<String> = bare.render_chunks(&mut ctx).collect();
        assert_eq!(first.len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_children_returns_self() {
        let bare = Bare::default().with_children(("a", "b"));
        assert_eq!(bare.children().len(), 2);
    }
}
