//! # Intarsia
//!
//! Typed data models inlaid into escaped HTML element trees.
//!
//! This crate re-exports the Intarsia sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`markup`] - element tree builder, escaping, and serialization
//! - [`tessera`] - the component protocol that lets a typed model render as
//!   a markup node
//!
//! # Example
//!
//! ```
//! use intarsia::markup::{div, span, Element};
//! use intarsia::tessera::{Children, Component, HasChildren};
//!
//! #[derive(Debug, Default)]
//! struct Greeting {
//!     name: String,
//!     children: Children,
//! }
//!
//! impl HasChildren for Greeting {
//!     fn children(&self) -> &Children {
//!         &self.children
//!     }
//!
//!     fn children_mut(&mut self) -> &mut Children {
//!         &mut self.children
//!     }
//! }
//!
//! impl Component for Greeting {
//!     fn to_markup(&self) -> Element {
//!         div().child(span().child(self.name.as_str())).child(self.children())
//!     }
//! }
//!
//! let tree = div().child(
//!     Greeting { name: "Ada".into(), ..Default::default() }
//!         .with_children("welcome back")
//!         .into_node(),
//! );
//! assert_eq!(
//!     tree.render().as_str(),
//!     "<div><div><span>Ada</span>welcome back</div></div>"
//! );
//! ```

/// Element tree builder, escaping, and serialization.
pub use intarsia_markup as markup;

/// The component protocol.
pub use intarsia_tessera as tessera;

pub use intarsia_markup::{Chunks, Element, IntoNode, Markup, Node, Render, RenderContext};
pub use intarsia_tessera::{Children, Component, HasChildren, IntoChildren};
