//! Component protocol for Intarsia.
//!
//! This crate is the bridge that lets a plain typed data model act as a node
//! in an [`intarsia_markup`] tree, on equal footing with native elements.
//! A model opts in by composing two capabilities:
//!
//! - [`HasChildren`] - a hidden, non-schema slot for attached child content,
//!   filled with the builder-style [`HasChildren::with_children`]
//! - [`Component`] - a [`Component::to_markup`] override point describing the
//!   model's rendering, plus the chunk hook and string conversion the tree
//!   walker uses to serialize it lazily
//!
//! Field validation, serialization, and equality of the model itself stay
//! with whatever the model already uses (typed construction, serde derives);
//! this crate only adds the rendering protocol. The children slot is kept
//! out of the schema by marking it `#[serde(skip)]` and compares as always
//! equal, so attaching content never changes what a model *is*.
//!
//! ## Name Origin
//!
//! A **tessera** is one small tile set into a mosaic. A component is one
//! typed tile set into the surrounding markup panel.
//!
//! # Example
//!
//! ```
//! use intarsia_markup::{div, Element};
//! use intarsia_tessera::{Children, Component, HasChildren};
//!
//! #[derive(Debug, Default)]
//! struct UserCard {
//!     user_id: u32,
//!     username: String,
//!     children: Children,
//! }
//!
//! impl HasChildren for UserCard {
//!     fn children(&self) -> &Children {
//!         &self.children
//!     }
//!
//!     fn children_mut(&mut self) -> &mut Children {
//!         &mut self.children
//!     }
//! }
//!
//! impl Component for UserCard {
//!     fn to_markup(&self) -> Element {
//!         div()
//!             .class("user-info")
//!             .child(div().child(format!("{} ({})", self.username, self.user_id)))
//!             .child(div().child(self.children()))
//!     }
//! }
//!
//! let card = UserCard {
//!     user_id: 1,
//!     username: "Zohran".into(),
//!     ..Default::default()
//! }
//! .with_children("Some further information about Zohran");
//!
//! assert_eq!(
//!     card.markup().as_str(),
//!     "<div class=\"user-info\"><div>Zohran (1)</div>\
//!      <div>Some further information about Zohran</div></div>"
//! );
//! ```

pub mod children;
pub mod component;

pub use children::{Children, IntoChildren};
pub use component::{Component, HasChildren};
