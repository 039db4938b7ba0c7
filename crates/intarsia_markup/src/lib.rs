//! Escaped HTML element trees for Intarsia.
//!
//! This crate provides the markup side of Intarsia: a runtime tree of
//! elements, text, and custom renderables that serializes to escaped HTML.
//!
//! - [`Element`] - an HTML element built with chainable methods
//! - [`Node`] - anything that can sit in a child position
//! - [`Markup`] - text that is already escaped and must not be escaped again
//! - [`Render`] - the chunk-producing hook custom renderables implement to
//!   participate in serialization on equal footing with native elements
//!
//! ## Name Origin
//!
//! **Intarsia** is the craft of inlaying shaped pieces of wood into a larger
//! panel. This crate is the panel: the surface other pieces are set into.
//!
//! # Example
//!
//! ```
//! use intarsia_markup::{div, span};
//!
//! let tree = div()
//!     .class("greeting")
//!     .child(span().child("Hello, World!"));
//!
//! assert_eq!(
//!     tree.render().as_str(),
//!     r#"<div class="greeting"><span>Hello, World!</span></div>"#
//! );
//! ```

pub mod element;
pub mod escape;
pub mod markup;
pub mod node;
pub mod render;
pub mod tags;

pub use element::{Attribute, Element};
pub use markup::Markup;
pub use node::{IntoNode, Node};
pub use render::{Chunks, Render, RenderContext};
pub use tags::{is_safe_attr_name, is_void_tag};

pub use element::{
    a, article, br, button, div, element, em, footer, form, h1, h2, h3, h4, header, hr, img, input,
    label, li, nav, ol, p, section, span, strong, table, tbody, td, th, thead, tr, ul,
};
