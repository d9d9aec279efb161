//! # dom-elements
//!
//! Small convenience helpers over document-tree manipulation: building
//! elements with attributes and children, and moving an element among its
//! siblings.
//!
//! Every helper delegates to a caller-owned [`DocumentTree`]. The crate keeps
//! no state of its own; [`dom::HtmlTree`] adapts a `dom_query` document.
//!
//! ## Quick Start
//!
//! ```rust
//! use dom_elements::dom::{outer_html, parse, HtmlTree};
//! use dom_elements::{attributes, create_container, move_before, Content};
//!
//! let doc = parse("<body></body>");
//! let tree = HtmlTree::new(&doc);
//! let body = tree.body().unwrap();
//!
//! let attrs = attributes([("class", "menu")]);
//! let list = create_container(&tree, "ul", Some(&attrs), [], Some(&body));
//! create_container(&tree, "li", None, [Content::from("first")], Some(&list));
//! let second = create_container(&tree, "li", None, [Content::from("second")], Some(&list));
//! move_before(&tree, &second);
//!
//! assert_eq!(
//!     outer_html(&list).to_string(),
//!     r#"<ul class="menu"><li>second</li><li>first</li></ul>"#
//! );
//! ```
//!
//! ## Features
//!
//! - **Builders**: text nodes, elements, multi-child containers
//! - **Reordering**: one step earlier/later, to the front, to the end
//! - **Markup**: build a tree from a serde (JSON) description

mod builder;
mod content;
mod elements;
mod error;
mod options;
mod reorder;
mod tree;

/// `dom_query`-backed document tree and inspection helpers.
pub mod dom;

/// Declarative element descriptions rendered through the builders.
pub mod markup;

// Public API - re-exports
pub use builder::{apply_attributes, create_container, create_element, create_text_node};
pub use content::{attributes, Attributes, Content};
pub use elements::Elements;
pub use error::{Error, Result};
pub use markup::{render, render_html, Markup, MarkupChild};
pub use options::Options;
pub use reorder::{
    move_after, move_before, move_to_first, move_to_last, to_first_child, to_last_child,
};
pub use tree::DocumentTree;
