// ABOUTME: Library entry point for the DOM traversal and string sanitization helpers.
// ABOUTME: Re-exports the Element trait, both matchers, the HTML backend, and text helpers.

//! dom-utils - locality-aware element lookup and string helpers for HTML trees.
//!
//! The traversal functions are written against the [`Element`] trait, so they
//! work over any read-only tree. An implementation backed by `scraper` is
//! provided in [`html`].
//!
//! # Example
//!
//! ```
//! use dom_utils::html::{parse_fragment, select_first};
//! use dom_utils::{closest_parent_element, reverse_query_selector};
//!
//! let doc = parse_fragment(
//!     r#"<div class="card"><span class="title"></span><button id="go"></button></div>"#,
//! );
//! let button = select_first(&doc, "#go").unwrap().unwrap();
//!
//! let card = closest_parent_element(&button, ".card", None).unwrap();
//! assert!(card.is_some());
//!
//! let title = reverse_query_selector(&button, ".title", None).unwrap();
//! assert_eq!(title.unwrap().attr("class"), Some("title"));
//! ```

pub mod element;
pub mod error;
pub mod html;
pub mod selector;
pub mod text;
pub mod traverse;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::element::Element;
pub use crate::error::{SelectorError, TraversalError};
pub use crate::html::HtmlNode;
pub use crate::text::{not_base_page, sanitize};
pub use crate::traverse::closest::{
    closest_parent_element, main_app_container, APP_CONTAINER_SELECTOR,
};
pub use crate::traverse::reverse::reverse_query_selector;
