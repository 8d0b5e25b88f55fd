// ABOUTME: scraper/ego-tree backed implementation of the Element trait.
// ABOUTME: Provides HtmlNode plus document parsing, lookup and description helpers.

//! HTML backend for the traversal functions.
//!
//! [`HtmlNode`] wraps any node of a parsed [`scraper::Html`] tree. Only
//! element nodes pass validation in [`reverse_query_selector`](crate::reverse_query_selector);
//! text, comment and document nodes can still be wrapped so that callers can
//! hand over whatever node they hold.

use std::fmt;

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Node};
use serde::Serialize;

use crate::element::Element;
use crate::error::SelectorError;
use crate::selector::get_or_compile;

pub use scraper::Html;

/// Parses a full HTML document.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Parses an HTML fragment. The fragment's nodes are placed under a synthetic `<html>` root.
pub fn parse_fragment(html: &str) -> Html {
    Html::parse_fragment(html)
}

/// Returns the first element in document order matching `css`.
pub fn select_first<'a>(
    doc: &'a Html,
    css: &str,
) -> Result<Option<HtmlNode<'a>>, SelectorError> {
    let selector = get_or_compile(css)?;
    let first = doc.select(&selector).next().map(HtmlNode::from);
    Ok(first)
}

/// A node of a parsed HTML tree.
#[derive(Clone, Copy)]
pub struct HtmlNode<'a> {
    node: NodeRef<'a, Node>,
}

impl<'a> HtmlNode<'a> {
    pub fn new(node: NodeRef<'a, Node>) -> Self {
        Self { node }
    }

    /// The document node of `doc`. It is not an element.
    pub fn document(doc: &'a Html) -> Self {
        Self::new(doc.tree.root())
    }

    pub fn node(&self) -> NodeRef<'a, Node> {
        self.node
    }

    pub fn as_element(&self) -> Option<ElementRef<'a>> {
        ElementRef::wrap(self.node)
    }

    /// Lowercase tag name, or `None` for non-element nodes.
    pub fn tag_name(&self) -> Option<&'a str> {
        self.node.value().as_element().map(|el| el.name())
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.value().as_element().and_then(|el| el.attr(name))
    }

    /// Builds a serializable summary of this node.
    pub fn describe(&self) -> ElementInfo {
        let element = self.node.value().as_element();
        let mut path: Vec<String> = std::iter::successors(Some(*self), HtmlNode::parent_element)
            .filter_map(|n| n.tag_name().map(str::to_string))
            .collect();
        path.reverse();

        ElementInfo {
            tag: self.tag_name().unwrap_or_default().to_string(),
            id: element.and_then(|el| el.id()).map(str::to_string),
            classes: element
                .map(|el| el.classes().map(str::to_string).collect())
                .unwrap_or_default(),
            path: path.join(" > "),
        }
    }
}

impl<'a> From<ElementRef<'a>> for HtmlNode<'a> {
    fn from(el: ElementRef<'a>) -> Self {
        Self::new(*el)
    }
}

impl PartialEq for HtmlNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for HtmlNode<'_> {}

impl fmt::Debug for HtmlNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag_name() {
            Some(tag) => write!(f, "HtmlNode(<{}> {:?})", tag, self.node.id()),
            None => write!(f, "HtmlNode(#non-element {:?})", self.node.id()),
        }
    }
}

fn first_element_from(node: Option<NodeRef<'_, Node>>) -> Option<HtmlNode<'_>> {
    std::iter::successors(node, |n| n.next_sibling())
        .find(|n| n.value().is_element())
        .map(HtmlNode::new)
}

impl<'a> Element for HtmlNode<'a> {
    type Id = NodeId;
    type Error = SelectorError;

    fn id(&self) -> NodeId {
        self.node.id()
    }

    fn is_element(&self) -> bool {
        self.node.value().is_element()
    }

    fn parent_element(&self) -> Option<Self> {
        self.node
            .parent()
            .filter(|p| p.value().is_element())
            .map(HtmlNode::new)
    }

    fn first_element_child(&self) -> Option<Self> {
        first_element_from(self.node.first_child())
    }

    fn next_element_sibling(&self) -> Option<Self> {
        first_element_from(self.node.next_sibling())
    }

    /// Non-element nodes never match; an unparsable selector is an error either way.
    fn matches(&self, selector: &str) -> Result<bool, SelectorError> {
        let compiled = get_or_compile(selector)?;
        Ok(self
            .as_element()
            .map(|el| compiled.matches(&el))
            .unwrap_or(false))
    }
}

/// Serializable description of an element, used for reporting lookup results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementInfo {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Ancestor tag chain from the outermost element, e.g. `html > body > div`.
    pub path: String,
}
