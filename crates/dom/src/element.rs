// ABOUTME: Host-agnostic element abstraction used by the traversal algorithms.
// ABOUTME: Defines the Element trait (identity, navigation, selector matching).

use std::hash::Hash;

/// A read-only handle to an element in an externally owned, rooted, ordered tree.
///
/// Navigation mirrors the DOM element accessors: only element nodes are ever
/// returned, and `parent_element` yields `None` when the parent is not an
/// element (for example the document node).
///
/// Implementations must not observe structural mutation while a traversal is
/// running; callers are responsible for keeping the tree stable for the
/// duration of a call.
pub trait Element: Clone {
    /// Identity of a node within its tree.
    type Id: Copy + Eq + Hash;

    /// Error raised by [`Element::matches`] for a selector it cannot evaluate.
    type Error: std::error::Error + 'static;

    fn id(&self) -> Self::Id;

    /// Whether this handle refers to an element node.
    fn is_element(&self) -> bool {
        true
    }

    fn parent_element(&self) -> Option<Self>;

    fn first_element_child(&self) -> Option<Self>;

    fn next_element_sibling(&self) -> Option<Self>;

    /// Tests `selector` against this node.
    fn matches(&self, selector: &str) -> Result<bool, Self::Error>;

    /// Element children in document order.
    fn element_children(&self) -> ElementChildren<Self> {
        ElementChildren {
            next: self.first_element_child(),
        }
    }
}

/// Iterator over the element children of a node.
#[derive(Debug, Clone)]
pub struct ElementChildren<N> {
    next: Option<N>,
}

impl<N: Element> Iterator for ElementChildren<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.next.take()?;
        self.next = current.next_element_sibling();
        Some(current)
    }
}
