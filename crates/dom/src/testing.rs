// ABOUTME: In-memory mock tree used by unit tests of the traversal algorithms.
// ABOUTME: Nodes carry class lists; every matches() call is recorded for visit-count assertions.

use std::cell::{Cell, RefCell};

use thiserror::Error;

use crate::element::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported selector: {0}")]
pub(crate) struct MockError(pub String);

struct MockData {
    classes: Vec<String>,
    element: bool,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Arena tree. Selectors are `.class` or `*`; anything else is an error.
#[derive(Default)]
pub(crate) struct MockTree {
    nodes: Vec<MockData>,
    calls: RefCell<Vec<(usize, String)>>,
    sibling_steps: Cell<usize>,
}

impl MockTree {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, parent: Option<usize>, classes: &str, element: bool) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(MockData {
            classes: classes.split_whitespace().map(str::to_string).collect(),
            element,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.nodes[p].children.push(idx);
        }
        idx
    }

    pub(crate) fn root(&mut self, classes: &str) -> usize {
        self.push(None, classes, true)
    }

    pub(crate) fn child(&mut self, parent: usize, classes: &str) -> usize {
        self.push(Some(parent), classes, true)
    }

    pub(crate) fn text(&mut self, parent: usize) -> usize {
        self.push(Some(parent), "", false)
    }

    pub(crate) fn node(&self, idx: usize) -> MockNode<'_> {
        MockNode { tree: self, idx }
    }

    /// Number of `matches` calls made against `idx` with `selector`.
    pub(crate) fn match_count(&self, idx: usize, selector: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(i, s)| *i == idx && s == selector)
            .count()
    }

    /// Nodes tested against `selector`, in call order.
    pub(crate) fn visited_with(&self, selector: &str) -> Vec<usize> {
        self.calls
            .borrow()
            .iter()
            .filter(|(_, s)| s == selector)
            .map(|(i, _)| *i)
            .collect()
    }

    /// Number of `next_element_sibling` calls made so far.
    pub(crate) fn sibling_steps(&self) -> usize {
        self.sibling_steps.get()
    }

    fn next_element(&self, siblings: &[usize], from: usize) -> Option<usize> {
        siblings[from..]
            .iter()
            .copied()
            .find(|&i| self.nodes[i].element)
    }
}

#[derive(Clone, Copy)]
pub(crate) struct MockNode<'t> {
    tree: &'t MockTree,
    pub(crate) idx: usize,
}

impl std::fmt::Debug for MockNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockNode({})", self.idx)
    }
}

impl PartialEq for MockNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx
    }
}

impl<'t> Element for MockNode<'t> {
    type Id = usize;
    type Error = MockError;

    fn id(&self) -> usize {
        self.idx
    }

    fn is_element(&self) -> bool {
        self.tree.nodes[self.idx].element
    }

    fn parent_element(&self) -> Option<Self> {
        let parent = self.tree.nodes[self.idx].parent?;
        Some(self.tree.node(parent))
    }

    fn first_element_child(&self) -> Option<Self> {
        let children = &self.tree.nodes[self.idx].children;
        self.tree
            .next_element(children, 0)
            .map(|i| self.tree.node(i))
    }

    fn next_element_sibling(&self) -> Option<Self> {
        self.tree.sibling_steps.set(self.tree.sibling_steps.get() + 1);
        let parent = self.tree.nodes[self.idx].parent?;
        let siblings = &self.tree.nodes[parent].children;
        let pos = siblings.iter().position(|&i| i == self.idx)?;
        self.tree
            .next_element(siblings, pos + 1)
            .map(|i| self.tree.node(i))
    }

    fn matches(&self, selector: &str) -> Result<bool, MockError> {
        self.tree
            .calls
            .borrow_mut()
            .push((self.idx, selector.to_string()));
        let data = &self.tree.nodes[self.idx];
        if selector == "*" {
            return Ok(data.element);
        }
        match selector.strip_prefix('.') {
            Some(class) if !class.is_empty() => {
                Ok(data.element && data.classes.iter().any(|c| c == class))
            }
            _ => Err(MockError(selector.to_string())),
        }
    }
}
