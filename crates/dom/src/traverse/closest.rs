// ABOUTME: Upward matcher returning the nearest inclusive ancestor that matches a selector.
// ABOUTME: Also provides main_app_container, the lookup for the application root element.

use crate::element::Element;
use crate::traverse::active_stop;

/// Marker class of the application root container.
pub const APP_CONTAINER_SELECTOR: &str = ".app-container";

/// Walks from `element` up through its ancestors and returns the first node
/// matching `selector`, starting with `element` itself.
///
/// If a node matches `stop_selector` before any node matches `selector`, the
/// search ends with `Ok(None)`. A node matching both is returned. Errors from
/// [`Element::matches`] are returned unchanged.
///
/// `element` is not validated. A non-element start node (text, comment) is
/// tested like any other node; implementations such as
/// [`HtmlNode`](crate::HtmlNode) report no match for it, so the walk continues
/// with its element ancestors.
pub fn closest_parent_element<N: Element>(
    element: &N,
    selector: &str,
    stop_selector: Option<&str>,
) -> Result<Option<N>, N::Error> {
    let stop_selector = active_stop(stop_selector);
    let mut current = Some(element.clone());

    while let Some(node) = current {
        if node.matches(selector)? {
            return Ok(Some(node));
        }
        if let Some(stop) = stop_selector {
            if node.matches(stop)? {
                log::trace!("closest_parent_element: stopped at {:?}", stop);
                return Ok(None);
            }
        }
        current = node.parent_element();
    }

    Ok(None)
}

/// Returns the nearest inclusive ancestor carrying the app container class.
pub fn main_app_container<N: Element>(element: &N) -> Result<Option<N>, N::Error> {
    closest_parent_element(element, APP_CONTAINER_SELECTOR, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTree;

    /// root(app-container) > section(panel) > div(row) > span(leaf panel)
    fn chain() -> (MockTree, [usize; 4]) {
        let mut tree = MockTree::new();
        let root = tree.root("app-container");
        let section = tree.child(root, "panel");
        let row = tree.child(section, "row");
        let leaf = tree.child(row, "leaf panel");
        (tree, [root, section, row, leaf])
    }

    #[test]
    fn test_returns_self_when_it_matches() {
        let (tree, [_, _, _, leaf]) = chain();
        let found = closest_parent_element(&tree.node(leaf), ".panel", None).unwrap();
        assert_eq!(found.map(|n| n.idx), Some(leaf));
    }

    #[test]
    fn test_returns_nearest_ancestor() {
        let (tree, [_, section, row, _]) = chain();
        let found = closest_parent_element(&tree.node(row), ".panel", None).unwrap();
        assert_eq!(found.map(|n| n.idx), Some(section));
    }

    #[test]
    fn test_not_found_at_root() {
        let (tree, [_, _, _, leaf]) = chain();
        let found = closest_parent_element(&tree.node(leaf), ".missing", None).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_stop_selector_halts_before_match() {
        let (tree, [root, _, row, leaf]) = chain();
        let found =
            closest_parent_element(&tree.node(leaf), ".app-container", Some(".row")).unwrap();
        assert!(found.is_none());
        assert_eq!(tree.match_count(row, ".row"), 1);
        assert_eq!(tree.match_count(root, ".app-container"), 0);
    }

    #[test]
    fn test_target_wins_over_stop_on_same_node() {
        let (tree, [_, section, row, _]) = chain();
        let found = closest_parent_element(&tree.node(row), ".panel", Some(".panel")).unwrap();
        assert_eq!(found.map(|n| n.idx), Some(section));
    }

    #[test]
    fn test_empty_stop_selector_is_ignored() {
        let (tree, [root, _, _, leaf]) = chain();
        let found =
            closest_parent_element(&tree.node(leaf), ".app-container", Some("")).unwrap();
        assert_eq!(found.map(|n| n.idx), Some(root));
    }

    #[test]
    fn test_matching_error_propagates() {
        let (tree, [_, _, _, leaf]) = chain();
        let err = closest_parent_element(&tree.node(leaf), "div", None).unwrap_err();
        assert_eq!(err.0, "div");
    }

    #[test]
    fn test_non_element_start_walks_element_ancestors() {
        let (mut tree, [root, _, row, _]) = chain();
        let text = tree.text(row);

        let found = closest_parent_element(&tree.node(text), ".row", None).unwrap();
        assert_eq!(found.map(|n| n.idx), Some(row));
        assert_eq!(tree.match_count(text, ".row"), 1);

        let found = main_app_container(&tree.node(text)).unwrap();
        assert_eq!(found.map(|n| n.idx), Some(root));
    }

    #[test]
    fn test_main_app_container() {
        let (tree, [root, _, _, leaf]) = chain();
        let found = main_app_container(&tree.node(leaf)).unwrap();
        assert_eq!(found.map(|n| n.idx), Some(root));

        let mut bare = MockTree::new();
        let top = bare.root("shell");
        let inner = bare.child(top, "inner");
        assert!(main_app_container(&bare.node(inner)).unwrap().is_none());
    }
}
