// ABOUTME: Radiating matcher finding the topologically closest element matching a selector.
// ABOUTME: Scans siblings and their subtrees breadth-first at each level before ascending.

use std::collections::{HashSet, VecDeque};

use crate::element::Element;
use crate::error::TraversalError;
use crate::traverse::active_stop;

type Result<T, E> = std::result::Result<T, TraversalError<E>>;

/// Finds the element closest to `start` that matches `selector`.
///
/// The search radiates outward one level at a time:
///
/// 1. `start` itself.
/// 2. Every element child of `start`'s parent in document order, each followed
///    by a breadth-first scan of its subtree. `start`'s own subtree is not
///    scanned.
/// 3. The parent itself. If the parent matches `stop_selector` instead, the
///    search ends with `Ok(None)`.
/// 4. Repeat from step 2 with the parent as the new starting point.
///
/// Each node is tested at most once per call.
///
/// # Errors
///
/// [`TraversalError::InvalidArgument`] if `start` is not an element or
/// `selector` is blank. [`TraversalError::Match`] carries any error raised by
/// [`Element::matches`].
pub fn reverse_query_selector<N: Element>(
    start: &N,
    selector: &str,
    stop_selector: Option<&str>,
) -> Result<Option<N>, N::Error> {
    if !start.is_element() {
        return Err(TraversalError::invalid_argument(
            "the start node must be an element",
        ));
    }
    if selector.trim().is_empty() {
        return Err(TraversalError::invalid_argument(
            "the selector must be a non-empty string",
        ));
    }
    let stop_selector = active_stop(stop_selector);

    if matches(start, selector)? {
        return Ok(Some(start.clone()));
    }

    let mut visited = HashSet::new();
    visited.insert(start.id());

    let mut current = start.clone();
    let mut level = 0usize;
    while let Some(parent) = current.parent_element() {
        level += 1;
        log::trace!("reverse_query_selector: scanning level {}", level);

        for sibling in parent.element_children() {
            if !visited.insert(sibling.id()) {
                continue;
            }
            if sibling.id() != current.id() && matches(&sibling, selector)? {
                log::debug!("reverse_query_selector: sibling match at level {}", level);
                return Ok(Some(sibling));
            }
            if let Some(found) = scan_descendants(&sibling, selector, &mut visited)? {
                log::debug!("reverse_query_selector: descendant match at level {}", level);
                return Ok(Some(found));
            }
        }

        current = parent;
        if visited.insert(current.id()) {
            if matches(&current, selector)? {
                log::debug!("reverse_query_selector: ancestor match at level {}", level);
                return Ok(Some(current));
            }
            if let Some(stop) = stop_selector {
                if matches(&current, stop)? {
                    log::trace!("reverse_query_selector: stopped at level {}", level);
                    break;
                }
            }
        }
    }

    Ok(None)
}

fn matches<N: Element>(node: &N, selector: &str) -> Result<bool, N::Error> {
    node.matches(selector).map_err(TraversalError::Match)
}

/// Breadth-first scan below `root`, skipping and marking visited nodes.
///
/// A first child enqueues the whole chain of its following siblings before its
/// own first child, so a generation is queued ahead of the next one. Later
/// siblings only enqueue their first child; their chain is already queued.
fn scan_descendants<N: Element>(
    root: &N,
    selector: &str,
    visited: &mut HashSet<N::Id>,
) -> Result<Option<N>, N::Error> {
    // (node, whether it heads its sibling chain)
    let mut queue: VecDeque<(N, bool)> = root
        .first_element_child()
        .map(|child| (child, true))
        .into_iter()
        .collect();

    while let Some((node, heads_chain)) = queue.pop_front() {
        if !visited.insert(node.id()) {
            continue;
        }
        if matches(&node, selector)? {
            return Ok(Some(node));
        }

        if heads_chain {
            let mut next = node.next_element_sibling();
            while let Some(sibling) = next {
                next = sibling.next_element_sibling();
                queue.push_back((sibling, false));
            }
        }
        if let Some(child) = node.first_element_child() {
            queue.push_back((child, true));
        }
    }

    Ok(None)
}
