// ABOUTME: Selector-driven tree traversal over any Element implementation.
// ABOUTME: Holds the upward (ancestor) matcher and the radiating (locality-first) matcher.

//! Element lookup relative to a starting node.
//!
//! - [`closest`]: walks the ancestor chain, the starting node included.
//! - [`reverse`]: searches outward ring by ring, siblings and their subtrees
//!   first, then the next ancestor.
//!
//! Both are read-only and keep no state between calls.

pub mod closest;
pub mod reverse;

/// An empty stop selector behaves like no stop selector.
pub(crate) fn active_stop(stop_selector: Option<&str>) -> Option<&str> {
    stop_selector.filter(|s| !s.is_empty())
}
