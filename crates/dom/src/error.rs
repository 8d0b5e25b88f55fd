// ABOUTME: Error types for traversal and selector evaluation.
// ABOUTME: TraversalError wraps argument validation and host matching failures; SelectorError covers CSS parsing.

use thiserror::Error;

/// Errors returned by [`reverse_query_selector`](crate::reverse_query_selector).
#[derive(Debug, Error)]
pub enum TraversalError<E> {
    /// The caller passed a start node or selector that failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The host's selector matching failed; the inner error is passed through untouched.
    #[error(transparent)]
    Match(E),
}

impl<E> TraversalError<E> {
    /// Creates an InvalidArgument error with a custom message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        TraversalError::InvalidArgument(msg.into())
    }

    /// Returns true if this is an InvalidArgument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TraversalError::InvalidArgument(_))
    }

    /// Returns true if this error came from selector matching.
    pub fn is_match(&self) -> bool {
        matches!(self, TraversalError::Match(_))
    }

    /// Returns the underlying matching error, if any.
    pub fn into_match(self) -> Option<E> {
        match self {
            TraversalError::Match(err) => Some(err),
            TraversalError::InvalidArgument(_) => None,
        }
    }
}

/// A CSS selector that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid selector {selector:?}: {reason}")]
pub struct SelectorError {
    pub selector: String,
    pub reason: String,
}

impl SelectorError {
    pub fn new(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            reason: reason.into(),
        }
    }
}
