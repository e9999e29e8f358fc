//! DOM operation errors.

use thiserror::Error;

/// Failure of a single DOM operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DomError {
    /// Handle does not refer to a node of this document.
    #[error("unknown node handle")]
    UnknownNode,
    /// Element does not carry an inline style declaration.
    #[error("<{tag}> cannot be styled")]
    NotStylable {
        /// Tag name of the element.
        tag: String,
    },
    /// The browser rejected the operation.
    #[error("{operation} failed: {detail}")]
    Js {
        /// DOM operation that failed.
        operation: &'static str,
        /// Debug rendering of the thrown value.
        detail: String,
    },
}
