//! Error types for configuration parsing.

use thiserror::Error;

/// Reasons a configuration document could not be turned into a [`crate::Configuration`].
///
/// Only the document as a whole can fail; entries with the wrong shape are
/// skipped and reported through [`crate::ValidationIssue::Malformed`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Payload was not valid JSON.
    #[error("configuration is not valid JSON")]
    Parse {
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// Top-level value was not an object.
    #[error("configuration root must be an object, found {found}")]
    NotAnObject {
        /// JSON type name of the value that was found instead.
        found: &'static str,
    },
}
