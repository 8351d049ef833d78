//! Error types shared across the navigator core.

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, NavigatorError>;

/// Errors surfaced by the navigator core.
///
/// Scoring and content resolution never fail; they degrade to zero rows and
/// empty content instead. Hard errors are reserved for state machine misuse,
/// unknown entity ids, and the persistence boundary.
#[derive(Debug, Error)]
pub enum NavigatorError {
    /// A session method was called in a step that does not permit it.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// A selection referenced an entity id that does not exist.
    #[error("unknown {kind} id: {id}")]
    UnknownId { kind: &'static str, id: String },

    /// Filesystem failure at the persistence boundary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON at the persistence boundary.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
