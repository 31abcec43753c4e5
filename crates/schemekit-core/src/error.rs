//! Error handling for SchemeKit.
//!
//! The editor core is deliberately near-infallible: scene mutations are
//! total (a missing identifier is a no-op) and undo/redo on an empty stack
//! is defined behavior. The only fallible surface is the scheme blob
//! (de)serialization exchanged with the persistence collaborator.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Errors produced at the edges of the scheme editor core.
#[derive(Error, Debug)]
pub enum SchemeError {
    /// The persisted scheme document could not be parsed.
    #[error("Malformed scheme document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// The persisted shape list could not be parsed.
    #[error("Malformed shape list: {0}")]
    MalformedShapes(#[source] serde_json::Error),

    /// A scheme structure could not be serialized.
    #[error("Failed to serialize scheme data: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for SchemeKit operations.
pub type Result<T> = std::result::Result<T, SchemeError>;
