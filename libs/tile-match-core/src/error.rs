//! Error types for tile-match-core.

use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a key-value store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("malformed stored data under key {key}: {source}")]
    MalformedStoredData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("subject {subject:?} is reserved for generated pairs")]
    ReservedSubject { subject: String },

    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while parsing an imported deck.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing question at line {line}")]
    MissingQuestion { line: usize },

    #[error("missing answer at line {line}")]
    MissingAnswer { line: usize },

    #[error("invalid deck config: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors reported by the deck editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("no pair at index {index}")]
    NoSuchPair { index: usize },
}
