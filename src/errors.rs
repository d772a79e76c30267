//! Error types for the document boundary
//!
//! The scansion core itself is total. These errors only arise where
//! external data enters: persisted JSON, mark keys, key names and pasted text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScansionError {
    /// Document id not present in the library
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    /// Mark key not of the form `{line}-{pos}`
    #[error("Invalid mark key: '{0}' (expected 'line-pos')")]
    InvalidMarkKey(String),

    /// Persisted mark value that is not exactly one character
    #[error("Invalid mark symbol: '{0}'")]
    InvalidMark(String),

    /// Meter name outside `dactylic`, `iambo-trochaic`, `other`
    #[error("Unknown meter: '{0}'")]
    UnknownMeter(String),

    /// Pasted text with nothing but whitespace
    #[error("Please paste some text first")]
    EmptyPaste,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
