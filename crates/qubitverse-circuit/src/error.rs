//! Error types for the circuit crate.

use thiserror::Error;

/// Errors that can occur while reading editor state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// Editor snapshot could not be decoded or encoded.
    #[error("Invalid editor state: {0}")]
    Json(#[from] serde_json::Error),

    /// Mode name or flag not recognized.
    #[error("Unknown mode '{0}': expected calculate (0), probability (1) or measure (2)")]
    UnknownMode(String),
}

/// Result type for circuit operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
