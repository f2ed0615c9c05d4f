//! Error types for the simulator client.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur when talking to the simulator backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-HTTP transport failed.
    #[error("Transport failed: {0}")]
    Transport(String),

    /// Endpoint is not a usable URL.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// A request is still pending and the caller rejects overlapping ones.
    #[error("Another request is still in flight")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_display() {
        let err = ClientError::InvalidEndpoint {
            endpoint: "localhost".into(),
            reason: "relative URL without a base".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'localhost'"));
        assert!(msg.contains("relative URL"));
    }

    #[test]
    fn test_busy_display() {
        assert_eq!(
            ClientError::Busy.to_string(),
            "Another request is still in flight"
        );
    }
}
