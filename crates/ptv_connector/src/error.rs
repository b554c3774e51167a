//! Error types for the PTV client and connector

use thiserror::Error;

/// Errors that can occur while talking to the PTV Timetable API
#[derive(Debug, Error)]
pub enum PtvError {
    /// Transport-level failure before a response was received
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The API rejected the credentials or the request signature
    #[error("Authentication rejected: {0}")]
    Auth(String),

    /// The API answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Response status code
        status: u16,
        /// Response body, when one was readable
        body: String,
    },

    /// The response body was not valid JSON
    #[error("Invalid JSON response: {0}")]
    Decode(String),

    /// A timestamp did not match the fixed UTC wire format
    #[error("Malformed timestamp: {0}")]
    Parse(String),

    /// A flow step received an unusable answer or was called out of order
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Opaque signal to the host scheduler: skip this cycle, try again next
/// interval. The host owns all retry and backoff policy.
#[derive(Debug, Error)]
#[error("update failed: {source}")]
pub struct UpdateFailed {
    /// The underlying failure, preserved for logging
    #[from]
    pub source: PtvError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display() {
        let err = PtvError::HttpStatus {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[test]
    fn test_update_failed_preserves_source() {
        let err = UpdateFailed::from(PtvError::Connection("refused".to_string()));
        assert!(err.to_string().contains("refused"));
        assert!(matches!(err.source, PtvError::Connection(_)));
    }

    #[test]
    fn test_parse_error_display() {
        let err = PtvError::Parse("\"2024-01-15\": premature end of input".to_string());
        assert!(err.to_string().contains("2024-01-15"));
    }
}
