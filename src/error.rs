use std::time::Duration;

use thiserror::Error;

/// Failure talking to the analysis service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Map a reqwest error, using `timeout` for the message when it expired.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(timeout)
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

impl From<TransportError> for String {
    fn from(err: TransportError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_code_and_body() {
        let err = TransportError::Status {
            status: 400,
            body: "empty file".to_string(),
        };
        assert_eq!(String::from(err), "Service returned 400: empty file");
    }

    #[test]
    fn test_timeout_message_uses_seconds() {
        let err = TransportError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Request timed out after 30s");
    }
}
