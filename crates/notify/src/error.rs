//! Delivery error types.

use thiserror::Error;

/// Errors that can occur delivering an alert.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Endpoint unreachable.
    #[error("network error: {0}")]
    Network(String),

    /// Request timeout.
    #[error("delivery timeout: {0}")]
    Timeout(String),

    /// Endpoint rejected the push.
    #[error("push rejected: {status_code} - {message}")]
    Rejected {
        /// HTTP status code.
        status_code: u16,
        /// Response body or status text.
        message: String,
    },
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_carries_status() {
        let err = NotifyError::Rejected {
            status_code: 403,
            message: "forbidden".to_string(),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("forbidden"));
    }
}
