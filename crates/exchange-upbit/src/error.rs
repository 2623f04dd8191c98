//! Error types for the Upbit client.

use thiserror::Error;

/// Errors that can occur when fetching Upbit market data.
#[derive(Debug, Error)]
pub enum UpbitError {
    /// Network error.
    #[error("network error: {0}")]
    Network(String),

    /// Request timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// API returned a non-success status.
    #[error("API error: {status_code} - {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Response body or status text.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl UpbitError {
    /// Creates an API error from status code and message.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for UpbitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Malformed(err.to_string())
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for UpbitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Result type alias for Upbit operations.
pub type Result<T> = std::result::Result<T, UpbitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_carries_status_and_message() {
        let err = UpbitError::api(429, "too many requests");
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("too many requests"));
    }

    #[test]
    fn malformed_from_serde() {
        let parse_err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let err = UpbitError::from(parse_err);
        assert!(matches!(err, UpbitError::Malformed(_)));
    }
}
