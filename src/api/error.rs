/// Error types for the Robot API client
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by client and endpoint service calls
#[derive(Debug, Error)]
pub enum Error {
    /// The filter struct could not be turned into query parameters
    #[error("Failed to encode query options: {0}")]
    Encode(#[source] serde_json::Error),

    /// Base URL and path did not form a valid URL
    #[error("Invalid request URL: {0}")]
    Request(#[from] url::ParseError),

    /// Network, DNS, TLS or timeout failure reported by the HTTP client
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller's cancellation token fired before the call completed
    #[error("Request cancelled")]
    Cancelled,

    /// The webservice answered with a non-success status
    #[error("API error {status} ({code}): {message}")]
    Api {
        status: StatusCode,
        /// Robot error code such as `NOT_FOUND` or `UNAUTHORIZED`
        code: String,
        message: String,
    },

    /// The response body did not have the expected envelope shape
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
