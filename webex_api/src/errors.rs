//! Error types for the API wrapper.

/// Errors that can occur when building or sending API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller-supplied argument has the wrong kind or shape. Raised before
    /// any request is sent.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },
    /// Session configuration is missing or unusable.
    #[error("configuration error: {0}")]
    Config(String),
    /// The HTTP request could not be sent or the response could not be read
    /// (connection failure, timeout).
    #[error("Request failed")]
    Network(#[from] reqwest::Error),
    /// The API answered with a status other than the one the endpoint expects.
    #[error("Request failed with status {status} (expected {expected})")]
    HttpStatus {
        status: u16,
        expected: u16,
        body: String,
    },
    /// The API answered with HTTP 429.
    #[error("Rate limited by the API (retry after {retry_after:?}s)")]
    RateLimited { retry_after: Option<u64> },
    /// The response body was not valid JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// The response was JSON but not shaped the way the endpoint describes.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl Error {
    pub(crate) fn invalid_argument(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
