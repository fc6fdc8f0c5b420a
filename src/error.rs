use crate::response::Response;
use serde_json::{json, Value};
use thiserror::Error;

/// Broad category of a [`FaxError`], for callers that dispatch on the
/// cause rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required parameter was missing or empty
    Validation,
    /// A local file was missing or unreadable
    Filesystem,
    /// The HTTP call itself failed
    Transport,
    /// The service answered with an error status and a body that is not JSON
    Http,
    /// The service answered but reported a failure
    Remote,
    /// The service answered with a body we could not interpret
    Decode,
    /// The client could not be configured
    Config,
}

/// Main error type for fax.to operations
#[derive(Debug, Error)]
pub enum FaxError {
    /// Required parameter missing, detected before any request is made
    #[error("{0}")]
    Validation(String),

    /// Local file missing or unreadable
    #[error("{0}")]
    Filesystem(String),

    /// Connection-level failure reported by the HTTP client
    #[error("cURL error: {0}")]
    Transport(String),

    /// Error status code with a body that is not JSON
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Error reported by the fax.to service in its JSON body
    #[error("{message}")]
    Remote { message: String, response: Response },

    /// Response body could not be interpreted
    #[error("invalid response: {0}")]
    Decode(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Client configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl FaxError {
    /// Create a new remote error from a decoded response
    pub fn from_response(response: Response) -> Self {
        let message = response
            .message()
            .or_else(|| response.get_string("error"))
            .or_else(|| response.status().map(|s| s.to_string()))
            .unwrap_or_else(|| "unknown error".to_string());

        FaxError::Remote { message, response }
    }

    pub(crate) fn validation(message: &str) -> Self {
        FaxError::Validation(message.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FaxError::Validation(_) => ErrorKind::Validation,
            FaxError::Filesystem(_) => ErrorKind::Filesystem,
            FaxError::Transport(_) => ErrorKind::Transport,
            FaxError::Http { .. } => ErrorKind::Http,
            FaxError::Remote { .. } => ErrorKind::Remote,
            FaxError::Decode(_) | FaxError::Json(_) => ErrorKind::Decode,
            FaxError::UrlParse(_) | FaxError::Config(_) => ErrorKind::Config,
        }
    }

    /// Check if this error was raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::Filesystem)
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, FaxError::Remote { .. })
    }

    /// The response body returned by the service, if it reported the error
    pub fn response(&self) -> Option<&Response> {
        match self {
            FaxError::Remote { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Render the error in the uniform `{"status": <message>}` shape.
    ///
    /// Remote errors are returned exactly as the service sent them.
    pub fn to_status_value(&self) -> Value {
        match self {
            FaxError::Remote { response, .. } => response.raw().clone(),
            other => json!({ "status": other.to_string() }),
        }
    }
}

impl From<reqwest::Error> for FaxError {
    fn from(err: reqwest::Error) -> Self {
        // The URL carries the API key
        FaxError::Transport(err.without_url().to_string())
    }
}

/// Result type for fax.to operations
pub type Result<T> = std::result::Result<T, FaxError>;
