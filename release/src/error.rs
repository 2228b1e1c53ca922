use thiserror::Error;

/// Result type alias for release lookups
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Errors raised while resolving a published release
#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("Unexpected tag format: '{tag}'!")]
    InvalidTag { tag: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Unexpected response from {url}: {message}")]
    UnexpectedResponse { url: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ReleaseError {
    /// Create a new invalid tag error
    pub fn invalid_tag<S: Into<String>>(tag: S) -> Self {
        Self::InvalidTag { tag: tag.into() }
    }

    /// Create a new unexpected response error
    pub fn unexpected_response<S: Into<String>>(url: S, message: S) -> Self {
        Self::UnexpectedResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Whether the failure happened talking to the remote API
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Status { .. } | Self::UnexpectedResponse { .. }
        )
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidTag { tag } => format!("Unexpected tag format: '{tag}'!"),
            Self::Http(e) => format!("Could not reach the GitHub API: {e}"),
            Self::Status { url, status } => {
                format!("GitHub API request to {url} failed with status {status}")
            }
            Self::UnexpectedResponse { url, message } => {
                format!("Unexpected response from {url}: {message}")
            }
            Self::InvalidConfig { message } => format!("Invalid configuration: {message}"),
        }
    }
}
