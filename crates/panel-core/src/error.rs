use thiserror::Error;

/// Errors that end one fetch attempt.
///
/// Shape problems inside the returned document are not represented here:
/// the normalizer turns those into empty collections.
#[derive(Debug, Error)]
pub enum PanelError {
    /// Endpoint is not configured. Raised before any network activity.
    #[error("Missing {0}")]
    Configuration(&'static str),

    /// The remote answered with a non-2xx status.
    #[error("Status API error {status}: {body}")]
    Request { status: u16, body: String },

    /// Connection, DNS, or other transport failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered 2xx but the body was not JSON.
    #[error("invalid JSON in status response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PanelError {
    /// HTTP status code, when the remote produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            PanelError::Request { status, .. } => Some(*status),
            PanelError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
