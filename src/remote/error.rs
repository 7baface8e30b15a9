#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, TLS, timeout or body read failure.
    #[error("{0}")]
    Transport(String),

    #[error("request cancelled")]
    Cancelled,

    #[error("{label} failed (HTTP {status}): {message}")]
    Status {
        label: &'static str,
        status: u16,
        message: String,
    },

    /// Malformed JSON, missing fields or an unknown enum string.
    #[error("parse {label}: {source}")]
    Parse {
        label: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("credentials: {0}")]
    Credentials(String),
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
