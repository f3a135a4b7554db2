use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// No response reached us (DNS, connect, timeout, broken body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message} (code {code})")]
    Api { code: i64, message: String },

    #[error("Not authenticated: {message}")]
    Unauthenticated { message: String },

    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: StatusCode, body: String },

    #[error("Failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Token storage error: {0}")]
    TokenStore(#[from] std::io::Error),

    #[error("Not signed in")]
    NotSignedIn,

    #[error(transparent)]
    Invalid(#[from] wenote_core::CoreError),
}

impl ClientError {
    /// Envelope code for application errors, if any.
    pub fn code(&self) -> Option<i64> {
        match self {
            ClientError::Api { code, .. } => Some(*code),
            ClientError::Unauthenticated { .. } => Some(wenote_core::CODE_UNAUTHORIZED),
            _ => None,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ClientError::Unauthenticated { .. } | ClientError::NotSignedIn)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
