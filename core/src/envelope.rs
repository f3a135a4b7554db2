use serde::{Deserialize, Serialize};

/// Code carried by every successful response.
pub const CODE_SUCCESS: i64 = 0;

/// Code the backend uses for a missing, invalid or expired session.
pub const CODE_UNAUTHORIZED: i64 = 401;

/// The `{code, message, data}` wrapper around every backend reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    /// Omitted by the backend for operations without a payload.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Envelope {
            code: CODE_SUCCESS,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Envelope {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == CODE_UNAUTHORIZED
    }
}
