use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as returned by `GET /users/me`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    /// One of the preset avatar names (cat, fox, rocket, ...)
    #[serde(default)]
    pub avatar_style: String,
    #[serde(default)]
    pub avatar_color: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_notes: i64,
    #[serde(default)]
    pub total_chars: i64,
    #[serde(default)]
    pub current_streak: i64,
}

impl User {
    /// Nickname when set, username otherwise.
    pub fn display_name(&self) -> &str {
        if self.nickname.trim().is_empty() {
            &self.username
        } else {
            &self.nickname
        }
    }
}

/// Body of `PATCH /users/me`. Only present fields are sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &ProfileUpdate::default()
    }
}

/// Body of `POST /users/me/password`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Body of `DELETE /users/me`; `confirm` must be the literal `DELETE`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountDeletion {
    pub password: String,
    pub confirm: String,
}

impl AccountDeletion {
    pub fn new(password: impl Into<String>) -> Self {
        AccountDeletion {
            password: password.into(),
            confirm: "DELETE".to_string(),
        }
    }
}

/// Body of `/auth/login` and `/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Payload of `POST /auth/refresh`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub token: String,
}
