//! Seams between the client state and whatever presents it.
//!
//! The HTTP wrapper and the state containers never print or prompt
//! themselves; they report through these traits so a terminal front-end,
//! a GUI or a test harness can decide what a notification or a confirmation
//! looks like.

use std::sync::Arc;

/// How strongly a confirmation should be worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub tone: Tone,
}

impl ConfirmPrompt {
    pub fn info(message: impl Into<String>) -> Self {
        ConfirmPrompt {
            title: "Confirm".to_string(),
            message: message.into(),
            tone: Tone::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        ConfirmPrompt {
            title: "Warning".to_string(),
            message: message.into(),
            tone: Tone::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// Transient user-visible messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, level: Level, message: &str);

    fn success(&self, message: &str) {
        self.notify(Level::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(Level::Error, message);
    }
}

/// Asks the user to approve a destructive action.
pub trait Confirmer: Send + Sync {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// Sends the user back to the login entry point once the session is gone.
pub trait Navigator: Send + Sync {
    fn to_login(&self);
}

/// The three presentation seams, handed to [`crate::App::new`] together.
#[derive(Clone)]
pub struct Ui {
    pub notifier: Arc<dyn Notifier>,
    pub confirmer: Arc<dyn Confirmer>,
    pub navigator: Arc<dyn Navigator>,
}
