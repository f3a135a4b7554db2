#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

pub mod api;
pub mod app;
pub mod error;
pub mod http;
pub mod single_flight;
pub mod state;
pub mod stores;
pub mod token;
pub mod ui;

#[cfg(test)]
mod test;

pub use app::{App, AppOptions};
pub use error::{ClientError, Result};
pub use http::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use single_flight::SingleFlight;
pub use state::NotesState;
pub use stores::{GamificationStore, GoalProgress, StreakDisplay, UserStore};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
pub use ui::{ConfirmPrompt, Confirmer, Level, Navigator, Notifier, Tone, Ui};
