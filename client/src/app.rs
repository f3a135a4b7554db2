use std::sync::Arc;
use std::time::Duration;

use wenote_core::DEFAULT_PAGE_SIZE;

use crate::{
    error::Result,
    http::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT},
    state::NotesState,
    stores::{GamificationStore, UserStore},
    token::TokenStore,
    ui::Ui,
};

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: u32,
}

impl Default for AppOptions {
    fn default() -> Self {
        AppOptions {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Everything a front-end needs, built once at startup and passed around.
pub struct App {
    pub api: ApiClient,
    pub notes: NotesState,
    pub user: UserStore,
    pub gamification: GamificationStore,
}

impl App {
    pub fn new(options: &AppOptions, tokens: Arc<dyn TokenStore>, ui: Ui) -> Result<Self> {
        let api = ApiClient::new(
            &options.base_url,
            options.timeout,
            tokens,
            ui.notifier,
            ui.navigator,
        )?;

        Ok(App {
            notes: NotesState::new(api.clone(), ui.confirmer, options.page_size),
            user: UserStore::new(api.clone()),
            gamification: GamificationStore::new(api.clone()),
            api,
        })
    }
}
