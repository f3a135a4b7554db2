use tracing::{error, warn};
use wenote_core::{AccountDeletion, Credentials, PasswordChange, ProfileUpdate, User};

use crate::{
    error::{ClientError, Result},
    http::ApiClient,
};

/// The signed-in user and their persisted session token.
pub struct UserStore {
    api: ApiClient,
    user: Option<User>,
}

impl UserStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api, user: None }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<String> {
        self.api.tokens().load()
    }

    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.api.tokens().save(token)
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Signs in and keeps the returned profile, fetching it if the login
    /// response did not carry one.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<()> {
        let response = self.api.login(credentials).await?;

        match response.user {
            Some(user) => self.user = Some(user),
            None => self.fetch_user().await,
        }

        Ok(())
    }

    /// Loads the profile when a token is present. Failures are logged only.
    pub async fn fetch_user(&mut self) {
        if self.token().is_none() {
            return;
        }

        match self.api.me().await {
            Ok(user) => self.user = Some(user),
            Err(e) => error!("Failed to fetch user: {}", e),
        }
    }

    /// Applies `update` and adopts the server's copy of the profile.
    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> Result<User> {
        let user = self.api.update_me(update).await?;
        self.user = Some(user.clone());
        Ok(user)
    }

    pub async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        if self.token().is_none() {
            return Err(ClientError::NotSignedIn);
        }

        self.api
            .change_password(&PasswordChange {
                current_password: current.to_string(),
                new_password: new.to_string(),
            })
            .await
    }

    /// Deletes the account for good and ends the session.
    pub async fn delete_account(&mut self, password: &str) -> Result<()> {
        self.api
            .delete_account(&AccountDeletion::new(password))
            .await?;
        self.logout();
        Ok(())
    }

    /// Forgets the user and the token, whatever the server thinks.
    pub fn logout(&mut self) {
        self.user = None;
        if let Err(e) = self.api.tokens().clear() {
            warn!("Failed to clear stored token: {}", e);
        }
    }
}
