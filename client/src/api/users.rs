use wenote_core::{AccountDeletion, PasswordChange, ProfileUpdate, User};

use crate::{error::Result, http::ApiClient};

impl ApiClient {
    pub async fn me(&self) -> Result<User> {
        self.get("/users/me").await
    }

    pub async fn update_me(&self, update: &ProfileUpdate) -> Result<User> {
        self.patch("/users/me", update).await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<()> {
        self.post("/users/me/password", change).await
    }

    pub async fn delete_account(&self, deletion: &AccountDeletion) -> Result<()> {
        self.delete_with("/users/me", deletion).await
    }
}
