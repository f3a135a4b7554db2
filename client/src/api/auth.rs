use wenote_core::{Credentials, LoginResponse, User};

use crate::{error::Result, http::ApiClient};

impl ApiClient {
    /// Exchanges credentials for a session token and stores it.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let response: LoginResponse = self.post("/auth/login", credentials).await?;
        self.tokens().save(&response.token)?;
        Ok(response)
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<User> {
        self.post("/auth/register", credentials).await
    }
}
