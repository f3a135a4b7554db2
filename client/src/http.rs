use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use wenote_core::{Envelope, TokenResponse, CODE_SUCCESS, CODE_UNAUTHORIZED};

use crate::{
    error::{ClientError, Result},
    single_flight::SingleFlight,
    token::{needs_refresh, TokenStore},
    ui::{Navigator, Notifier},
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Generous enough for the AI generation endpoints.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(40);

const FALLBACK_ERROR: &str = "Request failed";
const NETWORK_ERROR: &str = "Network error";

/// Thin wrapper over `reqwest` that speaks the backend's envelope protocol.
///
/// Every request carries the stored bearer token. A token that is about to
/// expire is refreshed first, with concurrent requests sharing a single
/// refresh call. Responses resolve to the envelope's `data` when `code` is 0;
/// anything else is reported through the [`Notifier`] and returned as an
/// error, and a 401 also ends the session.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    refresh: SingleFlight<Option<String>>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        tokens: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: base_url.trim_end_matches('/').to_string(),
                tokens,
                notifier,
                navigator,
                refresh: SingleFlight::new(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.inner.tokens
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.inner.notifier
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, None, None).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = serde_json::to_value(query)?;
        self.send(Method::GET, path, Some(query), None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.send(Method::POST, path, None, Some(body)).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::POST, path, None, None).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.send(Method::PATCH, path, None, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.send(Method::PUT, path, None, Some(body)).await
    }

    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::PUT, path, None, None).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::DELETE, path, None, None).await
    }

    pub async fn delete_with<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.send(Method::DELETE, path, None, Some(body)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<Value>,
        body: Option<Value>,
    ) -> Result<T> {
        debug!("{} {}", method, path);

        let mut request = self.inner.http.request(method, self.url(path));
        if let Some(token) = self.bearer_token().await {
            request = request.bearer_auth(token);
        }
        if let Some(query) = query {
            request = request.query(&query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.inner.notifier.error(NETWORK_ERROR);
                return Err(ClientError::Network(e));
            }
        };

        let envelope = self.read_envelope(response).await?;
        self.unwrap_envelope(envelope)
    }

    async fn read_envelope(&self, response: Response) -> Result<Envelope<Value>> {
        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.inner.notifier.error(NETWORK_ERROR);
                return Err(ClientError::Network(e));
            }
        };

        // The backend pairs some codes with a matching HTTP status, so the
        // body is trusted over the status line.
        match serde_json::from_slice::<Envelope<Value>>(&bytes) {
            Ok(envelope) => Ok(envelope),
            Err(_) => {
                self.inner.notifier.error(FALLBACK_ERROR);
                Err(ClientError::UnexpectedResponse {
                    status,
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                })
            }
        }
    }

    fn unwrap_envelope<T: DeserializeOwned>(&self, envelope: Envelope<Value>) -> Result<T> {
        if envelope.code == CODE_SUCCESS {
            let data = envelope.data.unwrap_or(Value::Null);
            return Ok(serde_json::from_value(data)?);
        }

        let message = if envelope.message.is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            envelope.message
        };
        self.inner.notifier.error(&message);

        if envelope.code == CODE_UNAUTHORIZED {
            if let Err(e) = self.inner.tokens.clear() {
                warn!("Failed to clear stored token: {}", e);
            }
            self.inner.navigator.to_login();
            return Err(ClientError::Unauthenticated { message });
        }

        Err(ClientError::Api {
            code: envelope.code,
            message,
        })
    }

    /// Stored token, refreshed first when it is close to expiry.
    async fn bearer_token(&self) -> Option<String> {
        let token = self.inner.tokens.load()?;

        if !needs_refresh(&token, chrono::Utc::now().timestamp()) {
            return Some(token);
        }

        let client = self.clone();
        let current = token.clone();
        let refreshed = self
            .inner
            .refresh
            .run(move || async move { client.exchange_token(current).await })
            .await;

        Some(refreshed.unwrap_or(token))
    }

    /// Trades `current` for a fresh token and persists it. Failures are
    /// logged, never surfaced: the caller falls back to `current`.
    async fn exchange_token(&self, current: String) -> Option<String> {
        debug!("Refreshing session token");

        match self.request_refresh(&current).await {
            Ok(fresh) => {
                if let Err(e) = self.inner.tokens.save(&fresh) {
                    warn!("Refreshed token could not be stored: {}", e);
                }
                Some(fresh)
            }
            Err(e) => {
                warn!("Token refresh failed, keeping current token: {}", e);
                None
            }
        }
    }

    /// `POST /auth/refresh`, outside the notifying request path.
    pub async fn request_refresh(&self, current: &str) -> Result<String> {
        let response = self
            .inner
            .http
            .post(self.url("/auth/refresh"))
            .bearer_auth(current)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let envelope: Envelope<TokenResponse> = serde_json::from_slice(&bytes).map_err(|_| {
            ClientError::UnexpectedResponse {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }
        })?;

        match envelope.data {
            Some(data) if envelope.code == CODE_SUCCESS => Ok(data.token),
            _ => Err(ClientError::Api {
                code: envelope.code,
                message: envelope.message,
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }
}
