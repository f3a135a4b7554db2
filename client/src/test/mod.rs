#![allow(clippy::unwrap_used, clippy::panic)]

//! In-process backend and fake presentation seams for exercising the client
//! end to end over real HTTP.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header::AUTHORIZATION, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::{
    app::{App, AppOptions},
    token::{MemoryTokenStore, TokenStore},
    ui::{ConfirmPrompt, Confirmer, Level, Navigator, Notifier, Ui},
};

mod notes;

const API_PREFIX: &str = "/api/v1";

/// HS256 token whose only interesting claim is `exp`.
pub fn mint_token(exp: i64) -> String {
    encode(
        &Header::default(),
        &json!({"sub": "1", "exp": exp}),
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap()
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
}

#[derive(Default)]
struct BackendState {
    routes: HashMap<String, Canned>,
    requests: Vec<Recorded>,
    delays: HashMap<String, Duration>,
}

/// Scriptable stand-in for the REST backend. Unscripted routes answer with
/// a bare success envelope.
#[derive(Clone)]
pub struct MockBackend {
    url: String,
    state: Arc<Mutex<BackendState>>,
}

fn route_key(method: &str, path: &str) -> String {
    format!("{} {}", method, path)
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(BackendState::default()));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new().fallback(handle).with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let backend = MockBackend {
            url: format!("http://{}{}", addr, API_PREFIX),
            state,
        };

        backend.respond("GET", "/notes", json!({"list": [], "total": 0, "page": 1, "size": 20}));
        backend.respond("GET", "/notes/trash", json!({"list": [], "total": 0, "page": 1, "size": 20}));
        backend.respond("GET", "/notebooks", json!({"list": []}));
        backend.respond("GET", "/tags", json!({"list": []}));

        backend
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Success envelope carrying `data`.
    pub fn respond(&self, method: &str, path: &str, data: Value) {
        let body = json!({"code": 0, "message": "success", "data": data}).to_string();
        self.respond_raw(method, path, StatusCode::OK, body);
    }

    /// Failure envelope; 401 also sets the HTTP status like the backend does.
    pub fn fail(&self, method: &str, path: &str, code: i64, message: &str) {
        let status = if code == 401 {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::OK
        };
        let body = json!({"code": code, "message": message}).to_string();
        self.respond_raw(method, path, status, body);
    }

    pub fn respond_raw(&self, method: &str, path: &str, status: StatusCode, body: String) {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert(route_key(method, path), Canned { status, body });
    }

    pub fn delay(&self, method: &str, path: &str, delay: Duration) {
        self.state
            .lock()
            .unwrap()
            .delays
            .insert(route_key(method, path), delay);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state.lock().unwrap().requests.clear();
    }
}

async fn handle(
    State(state): State<Arc<Mutex<BackendState>>>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();
    let key = route_key(method.as_str(), &path);

    let (canned, delay) = {
        let mut state = state.lock().unwrap();
        state.requests.push(Recorded {
            method: method.to_string(),
            path,
            query,
            authorization: headers
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_slice(&body).ok(),
        });
        (state.routes.get(&key).cloned(), state.delays.get(&key).copied())
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    match canned {
        Some(canned) => (
            canned.status,
            [("content-type", "application/json")],
            canned.body,
        )
            .into_response(),
        None => Json(json!({"code": 0, "message": "success"})).into_response(),
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(Level, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, m)| m)
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(level, _)| *level == Level::Success)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: Level, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

/// Answers every prompt with the configured choice and remembers the prompts.
pub struct ScriptedConfirmer {
    answer: AtomicBool,
    prompts: Mutex<Vec<ConfirmPrompt>>,
}

impl Default for ScriptedConfirmer {
    fn default() -> Self {
        Self {
            answer: AtomicBool::new(true),
            prompts: Mutex::new(vec![]),
        }
    }
}

impl ScriptedConfirmer {
    pub fn answer(&self, yes: bool) {
        self.answer.store(yes, Ordering::SeqCst);
    }

    pub fn prompts(&self) -> Vec<ConfirmPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.answer.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    login_redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn login_redirects(&self) -> usize {
        self.login_redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn to_login(&self) {
        self.login_redirects.fetch_add(1, Ordering::SeqCst);
    }
}

/// A fully wired [`App`] talking to a fresh [`MockBackend`].
pub struct TestApp {
    pub backend: MockBackend,
    pub app: App,
    pub tokens: Arc<MemoryTokenStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub confirmer: Arc<ScriptedConfirmer>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestApp {
    /// Signed in with a token valid for a week.
    pub async fn new() -> Self {
        Self::with_token(Some(mint_token(now() + 7 * 24 * 3600))).await
    }

    pub async fn with_token(token: Option<String>) -> Self {
        let backend = MockBackend::start().await;
        let tokens = Arc::new(MemoryTokenStore::new(token));
        let notifier = Arc::new(RecordingNotifier::default());
        let confirmer = Arc::new(ScriptedConfirmer::default());
        let navigator = Arc::new(RecordingNavigator::default());

        let options = AppOptions {
            base_url: backend.url().to_string(),
            timeout: Duration::from_secs(5),
            ..Default::default()
        };
        let ui = Ui {
            notifier: notifier.clone(),
            confirmer: confirmer.clone(),
            navigator: navigator.clone(),
        };
        let app = App::new(&options, tokens.clone() as Arc<dyn TokenStore>, ui).unwrap();

        Self {
            backend,
            app,
            tokens,
            notifier,
            confirmer,
            navigator,
        }
    }
}

pub fn note_json(id: u64, notebook_id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "user_id": 1,
        "notebook_id": notebook_id,
        "title": title,
        "content": "",
        "is_pinned": false,
        "is_starred": false,
        "tags": []
    })
}
