#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use easi_llm::{CompletionError, CompletionProvider, CompletionRequest};
use easi_mail::{ContactMailSettings, ContactRelay, MailError, Mailer, OutgoingEmail};
use easi_web::config::ServerConfig;
use easi_web::router::build_app_router;
use easi_web::state::AppState;

pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// How long a stalled fake waits; far beyond any request timeout.
pub const STALL: Duration = Duration::from_secs(3600);

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        site_base_url: "https://easi-as.test".to_string(),
        ..ServerConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// Records every email instead of sending it. Calls whose index is listed in
/// `fail_on` return an API error; calls listed in `stall_on` hang for
/// [`STALL`].
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub fail_on: Vec<usize>,
    pub stall_on: Vec<usize>,
}

impl RecordingMailer {
    pub fn failing_on(fail_on: Vec<usize>) -> Self {
        Self {
            fail_on,
            ..Self::default()
        }
    }

    pub fn stalling_on(stall_on: Vec<usize>) -> Self {
        Self {
            stall_on,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let index = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            sent.len() - 1
        };
        if self.stall_on.contains(&index) {
            tokio::time::sleep(STALL).await;
        }
        if self.fail_on.contains(&index) {
            return Err(MailError::Api {
                status: 422,
                body: "rejected".into(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Returns a canned reply (or error) after `delay` and records the requests
/// it received.
pub struct FakeCompletion {
    pub reply: Result<String, u16>,
    pub delay: Duration,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            delay: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replies only after [`STALL`].
    pub fn stalled() -> Self {
        Self {
            delay: STALL,
            ..Self::replying("too late")
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CompletionProvider for FakeCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(CompletionError::Api {
                status: *status,
                body: "upstream failure".into(),
            }),
        }
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// App with no mail transport and no completion provider.
pub fn build_test_app() -> Router {
    build_app_router(AppState::new(test_config()))
}

pub fn build_app_with_mailer(mailer: Arc<RecordingMailer>) -> Router {
    let relay = ContactRelay::new(mailer, Arc::new(ContactMailSettings::default()));
    build_app_router(AppState::new(test_config()).with_contact(relay))
}

pub fn build_app_with_completion(provider: Arc<FakeCompletion>) -> Router {
    build_app_router(AppState::new(test_config()).with_completions(provider))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
