use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::HeaderMap,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use blurbgen::config::SecretStore;
use blurbgen::server::build_router;
use blurbgen::util::AppState;
use http::StatusCode;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Canned response the stub upstream returns for every call.
#[derive(Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

impl UpstreamResponse {
    /// A well-formed Chat Completions success carrying the given content.
    pub fn completion(content: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: serde_json::json!({
                "choices": [ { "message": { "content": content } } ]
            }),
        }
    }

    pub fn error(status: StatusCode, body: serde_json::Value) -> Self {
        Self { status, body }
    }
}

#[derive(Clone)]
struct StubState {
    response: UpstreamResponse,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    auth_headers: Arc<Mutex<Vec<Option<String>>>>,
}

/// Stub OpenAI upstream serving `POST /chat/completions`.
///
/// Records every payload and Authorization header it sees so tests can assert
/// on the outbound contract (or on the absence of any call at all).
pub struct UpstreamStub {
    base_url: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    auth_headers: Arc<Mutex<Vec<Option<String>>>>,
    // Dropping the sender resolves the graceful-shutdown future.
    _shutdown: oneshot::Sender<()>,
}

impl UpstreamStub {
    pub async fn spawn(response: UpstreamResponse) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let auth_headers = Arc::new(Mutex::new(Vec::new()));

        let state = StubState {
            response,
            calls: calls.clone(),
            requests: requests.clone(),
            auth_headers: auth_headers.clone(),
        };

        let app = Router::new()
            .route("/chat/completions", post(stub_completions))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await
                .expect("stub server");
        });

        Self {
            base_url: format!("http://{addr}"),
            calls,
            requests,
            auth_headers,
            _shutdown: tx,
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<serde_json::Value> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.auth_headers.lock().expect("auth lock").clone()
    }
}

async fn stub_completions(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.calls.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().expect("requests lock").push(body);
    state.auth_headers.lock().expect("auth lock").push(
        headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
    (state.response.status, Json(state.response.body.clone()))
}

/// A running blurbgen server bound to an ephemeral port.
pub struct TestServer {
    base_url: String,
    client: reqwest::Client,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    /// Spawn the service pointed at `base_url` with the given secret source.
    pub async fn spawn(base_url: String, secrets: Arc<dyn SecretStore>) -> Self {
        let state = AppState::with_upstream(base_url, secrets);
        let app = build_router(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind app");
        let addr = listener.local_addr().expect("app addr");
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await
                .expect("app server");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            _shutdown: tx,
        }
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
    }
}

/// A minimal valid generation request body.
pub fn sample_generation_request() -> serde_json::Value {
    serde_json::json!({
        "productName": "Wireless Mouse",
        "keywords": "ergonomic, fast"
    })
}
