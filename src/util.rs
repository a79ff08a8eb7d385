use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{openai_base_url, EnvSecrets, SecretStore};

/// Initialize dotenv and structured tracing based on RUST_LOG.
///
/// - Supports explicit env file paths via ENV_FILE, ENVFILE, DOTENV_PATH
/// - Falls back to default .env discovery in the working directory
/// - Logs the source used
pub fn init_tracing() {
    let mut env_source: String = "none".into();
    for key in ["ENV_FILE", "ENVFILE", "DOTENV_PATH"] {
        if let Ok(p) = std::env::var(key) {
            let p = p.trim();
            if !p.is_empty()
                && std::path::Path::new(p).is_file()
                && dotenvy::from_filename(p).is_ok()
            {
                env_source = format!("{p} ({key})");
                break;
            }
        }
    }

    if env_source == "none" && dotenvy::dotenv().is_ok() {
        env_source = ".env".into();
    }

    // Initialize tracing (respects RUST_LOG potentially provided by the env file)
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".into());
    let subscriber = fmt().with_env_filter(EnvFilter::new(filter)).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    tracing::info!("Environment loaded from: {}", env_source);
}

/// Get the bind address for the HTTP server from env or default to 0.0.0.0:8088.
pub fn env_bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8088".into())
}

/// Shared application state used by the HTTP server and handlers.
///
/// Connection reuse lives inside `reqwest::Client`; the handlers themselves
/// keep no mutable state between calls.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Upstream base URL, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Credential lookup, read fresh on every inbound call.
    pub secrets: Arc<dyn SecretStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            http: build_http_client_from_env(),
            base_url: openai_base_url(),
            secrets: Arc::new(EnvSecrets),
        }
    }
}

impl AppState {
    /// Create state pointed at an explicit upstream with an explicit secret
    /// source. Used by tests to substitute both collaborators.
    pub fn with_upstream(base_url: impl Into<String>, secrets: Arc<dyn SecretStore>) -> Self {
        Self {
            http: build_http_client_from_env(),
            base_url: base_url.into(),
            secrets,
        }
    }
}

/// Build an HTTP client honoring proxy and timeout environment variables.
///
/// Environment:
/// - BLURBGEN_NO_PROXY = 1|true|yes|on    -> disable all proxies
/// - BLURBGEN_PROXY_URL = <url>           -> proxy for all schemes
/// - HTTP_PROXY / HTTPS_PROXY             -> scheme-specific proxies
/// - BLURBGEN_HTTP_TIMEOUT_SECONDS        -> overall request timeout (u64)
pub fn build_http_client_from_env() -> reqwest::Client {
    let mut builder = reqwest::Client::builder();

    if let Ok(secs) = std::env::var("BLURBGEN_HTTP_TIMEOUT_SECONDS") {
        if let Ok(n) = secs.trim().parse::<u64>() {
            builder = builder.timeout(std::time::Duration::from_secs(n));
        }
    }

    let no_proxy = std::env::var("BLURBGEN_NO_PROXY")
        .map(|v| v.trim().to_ascii_lowercase())
        .map(|v| v == "1" || v == "true" || v == "yes" || v == "on")
        .unwrap_or(false);

    if no_proxy {
        builder = builder.no_proxy();
    } else {
        if let Ok(url) = std::env::var("BLURBGEN_PROXY_URL") {
            let u = url.trim();
            if !u.is_empty() {
                if let Ok(p) = reqwest::Proxy::all(u) {
                    builder = builder.proxy(p);
                }
            }
        }
        if let Ok(http_p) = std::env::var("HTTP_PROXY").or_else(|_| std::env::var("http_proxy")) {
            let u = http_p.trim();
            if !u.is_empty() {
                if let Ok(p) = reqwest::Proxy::http(u) {
                    builder = builder.proxy(p);
                }
            }
        }
        if let Ok(https_p) = std::env::var("HTTPS_PROXY").or_else(|_| std::env::var("https_proxy"))
        {
            let u = https_p.trim();
            if !u.is_empty() {
                if let Ok(p) = reqwest::Proxy::https(u) {
                    builder = builder.proxy(p);
                }
            }
        }
    }

    // User-Agent for observability
    builder = builder.user_agent(format!("blurbgen/{}", env!("CARGO_PKG_VERSION")));

    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}

/// Build a CORS layer from environment variables.
///
/// CORS_ALLOWED_ORIGINS: "*" or comma-separated origins; defaults to Any,
/// matching prior behavior when not configured. Methods and headers are
/// always permissive.
pub fn cors_layer_from_env() -> tower_http::cors::CorsLayer {
    let mut layer = tower_http::cors::CorsLayer::new()
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    match std::env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) if origins.trim() != "*" => {
            let vals: Vec<http::HeaderValue> = origins
                .split(',')
                .filter_map(|p| http::HeaderValue::from_str(p.trim()).ok())
                .collect();
            if vals.is_empty() {
                layer = layer.allow_origin(tower_http::cors::Any);
            } else {
                layer = layer.allow_origin(tower_http::cors::AllowOrigin::list(vals));
            }
        }
        _ => {
            layer = layer.allow_origin(tower_http::cors::Any);
        }
    }

    layer
}
