//! Configuration collaborators: secret lookup and upstream endpoint resolution.
//!
//! The handler reads the provider credential through the [`SecretStore`] seam
//! rather than touching the environment directly, so tests can substitute a
//! fixed (or absent) key without mutating process state.

/// Lookup capability for the provider credential.
///
/// Implementations must be cheap to call: the key is resolved fresh on every
/// inbound request, never cached by the handler.
pub trait SecretStore: Send + Sync {
    /// Return the OpenAI API key, or `None` when it is not configured.
    /// An empty or whitespace-only value counts as not configured.
    fn openai_api_key(&self) -> Option<String>;
}

/// Environment-backed secret store reading `OPENAI_API_KEY` at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecrets;

impl SecretStore for EnvSecrets {
    fn openai_api_key(&self) -> Option<String> {
        std::env::var("OPENAI_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Fixed-value secret store, mainly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticSecrets {
    key: Option<String>,
}

impl StaticSecrets {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }

    /// A store with no key configured.
    pub fn empty() -> Self {
        Self { key: None }
    }
}

impl SecretStore for StaticSecrets {
    fn openai_api_key(&self) -> Option<String> {
        self.key
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

/// Resolve the OpenAI base URL from environment or use the default public endpoint.
pub fn openai_base_url() -> String {
    std::env::var("OPENAI_BASE_URL")
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
}
