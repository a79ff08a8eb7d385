use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Chat Completions role/content pair carried in the outbound request.
///
/// Only the `user` role is ever sent by this service, but the type keeps the
/// role explicit so the payload matches the API shape exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptMessage {
    /// "system" | "user" | "assistant"
    pub role: String,
    pub content: String,
}

impl PromptMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat Completions request (the subset this service sends).
///
/// Example:
/// {
///   "model": "gpt-3.5-turbo",
///   "messages": [{ "role": "user", "content": "..." }],
///   "max_tokens": 100
/// }
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
    pub max_tokens: u32,
}

/// Assistant message inside a completion choice.
///
/// `content` may be absent or null in tool-call responses; callers treat that
/// as an empty description rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[skip_serializing_none]
pub struct CompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// One element of the `choices` array in a Chat Completions response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

/// Chat Completions response (the subset this service reads).
///
/// `choices` is deliberately non-defaulted: an upstream body without the
/// field is malformed for our purposes and must fail the parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}
