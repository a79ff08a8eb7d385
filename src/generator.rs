//! Core generation pipeline: template the prompt, call the Chat Completions
//! endpoint once, and extract the description from the response.
//!
//! The pipeline is a free function over an injected `reqwest::Client` and base
//! URL so the HTTP transport and upstream location are substitutable in tests.
//! All failure modes are expressed as [`GenerateError`] variants; nothing here
//! panics on upstream misbehavior.

use crate::models::completion::{CompletionRequest, CompletionResponse, PromptMessage};
use crate::models::generate::GenerationRequest;
use http::StatusCode;
use thiserror::Error;

/// Model sent upstream. Treated as a constant, not an invariant; see the
/// crate docs before externalizing it.
pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo";

/// Output token cap for every generation call.
pub const MAX_OUTPUT_TOKENS: u32 = 100;

/// Failure taxonomy for one generation attempt.
///
/// The server maps each variant to a fixed caller-facing message; the detail
/// carried here is for server-side logs only and must never be echoed back.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Credential missing or blank; detected before any network activity.
    #[error("OpenAI API key is not configured")]
    MissingApiKey,

    /// Upstream answered with a non-success status. `body` is the best-effort
    /// read of the response body (empty when the read itself failed).
    #[error("upstream returned {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    /// Network-level failure talking to the upstream.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Upstream replied 2xx but the body did not carry the expected shape.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Interpolate the fixed prompt template.
///
/// No escaping or sanitization is applied to the interpolated values beyond
/// what the JSON encoder performs on the outbound payload.
pub fn build_prompt(req: &GenerationRequest) -> String {
    format!(
        "Write a short, catchy, and professional product description for a \"{}\" that highlights these keywords: \"{}\".",
        req.product_name, req.keywords
    )
}

/// Build the outbound Chat Completions payload for one generation request.
pub fn completion_request(req: &GenerationRequest) -> CompletionRequest {
    CompletionRequest {
        model: COMPLETION_MODEL.to_string(),
        messages: vec![PromptMessage::user(build_prompt(req))],
        max_tokens: MAX_OUTPUT_TOKENS,
    }
}

/// Run one generation attempt against `{base_url}/chat/completions`.
///
/// Exactly one upstream POST is issued; there is no retry on any path. On
/// success the returned description is `choices[0].message.content` with
/// surrounding whitespace trimmed, defaulting to an empty string when the
/// content field is absent or null. A missing or empty `choices` array is a
/// [`GenerateError::MalformedResponse`].
pub async fn generate_description(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    req: &GenerationRequest,
) -> Result<String, GenerateError> {
    if api_key.trim().is_empty() {
        return Err(GenerateError::MissingApiKey);
    }

    let url = format!("{}/chat/completions", base_url.trim_end_matches('/'));
    let payload = completion_request(req);

    let resp = client
        .post(&url)
        .header(http::header::CONTENT_TYPE, "application/json")
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        // Body read is best-effort; a failed read still surfaces the status.
        let body = resp.text().await.unwrap_or_default();
        return Err(GenerateError::Upstream { status, body });
    }

    let body = resp.text().await?;
    let parsed: CompletionResponse = serde_json::from_str(&body)
        .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

    let content = parsed
        .choices
        .first()
        .ok_or_else(|| GenerateError::MalformedResponse("empty choices array".to_string()))?
        .message
        .content
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_string();

    Ok(content)
}
