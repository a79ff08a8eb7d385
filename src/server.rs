use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;

use crate::generator::{generate_description, GenerateError};
use crate::models::generate::{GenerationRequest, GenerationResult};
use crate::util::{cors_layer_from_env, AppState};

/// Caller-facing body when the provider credential is missing.
pub const CONFIG_ERROR_BODY: &str = "OpenAI API Key is not configured in User Secrets.";
/// Caller-facing body when the upstream answered with a non-success status.
pub const API_ERROR_BODY: &str = "Failed to generate description due to an API error.";
/// Caller-facing body for every other failure.
pub const INTERNAL_ERROR_BODY: &str = "An internal server error occurred.";

/// Build the Axum router with `/status` and `/generate`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status))
        .route("/generate", post(generate))
        .with_state(state)
        .layer(cors_layer_from_env())
}

/// Service status endpoint to expose version and available routes.
async fn status() -> impl IntoResponse {
    let routes = vec!["/status", "/generate"];
    Json(serde_json::json!({
        "name": "blurbgen",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": routes
    }))
}

/// Generate a product description via the Chat Completions upstream.
///
/// All failure paths collapse to a fixed plain-text 500 body; upstream error
/// detail and exception messages go to the operational log only.
async fn generate(State(state): State<AppState>, Json(req): Json<GenerationRequest>) -> Response {
    let api_key = match state.secrets.openai_api_key() {
        Some(k) => k,
        None => {
            return (StatusCode::INTERNAL_SERVER_ERROR, CONFIG_ERROR_BODY).into_response();
        }
    };

    match generate_description(&state.http, &state.base_url, &api_key, &req).await {
        Ok(description) => Json(GenerationResult { description }).into_response(),
        Err(GenerateError::MissingApiKey) => {
            (StatusCode::INTERNAL_SERVER_ERROR, CONFIG_ERROR_BODY).into_response()
        }
        Err(GenerateError::Upstream { status, body }) => {
            tracing::error!(%status, "OpenAI API error: {}", body);
            (StatusCode::INTERNAL_SERVER_ERROR, API_ERROR_BODY).into_response()
        }
        Err(e) => {
            tracing::error!("generation failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
        }
    }
}
