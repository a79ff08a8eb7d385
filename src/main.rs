use blurbgen::config::openai_base_url;
use blurbgen::server::build_router;
use blurbgen::util::{env_bind_addr, init_tracing, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let state = AppState::default();

    // Startup announcement: whether a credential is present and where calls go.
    let key_configured = state.secrets.openai_api_key().is_some();
    if key_configured {
        tracing::info!("OpenAI API key configured; upstream: {}", openai_base_url());
    } else {
        tracing::warn!(
            "OPENAI_API_KEY not set; /generate will answer 500 until it is configured"
        );
    }

    let addr = env_bind_addr();
    tracing::info!("Blurbgen listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
