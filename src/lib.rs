#![forbid(unsafe_code)]
#![doc = r#"
Blurbgen

Generate short, catchy product descriptions by forwarding a templated prompt
to the OpenAI Chat Completions endpoint.

Crate highlights
- Library: pure pipeline via `generate_description(&Client, &str, &str, &GenerationRequest)`.
- HTTP server (in `server`): `POST /generate` (forwards to `OPENAI_BASE_URL`) and `GET /status`.
- Models: minimal but robust models for the generation API and the Chat Completions upstream.

Modules
- `models`: Data structures for inbound generation calls and the upstream API.
- `generator`: Prompt templating, the upstream call, and response extraction.
- `config`: Secret lookup and upstream endpoint resolution.
- `server`: Axum router/handlers (the binary uses this).
- `util`: Shared helpers (tracing, env, HTTP client, CORS).

Note: Keep the upstream payload aligned with OpenAI docs; only the documented
subset of the Chat Completions response is consumed here.
"#]

pub mod config;
pub mod generator;
pub mod models;
pub mod server;
pub mod util;

// Re-export the primary generation function for ergonomic library use.
pub use crate::generator::{build_prompt, generate_description, GenerateError};

// Re-export model namespaces for convenience (downstream users can do `use blurbgen::generate`).
pub use crate::models::{completion, generate};
