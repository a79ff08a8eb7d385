//! Data models for the generation API and the Chat Completions upstream.
//!
//! This module groups two submodules:
//! - `generate`: Types for the inbound generation endpoint (caller-facing).
//! - `completion`: Types for the subset of the OpenAI Chat Completions API
//!   this service sends and reads back.
//!
//! The pipeline that turns a `generate::GenerationRequest` into a
//! `completion::CompletionRequest` and extracts the description is
//! implemented in `crate::generator`.

pub mod completion;
pub mod generate;

// Optional convenience re-exports for downstream users.
// These allow importing commonly-used types directly from `blurbgen::models::*`.
pub use completion::{
    CompletionChoice, CompletionMessage, CompletionRequest, CompletionResponse, PromptMessage,
};
pub use generate::{GenerationRequest, GenerationResult};
