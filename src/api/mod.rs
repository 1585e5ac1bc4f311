//! HTTP client for the generative-language completion endpoint.
//!
//! The session layer only needs "prompt in, text out", so the seam is a single
//! [`CompletionClient`] trait. [`GeminiClient`] is the production transport.

use crate::error::ApiError;
use async_trait::async_trait;

mod client;

pub use client::GeminiClient;

/// One-shot completion interface used by the session controller.
///
/// This trait lets tests provide deterministic canned answers without network
/// calls while the production path uses [`GeminiClient`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}

