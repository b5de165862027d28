//! LLM Client abstraction and provider selection
//!
//! The planner only needs single-prompt completions, so the trait is kept
//! narrow. Every provider that speaks the OpenAI chat-completions dialect
//! (Groq, OpenAI, OpenRouter, a local llama.cpp server) is served by
//! [`OpenAICompatibleClient`](super::openai::OpenAICompatibleClient).

use crate::types::Result;
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion from a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Provider enum for runtime selection
#[derive(Debug, Clone)]
pub enum Provider {
    /// Any endpoint implementing `POST {api_base}/chat/completions`
    ///
    /// # Example
    /// ```rust,ignore
    /// let provider = Provider::OpenAICompatible {
    ///     api_key: "gsk_...".to_string(),
    ///     api_base: "https://api.groq.com/openai/v1".to_string(),
    ///     model: "llama-3.3-70b-versatile".to_string(),
    ///     temperature: 0.0,
    /// };
    /// ```
    OpenAICompatible {
        api_key: String,
        api_base: String,
        model: String,
        temperature: f32,
    },
}

impl Provider {
    /// Create a client instance for this provider, sharing `http`'s connection pool
    pub fn create_client(&self, http: reqwest::Client) -> Box<dyn LLMClient> {
        match self {
            Provider::OpenAICompatible {
                api_key,
                api_base,
                model,
                temperature,
            } => Box::new(super::openai::OpenAICompatibleClient::new(
                http,
                api_key.clone(),
                api_base.clone(),
                model.clone(),
                *temperature,
            )),
        }
    }

    /// Get a human-readable name for this provider
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAICompatible { .. } => "OpenAI-compatible",
        }
    }
}
