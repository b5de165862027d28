//! LLM Provider Clients and Abstractions
//!
//! The planner talks to a language model through the [`LLMClient`] trait. The
//! concrete client is chosen from configuration via [`Provider`], which keeps
//! provider details out of the agents and lets tests substitute a mock.
//!
//! # Example
//!
//! ```ignore
//! use research_hub::llm::Provider;
//!
//! let provider = Provider::OpenAICompatible {
//!     api_key,
//!     api_base: "https://api.groq.com/openai/v1".to_string(),
//!     model: "llama-3.3-70b-versatile".to_string(),
//!     temperature: 0.0,
//! };
//! let client = provider.create_client(reqwest::Client::new());
//! let reply = client.generate("What is 2+2?").await?;
//! ```

/// Core LLM client trait and provider selection.
pub mod client;
/// OpenAI-compatible chat-completions client.
pub mod openai;

pub use client::{LLMClient, Provider};
pub use openai::OpenAICompatibleClient;
