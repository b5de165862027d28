//! Configuration utilities.
//!
//! - [`toml_config`] - `research.toml` loading, defaults and validation
//! - [`credentials`] - API keys resolved from flags and the environment

pub mod credentials;
pub mod toml_config;

pub use credentials::Credentials;
pub use toml_config::{ResearchConfig, StoreKind, TaskFailurePolicy};
