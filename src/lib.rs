//! # research-hub - Multi-Agent Research Assistant
//!
//! A small pipeline of cooperating agents: a planner turns a free-text goal
//! into search tasks, a researcher runs them against web search (Serper) and
//! paper search (arXiv) and stores what it finds (Astra DB), and a critic
//! scores the result.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use research_hub::{Credentials, ResearchConfig, research::session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ResearchConfig::load_or_default("research.toml")?;
//!     let credentials = Credentials::from_env(&config);
//!
//!     let outcome = session::run("Latest AI trends in Healthcare", &credentials, &config).await?;
//!     println!("{}", serde_json::to_string_pretty(&outcome)?);
//!     Ok(())
//! }
//! ```
//!
//! ### Custom components
//!
//! ```rust,ignore
//! use research_hub::{ResourcePool, db::MemoryStore};
//! use std::sync::Arc;
//!
//! let pool = ResourcePool::from_parts(llm, web, papers, Arc::new(MemoryStore::new()))
//!     .with_scoring(Arc::new(my_policy));
//! let outcome = pool.orchestrator()?.run("graph databases").await;
//! ```
//!
//! ## Modules
//!
//! - [`agents`] - Planner, researcher and critic
//! - [`db`] - Finding stores (Astra DB, memory)
//! - [`llm`] - LLM client implementations
//! - [`research`] - Orchestrator, resource pool and session entry points
//! - [`tools`] - Web and paper search adapters
//! - [`types`] - Tasks, findings, reports and errors
//! - [`utils`] - Configuration and credentials

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// Research agents (planner, researcher, critic).
pub mod agents;
/// Command-line interface definitions.
pub mod cli;
/// Finding persistence backends.
pub mod db;
/// LLM provider clients and abstractions.
pub mod llm;
/// Orchestration of research runs.
pub mod research;
/// External search tools (web, arXiv).
pub mod tools;
/// Core types (tasks, findings, reports, errors).
pub mod types;
/// Configuration utilities (TOML, credentials).
pub mod utils;

// Re-export commonly used types
pub use agents::{Critic, Planner, Researcher, ScoringPolicy};
pub use llm::{LLMClient, Provider};
pub use research::{ResearchOrchestrator, ResearchSession, ResourcePool};
pub use types::{AppError, Finding, Report, ResearchOutcome, Result, Task, ToolKind};
pub use utils::{Credentials, ResearchConfig};
