//! Multi-Agent Research Coordination
//!
//! This module sequences the research agents for a goal and owns the
//! long-lived clients they share.
//!
//! # Architecture
//!
//! - [`coordinator::ResearchOrchestrator`] - Planner → Researcher → Critic for one goal
//! - [`pool::ResourcePool`] - Shared LLM, search and store handles, reused across runs
//! - [`session`] - Entry points that check credentials before anything runs
//!
//! # Usage
//!
//! ```ignore
//! use research_hub::research::session;
//!
//! let outcome = session::run("Latest AI trends in Healthcare", &credentials, &config).await?;
//!
//! println!("confidence: {}", outcome.report.confidence_score);
//! for finding in &outcome.findings {
//!     println!("{:?}", finding);
//! }
//! ```
//!
//! # Research Workflow
//!
//! 1. **Planning** - One model call decomposes the goal into tasks
//! 2. **Researching** - Tasks run strictly in order against web or paper search
//! 3. **Reporting** - The critic scores all findings together
//! 4. **Storing** - Findings are written to the store, best-effort

/// Orchestration of one research run.
pub mod coordinator;
/// Shared client handles with explicit lifecycle.
pub mod pool;
/// Credential-checked entry points.
pub mod session;

pub use coordinator::{ResearchOrchestrator, RunPhase};
pub use pool::ResourcePool;
pub use session::ResearchSession;
