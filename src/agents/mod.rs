//! Research agents.
//!
//! - [`Planner`] decomposes a goal into tasks through one model call
//! - [`Researcher`] runs each task against web or paper search and stores results
//! - [`Critic`] scores the collected findings with a pluggable [`ScoringPolicy`]
//!
//! The agents are sequenced by
//! [`ResearchOrchestrator`](crate::research::coordinator::ResearchOrchestrator).

pub mod critic;
pub mod planner;
pub mod researcher;

// Re-export commonly used types
pub use critic::{Critic, PresencePolicy, ScoringPolicy};
pub use planner::Planner;
pub use researcher::{ResearchLimits, Researcher};
