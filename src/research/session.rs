//! Invocation surface: run research for a goal with explicit credentials.

use super::pool::{self, ResourcePool};
use crate::{
    agents::Planner,
    types::{AppError, ResearchOutcome, Result, Task},
    utils::{credentials::Credentials, toml_config::ResearchConfig},
};
use std::sync::Arc;

/// A pool kept alive for several runs.
pub struct ResearchSession {
    pool: ResourcePool,
}

impl ResearchSession {
    /// Check credentials and initialize the shared clients
    pub fn start(config: &ResearchConfig, credentials: &Credentials) -> Result<Self> {
        Ok(Self {
            pool: ResourcePool::init(config, credentials)?,
        })
    }

    pub fn from_pool(pool: ResourcePool) -> Self {
        Self { pool }
    }

    /// Run the full pipeline for `goal`
    pub async fn run(&self, goal: &str) -> Result<ResearchOutcome> {
        validate_goal(goal)?;
        Ok(self.pool.orchestrator()?.run(goal).await)
    }

    /// Only plan `goal`, without researching it
    pub async fn plan(&self, goal: &str) -> Result<Vec<Task>> {
        validate_goal(goal)?;
        Ok(self.pool.planner()?.create_plan(goal).await)
    }

    /// Close the pool; later runs on this session fail
    pub fn shutdown(&self) {
        self.pool.shutdown();
    }
}

fn validate_goal(goal: &str) -> Result<()> {
    if goal.trim().is_empty() {
        return Err(AppError::InvalidInput("research goal is empty".to_string()));
    }
    Ok(())
}

/// Run one research pass: check preconditions, build clients, run, tear down.
///
/// Missing credentials and an empty goal are reported before any external
/// call is made. Every other failure is absorbed by the pipeline.
pub async fn run(
    goal: &str,
    credentials: &Credentials,
    config: &ResearchConfig,
) -> Result<ResearchOutcome> {
    validate_goal(goal)?;
    let session = ResearchSession::start(config, credentials)?;
    let outcome = session.run(goal).await;
    session.shutdown();
    outcome
}

/// Produce a plan for `goal`; only the language-model key is required.
pub async fn plan(
    goal: &str,
    credentials: &Credentials,
    config: &ResearchConfig,
) -> Result<Vec<Task>> {
    validate_goal(goal)?;
    if credentials
        .language_model_key
        .as_deref()
        .is_none_or(|k| k.trim().is_empty())
    {
        return Err(AppError::MissingCredentials(vec![
            config.llm.api_key_env.clone(),
        ]));
    }

    let http = pool::http_client(config)?;
    let llm = pool::llm_provider(config, credentials).create_client(http);
    Ok(Planner::new(Arc::from(llm)).create_plan(goal).await)
}
