use crate::{
    llm::LLMClient,
    types::{Task, ToolKind},
};
use serde_json::Value;
use std::sync::Arc;

/// Planner agent that decomposes a research goal into tasks.
///
/// The planner never fails: any problem with the model call or its answer
/// degrades to a single web-search task over the whole goal.
pub struct Planner {
    llm: Arc<dyn LLMClient>,
}

impl Planner {
    pub fn new(llm: Arc<dyn LLMClient>) -> Self {
        Self { llm }
    }

    /// Create an ordered, non-empty research plan for `goal`.
    pub async fn create_plan(&self, goal: &str) -> Vec<Task> {
        let prompt = plan_prompt(goal);

        let response = match self.llm.generate(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "planning call failed, using fallback plan");
                return fallback_plan(goal);
            }
        };

        match parse_plan(&response, goal) {
            Some(tasks) => {
                tracing::info!(tasks = tasks.len(), model = %self.llm.model_name(), "plan created");
                tasks
            }
            None => {
                tracing::warn!(response = %response, "could not parse plan, using fallback plan");
                fallback_plan(goal)
            }
        }
    }
}

fn plan_prompt(goal: &str) -> String {
    format!(
        "Create a research plan for: {}. Return JSON with a 'tasks' list. \
         Each task needs 'tool' (arxiv or job_search) and 'description'.",
        goal
    )
}

/// The plan used whenever the model's answer is unusable.
pub fn fallback_plan(goal: &str) -> Vec<Task> {
    vec![Task::new(ToolKind::WebSearch, goal)]
}

/// Strip the first ```json fence, if any.
///
/// Takes the text between the first "```json" marker and the next "```"
/// (or the end of the text when the fence is never closed).
pub fn extract_json_block(response: &str) -> &str {
    let content = response.trim();
    match content.split_once("```json") {
        Some((_, rest)) => rest.split("```").next().unwrap_or(rest),
        None => content,
    }
}

/// Parse the model's answer into tasks; `None` means the fallback applies.
pub fn parse_plan(response: &str, goal: &str) -> Option<Vec<Task>> {
    let value: Value = serde_json::from_str(extract_json_block(response).trim()).ok()?;
    let tasks = value.get("tasks")?.as_array()?;

    if tasks.is_empty() {
        return None;
    }

    Some(tasks.iter().map(|task| Task::from_value(task, goal)).collect())
}
