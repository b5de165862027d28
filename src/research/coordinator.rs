use crate::{
    agents::{Critic, Planner, Researcher},
    types::{Finding, ResearchOutcome},
    utils::toml_config::{OrchestratorConfig, TaskFailurePolicy},
};

/// Phase of an orchestration run, reported in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Planning,
    Researching,
    Reporting,
    Done,
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RunPhase::Planning => "planning",
            RunPhase::Researching => "researching",
            RunPhase::Reporting => "reporting",
            RunPhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Sequences planner, researcher and critic for one goal.
pub struct ResearchOrchestrator {
    planner: Planner,
    researcher: Researcher,
    critic: Critic,
    settings: OrchestratorConfig,
}

impl ResearchOrchestrator {
    pub fn new(planner: Planner, researcher: Researcher, critic: Critic) -> Self {
        Self {
            planner,
            researcher,
            critic,
            settings: OrchestratorConfig::default(),
        }
    }

    pub fn with_settings(mut self, settings: OrchestratorConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Run plan → research → report → store for `goal`.
    ///
    /// Never fails: planning degrades to a fallback plan, tool failures become
    /// error descriptors in the findings, and store failures are dropped.
    pub async fn run(&self, goal: &str) -> ResearchOutcome {
        let run_id = self.researcher.run_id();
        tracing::info!(phase = %RunPhase::Planning, %run_id, goal, "research run started");

        let mut plan = self.planner.create_plan(goal).await;
        if let Some(max_tasks) = self.settings.max_tasks {
            if plan.len() > max_tasks {
                tracing::warn!(
                    planned = plan.len(),
                    max_tasks,
                    "plan exceeds task limit, truncating"
                );
                plan.truncate(max_tasks);
            }
        }

        tracing::info!(
            phase = %RunPhase::Researching,
            %run_id,
            tasks = plan.len(),
            "executing plan"
        );
        let mut findings: Vec<Finding> = Vec::new();
        for (index, task) in plan.iter().enumerate() {
            let task_findings = self.researcher.execute_task_or_descriptor(task).await;
            let failed = task_findings.iter().any(Finding::is_error);
            findings.extend(task_findings);

            if failed && self.settings.on_task_error == TaskFailurePolicy::Abort {
                tracing::warn!(
                    task = index + 1,
                    skipped = plan.len() - index - 1,
                    "task failed, skipping remaining tasks"
                );
                break;
            }
        }

        tracing::info!(
            phase = %RunPhase::Reporting,
            %run_id,
            findings = findings.len(),
            "scoring findings"
        );
        let report = self.critic.validate_findings(&findings);
        self.researcher.store_findings(&findings).await;

        tracing::info!(
            phase = %RunPhase::Done,
            %run_id,
            confidence = report.confidence_score,
            "research run finished"
        );

        ResearchOutcome {
            findings,
            report,
            plan,
        }
    }
}
