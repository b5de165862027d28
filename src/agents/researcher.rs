use crate::{
    db::{FindingStore, StoredFinding},
    tools::{PaperSearch, ToolError, WebSearch, arxiv::DEFAULT_MAX_PAPERS, search::DEFAULT_MAX_RESULTS},
    types::{Finding, FindingKind, ResearchRecord, Task, ToolKind},
};
use std::sync::Arc;
use uuid::Uuid;

/// Summary length kept for papers, in characters.
pub const DEFAULT_SUMMARY_CHARS: usize = 200;

/// Per-tool result limits used by the researcher.
#[derive(Debug, Clone, Copy)]
pub struct ResearchLimits {
    pub web_results: usize,
    pub paper_results: usize,
    pub summary_chars: usize,
}

impl Default for ResearchLimits {
    fn default() -> Self {
        Self {
            web_results: DEFAULT_MAX_RESULTS,
            paper_results: DEFAULT_MAX_PAPERS,
            summary_chars: DEFAULT_SUMMARY_CHARS,
        }
    }
}

/// Researcher agent: executes tasks against the search tools and persists
/// what it found.
pub struct Researcher {
    web: Arc<dyn WebSearch>,
    papers: Arc<dyn PaperSearch>,
    store: Arc<dyn FindingStore>,
    limits: ResearchLimits,
    run_id: Uuid,
}

impl Researcher {
    pub fn new(
        web: Arc<dyn WebSearch>,
        papers: Arc<dyn PaperSearch>,
        store: Arc<dyn FindingStore>,
        limits: ResearchLimits,
    ) -> Self {
        Self {
            web,
            papers,
            store,
            limits,
            run_id: Uuid::new_v4(),
        }
    }

    /// Identifier attached to every document this researcher stores
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Execute one task with the tool it selects.
    pub async fn execute_task(&self, task: &Task) -> Result<Vec<Finding>, ToolError> {
        tracing::info!(tool = %task.tool, description = %task.description, "executing task");

        let records = match task.tool {
            ToolKind::PaperSearch => self
                .papers
                .search(&task.description, self.limits.paper_results)
                .await?
                .into_iter()
                .take(self.limits.paper_results)
                .map(|paper| ResearchRecord {
                    kind: FindingKind::Paper,
                    title: paper.title,
                    link: paper.entry_id,
                    summary: truncate_chars(&paper.summary, self.limits.summary_chars),
                })
                .collect::<Vec<_>>(),
            ToolKind::WebSearch => self
                .web
                .search(&task.description, self.limits.web_results)
                .await?,
        };

        Ok(records.into_iter().map(Finding::from).collect())
    }

    /// Execute a task, turning a tool failure into a single error descriptor.
    pub async fn execute_task_or_descriptor(&self, task: &Task) -> Vec<Finding> {
        match self.execute_task(task).await {
            Ok(findings) => findings,
            Err(e) => {
                tracing::warn!(tool = %task.tool, error = %e, "task failed");
                vec![Finding::error(e.to_string())]
            }
        }
    }

    /// Persist the research records among `findings`, best-effort.
    ///
    /// Error descriptors are skipped. Failures are logged and dropped; this
    /// never affects the caller.
    pub async fn store_findings(&self, findings: &[Finding]) {
        let documents: Vec<StoredFinding> = findings
            .iter()
            .filter_map(Finding::as_record)
            .map(|record| StoredFinding::new(record.clone(), self.run_id))
            .collect();

        if documents.is_empty() {
            return;
        }

        match self.store.insert_many(&documents).await {
            Ok(inserted) => tracing::info!(
                inserted,
                collection = %self.store.collection(),
                run_id = %self.run_id,
                "findings stored"
            ),
            Err(e) => tracing::warn!(
                error = %e,
                collection = %self.store.collection(),
                "failed to store findings, discarding"
            ),
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
