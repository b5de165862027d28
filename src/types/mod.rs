use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============= Task Types =============

/// Tool a task is dispatched to.
///
/// The planner's model answers with free-text selectors; they are mapped onto
/// this enum once, when the [`Task`] is built. Only the exact selector
/// `"arxiv"` selects paper search, everything else falls back to web search.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    #[serde(rename = "job_search")]
    WebSearch,
    #[serde(rename = "arxiv")]
    PaperSearch,
}

impl ToolKind {
    /// Map a model-provided selector onto a tool, applying the default-tool policy.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "arxiv" => ToolKind::PaperSearch,
            _ => ToolKind::WebSearch,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::WebSearch => "job_search",
            ToolKind::PaperSearch => "arxiv",
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub tool: ToolKind,
    pub description: String,
}

impl Task {
    pub fn new(tool: ToolKind, description: impl Into<String>) -> Self {
        Self {
            tool,
            description: description.into(),
        }
    }

    /// Build a task from one element of the model's `tasks` array.
    ///
    /// A missing or non-string `tool` selects web search; a missing or
    /// non-string `description` is replaced by `goal`.
    pub fn from_value(value: &Value, goal: &str) -> Self {
        let tool = value
            .get("tool")
            .and_then(|v| v.as_str())
            .map(ToolKind::from_selector)
            .unwrap_or_default();
        let description = value
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or(goal)
            .to_string();

        Self { tool, description }
    }
}

// ============= Finding Types =============

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    JobSearch,
    Paper,
}

/// One normalized search or paper result.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResearchRecord {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub title: String,
    pub link: String,
    pub summary: String,
}

/// Entry in the findings sequence of a run.
///
/// Failed tool calls are kept in-band as `{"error": ...}` descriptors so the
/// sequence mirrors what each task produced, in order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Finding {
    Record(ResearchRecord),
    Error { error: String },
}

impl Finding {
    pub fn error(message: impl Into<String>) -> Self {
        Finding::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Finding::Error { .. })
    }

    pub fn as_record(&self) -> Option<&ResearchRecord> {
        match self {
            Finding::Record(record) => Some(record),
            Finding::Error { .. } => None,
        }
    }
}

impl From<ResearchRecord> for Finding {
    fn from(record: ResearchRecord) -> Self {
        Finding::Record(record)
    }
}

// ============= Report Types =============

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Report {
    pub confidence_score: f64,
    pub issues_found: Vec<String>,
}

/// Everything a single orchestration run produces.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResearchOutcome {
    pub findings: Vec<Finding>,
    pub report: Report,
    pub plan: Vec<Task>,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("LLM error: {0}")]
    LLM(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
