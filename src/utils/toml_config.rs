//! TOML-based configuration for research-hub
//!
//! Endpoints, models, limits and orchestration policy live in
//! `research.toml`. Every section has defaults, so a missing file is valid.
//! Secrets never appear in the file: it names the environment variables
//! they are read from (see [`Credentials`](crate::utils::credentials::Credentials)).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root configuration structure loaded from research.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub papers: PapersConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub orchestrator: OrchestratorConfig,
}

// ============= Logging Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ============= HTTP Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout applied to every external call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ============= LLM Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    #[serde(default = "default_planner_model")]
    pub planner_model: String,

    #[serde(default)]
    pub temperature: f32,

    /// Environment variable containing the API key
    #[serde(default = "default_llm_key_env")]
    pub api_key_env: String,
}

fn default_llm_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_planner_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_llm_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            planner_model: default_planner_model(),
            temperature: 0.0,
            api_key_env: default_llm_key_env(),
        }
    }
}

// ============= Search Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,

    /// Location bias sent with every query; an empty string omits it
    #[serde(default = "default_search_location")]
    pub location: Option<String>,

    #[serde(default = "default_search_results")]
    pub max_results: usize,

    #[serde(default = "default_search_key_env")]
    pub api_key_env: String,
}

fn default_search_endpoint() -> String {
    "https://google.serper.dev/search".to_string()
}

fn default_search_location() -> Option<String> {
    Some("India".to_string())
}

fn default_search_results() -> usize {
    crate::tools::search::DEFAULT_MAX_RESULTS
}

fn default_search_key_env() -> String {
    "SERPER_API_KEY".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            location: default_search_location(),
            max_results: default_search_results(),
            api_key_env: default_search_key_env(),
        }
    }
}

// ============= Paper Search Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PapersConfig {
    #[serde(default = "default_papers_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_paper_results")]
    pub max_results: usize,

    /// Paper summaries are cut to this many characters
    #[serde(default = "default_summary_chars")]
    pub summary_chars: usize,
}

fn default_papers_endpoint() -> String {
    "http://export.arxiv.org/api/query".to_string()
}

fn default_paper_results() -> usize {
    crate::tools::arxiv::DEFAULT_MAX_PAPERS
}

fn default_summary_chars() -> usize {
    crate::agents::researcher::DEFAULT_SUMMARY_CHARS
}

impl Default for PapersConfig {
    fn default() -> Self {
        Self {
            endpoint: default_papers_endpoint(),
            max_results: default_paper_results(),
            summary_chars: default_summary_chars(),
        }
    }
}

// ============= Store Configuration =============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Astra,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreKind,

    #[serde(default = "default_collection")]
    pub collection: String,

    #[serde(default = "default_keyspace")]
    pub keyspace: String,

    /// Environment variable containing the store token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Environment variable containing the store endpoint URL
    #[serde(default = "default_endpoint_env")]
    pub endpoint_env: String,
}

fn default_collection() -> String {
    "ResearchPapers".to_string()
}

fn default_keyspace() -> String {
    "default_keyspace".to_string()
}

fn default_token_env() -> String {
    "ASTRA_DB_APPLICATION_TOKEN".to_string()
}

fn default_endpoint_env() -> String {
    "ASTRA_DB_API_ENDPOINT".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreKind::default(),
            collection: default_collection(),
            keyspace: default_keyspace(),
            token_env: default_token_env(),
            endpoint_env: default_endpoint_env(),
        }
    }
}

// ============= Orchestrator Configuration =============

/// What the orchestrator does after a task's tool call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFailurePolicy {
    /// Record the error descriptor and run the remaining tasks
    #[default]
    Continue,
    /// Record the error descriptor and skip the remaining tasks
    Abort,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Upper bound on executed tasks; unset means unbounded
    #[serde(default)]
    pub max_tasks: Option<usize>,

    #[serde(default)]
    pub on_task_error: TaskFailurePolicy,
}

// ============= Loading & Validation =============

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ResearchConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "configuration loaded");
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ResearchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate limits and endpoints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |msg: &str| Err(ConfigError::Validation(msg.to_string()));

        if self.http.timeout_secs == 0 {
            return fail("http.timeout_secs must be greater than 0");
        }
        if self.llm.base_url.trim().is_empty() {
            return fail("llm.base_url must not be empty");
        }
        if self.llm.planner_model.trim().is_empty() {
            return fail("llm.planner_model must not be empty");
        }
        if self.search.endpoint.trim().is_empty() {
            return fail("search.endpoint must not be empty");
        }
        if self.search.max_results == 0 {
            return fail("search.max_results must be greater than 0");
        }
        if self.papers.endpoint.trim().is_empty() {
            return fail("papers.endpoint must not be empty");
        }
        // Paper limits may be lowered, never raised
        let max_papers = default_paper_results();
        let max_summary = default_summary_chars();
        if !(1..=max_papers).contains(&self.papers.max_results) {
            return fail("papers.max_results must be between 1 and 3");
        }
        if !(1..=max_summary).contains(&self.papers.summary_chars) {
            return fail("papers.summary_chars must be between 1 and 200");
        }
        if self.store.collection.trim().is_empty() {
            return fail("store.collection must not be empty");
        }
        if self.store.backend == StoreKind::Astra && self.store.keyspace.trim().is_empty() {
            return fail("store.keyspace must not be empty");
        }
        if self.orchestrator.max_tasks == Some(0) {
            return fail("orchestrator.max_tasks must be greater than 0 when set");
        }

        Ok(())
    }

    /// Limits handed to the researcher
    pub fn research_limits(&self) -> crate::agents::ResearchLimits {
        crate::agents::ResearchLimits {
            web_results: self.search.max_results,
            paper_results: self.papers.max_results,
            summary_chars: self.papers.summary_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_test_config() -> String {
        r#"
[logging]
level = "debug"

[http]
timeout_secs = 10

[llm]
base_url = "http://localhost:8080/v1"
planner_model = "llama-3.1-8b-instant"

[search]
location = "Germany"
max_results = 8

[papers]
max_results = 2
summary_chars = 120

[store]
backend = "memory"
collection = "Findings"

[orchestrator]
max_tasks = 4
on_task_error = "abort"
"#
        .to_string()
    }

    #[test]
    fn test_parse_config() {
        let config = ResearchConfig::from_toml(&create_test_config()).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.llm.planner_model, "llama-3.1-8b-instant");
        assert_eq!(config.llm.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.search.location.as_deref(), Some("Germany"));
        assert_eq!(config.search.endpoint, "https://google.serper.dev/search");
        assert_eq!(config.papers.summary_chars, 120);
        assert_eq!(config.store.backend, StoreKind::Memory);
        assert_eq!(config.store.collection, "Findings");
        assert_eq!(config.orchestrator.max_tasks, Some(4));
        assert_eq!(config.orchestrator.on_task_error, TaskFailurePolicy::Abort);

        let limits = config.research_limits();
        assert_eq!(limits.web_results, 8);
        assert_eq!(limits.paper_results, 2);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ResearchConfig::from_toml("").unwrap();
        assert_eq!(config, ResearchConfig::default());
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.papers.max_results, 3);
        assert_eq!(config.papers.summary_chars, 200);
        assert_eq!(config.store.collection, "ResearchPapers");
        assert_eq!(config.orchestrator.max_tasks, None);
        assert_eq!(config.orchestrator.on_task_error, TaskFailurePolicy::Continue);
    }

    #[test]
    fn test_validation_rejects_zero_limits() {
        for snippet in [
            "[search]\nmax_results = 0",
            "[papers]\nsummary_chars = 0",
            "[http]\ntimeout_secs = 0",
            "[orchestrator]\nmax_tasks = 0",
            "[store]\ncollection = \"\"",
        ] {
            let err = ResearchConfig::from_toml(snippet).unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "{}", snippet);
        }
    }

    #[test]
    fn test_paper_limits_cannot_exceed_defaults() {
        for snippet in [
            "[papers]\nmax_results = 4",
            "[papers]\nsummary_chars = 201",
        ] {
            let err = ResearchConfig::from_toml(snippet).unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "{}", snippet);
        }

        let config =
            ResearchConfig::from_toml("[papers]\nmax_results = 3\nsummary_chars = 200").unwrap();
        assert_eq!(config.papers.max_results, 3);
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let err = ResearchConfig::from_toml("[orchestrator]\non_task_error = \"retry\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("research.toml");
        assert_eq!(
            ResearchConfig::load_or_default(&missing).unwrap(),
            ResearchConfig::default()
        );

        let mut file = fs::File::create(&missing).unwrap();
        file.write_all(create_test_config().as_bytes()).unwrap();
        let config = ResearchConfig::load_or_default(&missing).unwrap();
        assert_eq!(config.http.timeout_secs, 10);
    }
}
