//! Init command implementation
//!
//! Scaffolds `research.toml` and `.env.example` in a directory.

use super::output::Output;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of the init operation
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// research.toml already exists
    AlreadyExists,
    /// An error occurred during initialization
    Error(String),
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
}

/// Run the init command
pub fn run(config: InitConfig, output: &Output) -> InitResult {
    output.banner();
    output.header("Initializing research-hub");

    let base_path = &config.path;
    if !base_path.exists() {
        if let Err(e) = fs::create_dir_all(base_path) {
            output.error(&format!("Failed to create {}: {}", base_path.display(), e));
            return InitResult::Error(e.to_string());
        }
    }

    let config_path = base_path.join("research.toml");
    if config_path.exists() && !config.force {
        output.warning("research.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return InitResult::AlreadyExists;
    }

    if let Err(e) = write_file(&config_path, &generate_research_toml(), config.force) {
        output.error(&format!("Failed to create research.toml: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("config", "research.toml");

    let env_example_path = base_path.join(".env.example");
    if let Err(e) = write_file(&env_example_path, &generate_env_example(), config.force) {
        output.error(&format!("Failed to create .env.example: {}", e));
        return InitResult::Error(e.to_string());
    }
    output.created("env", ".env.example");

    output.header("Next Steps");
    output.info("1. Set up API credentials:");
    output.command("cp .env.example .env");
    output.info("2. Run a research goal:");
    output.command("research-hub run \"Latest AI trends in Healthcare\"");

    InitResult::Success
}

fn write_file(path: &Path, content: &str, force: bool) -> std::io::Result<()> {
    if path.exists() && !force {
        return Ok(()); // Skip existing files unless force is true
    }
    fs::write(path, content)
}

fn generate_research_toml() -> String {
    r#"# research-hub configuration
# Secrets are read from the environment variables named below (see .env.example).

[logging]
level = "info"    # overridden by RUST_LOG
json = false

[http]
timeout_secs = 60

[llm]
# Any OpenAI-compatible chat-completions API
base_url = "https://api.groq.com/openai/v1"
planner_model = "llama-3.3-70b-versatile"
temperature = 0.0
api_key_env = "GROQ_API_KEY"

[search]
endpoint = "https://google.serper.dev/search"
location = "India"
max_results = 5
api_key_env = "SERPER_API_KEY"

[papers]
endpoint = "http://export.arxiv.org/api/query"
max_results = 3      # 1..=3
summary_chars = 200  # 1..=200

[store]
backend = "astra"    # astra | memory
collection = "ResearchPapers"
keyspace = "default_keyspace"
token_env = "ASTRA_DB_APPLICATION_TOKEN"
endpoint_env = "ASTRA_DB_API_ENDPOINT"

[orchestrator]
# max_tasks = 10
on_task_error = "continue"    # continue | abort
"#
    .to_string()
}

fn generate_env_example() -> String {
    r#"# research-hub Environment Variables
# Copy this file to .env and fill in the values.

# REQUIRED: language model API key (Groq by default)
GROQ_API_KEY=gsk_...

# REQUIRED: Serper web search API key
SERPER_API_KEY=your-serper-key

# REQUIRED for the astra store backend
ASTRA_DB_APPLICATION_TOKEN=AstraCS:...
ASTRA_DB_API_ENDPOINT=https://<db-id>-<region>.apps.astra.datastax.com

# Optional: Logging level (trace, debug, info, warn, error)
RUST_LOG=info,research_hub=debug
"#
    .to_string()
}
