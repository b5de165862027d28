//! CLI module for research-hub
//!
//! Provides command-line interface parsing for the research-hub binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod init;
pub mod output;

use crate::utils::credentials::Credentials;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// research-hub - multi-agent research assistant
///
/// A planner breaks a goal into search tasks, a researcher runs them against
/// web and paper search and stores the results, and a critic scores them.
#[derive(Parser, Debug)]
#[command(
    name = "research-hub",
    version,
    about = "research-hub - multi-agent research assistant",
    after_help = "EXAMPLES:\n    \
                  research-hub init                                   # Scaffold research.toml and .env.example\n    \
                  research-hub run \"Latest AI trends in Healthcare\"   # Plan, research, score and store\n    \
                  research-hub run --json \"Rust jobs in Pune\"         # Print the outcome as JSON\n    \
                  research-hub plan \"Quantum error correction\"        # Show the plan only"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "research.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan, research, score and store findings for a goal
    Run {
        /// What to research
        goal: String,

        /// Print the outcome as JSON instead of tables
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Show the plan the planner produces for a goal
    Plan {
        /// What to research
        goal: String,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Show configuration information
    Config {
        /// Validate the configuration file and credentials
        #[arg(long)]
        validate: bool,
    },

    /// Create research.toml and .env.example
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files without prompting
        #[arg(short, long)]
        force: bool,
    },
}

/// Credential overrides; unset values fall back to the environment
#[derive(Args, Debug, Default)]
pub struct CredentialArgs {
    /// Language model API key
    #[arg(long)]
    pub groq_key: Option<String>,

    /// Serper API key
    #[arg(long)]
    pub serper_key: Option<String>,

    /// Astra DB application token
    #[arg(long)]
    pub astra_token: Option<String>,

    /// Astra DB API endpoint
    #[arg(long)]
    pub astra_endpoint: Option<String>,
}

impl From<CredentialArgs> for Credentials {
    fn from(args: CredentialArgs) -> Self {
        Credentials {
            language_model_key: args.groq_key,
            search_key: args.serper_key,
            store_token: args.astra_token,
            store_endpoint: args.astra_endpoint,
        }
    }
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "research-hub",
            "--no-color",
            "run",
            "AI in healthcare",
            "--json",
            "--serper-key",
            "abc",
        ])
        .unwrap();

        assert!(cli.no_color);
        assert_eq!(cli.config, PathBuf::from("research.toml"));
        match cli.command {
            Commands::Run {
                goal,
                json,
                credentials,
            } => {
                assert_eq!(goal, "AI in healthcare");
                assert!(json);
                let creds = Credentials::from(credentials);
                assert_eq!(creds.search_key.as_deref(), Some("abc"));
                assert!(creds.language_model_key.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_goal_is_required() {
        assert!(Cli::try_parse_from(["research-hub", "run"]).is_err());
    }
}
