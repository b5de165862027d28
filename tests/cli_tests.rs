//! CLI integration tests for research-hub
//!
//! Runs the built binary for the commands that need no network access:
//! help, init, config and the credential precondition of `run`.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const CREDENTIAL_VARS: [&str; 4] = [
    "GROQ_API_KEY",
    "SERPER_API_KEY",
    "ASTRA_DB_APPLICATION_TOKEN",
    "ASTRA_DB_API_ENDPOINT",
];

/// Run research-hub in `dir` with a clean credential environment
fn run_cli(args: &[&str], dir: &TempDir) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_research-hub"));
    cmd.args(args).current_dir(dir.path()).env("RUST_LOG", "off");
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.output().expect("Failed to execute command")
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--help"], &dir);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["run", "plan", "config", "init"] {
        assert!(stdout.contains(command), "help is missing {}", command);
    }
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--version"], &dir);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("research-hub"));
}

// =============================================================================
// Init Tests
// =============================================================================

#[test]
fn test_init_creates_files() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--no-color", "init"], &dir);

    assert!(output.status.success());
    let config = fs::read_to_string(dir.path().join("research.toml")).unwrap();
    assert!(config.contains("[orchestrator]"));
    assert!(dir.path().join(".env.example").exists());
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("research.toml"), "# mine\n").unwrap();

    let output = run_cli(&["--no-color", "init"], &dir);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("research.toml")).unwrap(),
        "# mine\n"
    );

    let output = run_cli(&["--no-color", "init", "--force"], &dir);
    assert!(output.status.success());
    assert!(
        fs::read_to_string(dir.path().join("research.toml"))
            .unwrap()
            .contains("[llm]")
    );
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_hides_secret_values() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_research-hub"))
        .args(["--no-color", "config"])
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .env("GROQ_API_KEY", "gsk_super_secret")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("llama-3.3-70b-versatile"));
    assert!(stdout.contains("<set>"));
    assert!(!stdout.contains("gsk_super_secret"));
}

#[test]
fn test_config_validate_reports_missing_credentials() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--no-color", "config", "--validate"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SERPER_API_KEY"));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("research.toml"),
        "[orchestrator]\nmax_tasks = 0\n",
    )
    .unwrap();

    let output = run_cli(&["--no-color", "config"], &dir);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("max_tasks"));
}

// =============================================================================
// Run Tests
// =============================================================================

#[test]
fn test_run_without_credentials_fails_fast() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["--no-color", "run", "AI in healthcare"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing credentials"));
    assert!(stderr.contains("GROQ_API_KEY"));
}

#[test]
fn test_run_with_memory_store_skips_store_credentials() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("research.toml"),
        "[store]\nbackend = \"memory\"\n",
    )
    .unwrap();

    let output = run_cli(&["--no-color", "run", "goal", "--groq-key", "k"], &dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SERPER_API_KEY"));
    assert!(!stderr.contains("ASTRA_DB_APPLICATION_TOKEN"));
}
