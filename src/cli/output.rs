//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for research-hub, including
//! the plan, findings table and critic report of a run.

use crate::types::{Finding, FindingKind, Report, Task};
use owo_colors::OwoColorize;

const TITLE_WIDTH: usize = 48;
const TYPE_WIDTH: usize = 11;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the banner
    pub fn banner(&self) {
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        if self.colored {
            println!(
                "\n   {} {}\n",
                "research-hub".bright_cyan().bold(),
                version.dimmed()
            );
        } else {
            println!("\n   research-hub {}\n", version);
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a file creation message
    pub fn created(&self, file_type: &str, path: &str) {
        if self.colored {
            println!(
                "  {} {} {}",
                "✓".green().bold(),
                file_type.dimmed(),
                path.bright_white()
            );
        } else {
            println!("  [CREATED] {} {}", file_type, path);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print a command suggestion
    pub fn command(&self, cmd: &str) {
        if self.colored {
            println!("     {}", format!("$ {}", cmd).bright_cyan());
        } else {
            println!("     $ {}", cmd);
        }
    }

    /// Print the numbered plan
    pub fn plan(&self, plan: &[Task]) {
        self.header("Plan");
        for (i, task) in plan.iter().enumerate() {
            let step = format!("[{}/{}]", i + 1, plan.len());
            if self.colored {
                println!(
                    "  {} {} {}",
                    step.dimmed(),
                    task.tool.as_str().cyan(),
                    task.description.bright_white()
                );
            } else {
                println!("  {} {} {}", step, task.tool, task.description);
            }
        }
    }

    /// Print findings as a table; error descriptors are listed separately
    pub fn findings(&self, findings: &[Finding]) {
        self.header("Findings");

        let records: Vec<_> = findings.iter().filter_map(Finding::as_record).collect();
        if records.is_empty() {
            self.warning("No research results");
        } else {
            let header = format!(
                "{:<type_w$} {:<title_w$} {}",
                "Type",
                "Title",
                "Link",
                type_w = TYPE_WIDTH,
                title_w = TITLE_WIDTH
            );
            let rule = "─".repeat(TYPE_WIDTH + TITLE_WIDTH + 30);
            if self.colored {
                println!("    {}", header.bright_white().bold());
                println!("    {}", rule.dimmed());
            } else {
                println!("    {}", header);
                println!("    {}", "-".repeat(TYPE_WIDTH + TITLE_WIDTH + 30));
            }

            for record in &records {
                let kind = match record.kind {
                    FindingKind::JobSearch => "job_search",
                    FindingKind::Paper => "paper",
                };
                println!(
                    "    {:<type_w$} {:<title_w$} {}",
                    kind,
                    clip(&record.title, TITLE_WIDTH),
                    record.link,
                    type_w = TYPE_WIDTH,
                    title_w = TITLE_WIDTH
                );
            }
        }

        for finding in findings {
            if let Finding::Error { error } = finding {
                self.warning(&format!("Task failed: {}", error));
            }
        }
    }

    /// Print the critic's report
    pub fn report(&self, report: &Report) {
        self.header("Critic Report");
        self.kv("Confidence", &format!("{:.2}", report.confidence_score));
        if report.issues_found.is_empty() {
            self.kv("Issues", "none");
        } else {
            for issue in &report.issues_found {
                self.warning(issue);
            }
        }
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}

/// Closing line of a run: research records found, plus failed tasks if any
pub fn completion_message(findings: &[Finding]) -> String {
    let failed = findings.iter().filter(|f| f.is_error()).count();
    let found = findings.len() - failed;
    match failed {
        0 => format!("Research complete! Found {} items.", found),
        1 => format!("Research complete! Found {} items (1 task failed).", found),
        n => format!("Research complete! Found {} items ({} tasks failed).", found, n),
    }
}

/// Shorten `text` to `width` characters, marking the cut with an ellipsis
pub fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}
