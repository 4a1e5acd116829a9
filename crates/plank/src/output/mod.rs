//! Output formatting for CLI commands.
//!
//! Renders the board and issue detail in human-readable text or JSON for
//! programmatic use.

pub mod color;

use crate::board::{Column, Columns};
use crate::domain::{Annotation, ColumnId, Issue};
use colored::Colorize as _;
use serde::Serialize;
use std::env;

use color::{bold, colorize_column, colorize_labels, colorize_number, colorize_state, dimmed};

const DEFAULT_MAX_CONTENT_WIDTH: usize = 100;

/// Output format selected by the global `--json` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text.
    Text,
    /// JSON for programmatic use.
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an OutputConfig by reading the environment.
    ///
    /// Respects the `NO_COLOR` standard (<https://no-color.org/>) and
    /// `PLANK_COLOR=0` for explicit control; width is capped by the
    /// terminal when it can be detected.
    #[must_use]
    pub fn from_env() -> Self {
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("PLANK_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        let max_width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(DEFAULT_MAX_CONTENT_WIDTH)
            .min(DEFAULT_MAX_CONTENT_WIDTH);

        Self {
            max_width,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_colors: true,
        }
    }
}

/// Print a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render the three columns as text.
pub fn print_board(columns: &Columns, config: &OutputConfig) {
    for column in columns.iter() {
        print_column(column, config);
    }
}

/// Render a single column as text.
pub fn print_column(column: &Column, config: &OutputConfig) {
    let header = format!("{} ({})", column.title, column.issues.len());
    println!("{}", colorize_column(column.id, &header, config));
    println!("{}", dimmed(&"-".repeat(header.len()), config));

    if column.issues.is_empty() {
        println!("{}", dimmed("(empty)", config));
    }
    for issue in &column.issues {
        println!("{}", format_issue_line(issue, config));
    }
    println!();
}

/// Render the board as JSON: full column contents plus totals.
pub fn print_board_json(columns: &Columns) -> serde_json::Result<()> {
    print_json(&serde_json::json!({
        "columns": columns.iter().collect::<Vec<_>>(),
        "total": columns.total_issues(),
    }))
}

/// One-line board entry: number, truncated title, labels, assignees.
fn format_issue_line(issue: &Issue, config: &OutputConfig) -> String {
    let number = colorize_number(issue.number, config);

    // Leave room for the number column and decorations.
    let title_width = config.max_width.saturating_sub(12).max(20);
    let title: String = if issue.title.chars().count() > title_width {
        let truncated: String = issue.title.chars().take(title_width - 1).collect();
        format!("{truncated}…")
    } else {
        issue.title.clone()
    };

    let mut line = format!("  {number} {title}");

    let label_names: Vec<String> = issue.labels.iter().map(|l| l.name.clone()).collect();
    let labels = colorize_labels(&label_names, config);
    if !labels.is_empty() {
        line.push(' ');
        line.push_str(&labels);
    }

    if !issue.assignees.is_empty() {
        let assignees: Vec<String> = issue
            .assignees
            .iter()
            .map(|a| format!("@{}", a.login))
            .collect();
        line.push(' ');
        line.push_str(&dimmed(&assignees.join(" "), config));
    }

    line
}

/// Render an issue detail view, merging the local annotations.
pub fn print_issue_detail(
    issue: &Issue,
    column: ColumnId,
    annotations: &[&Annotation],
    config: &OutputConfig,
) {
    let header = format!("{} {}", colorize_number(issue.number, config), issue.title);
    println!("{}", bold(&header, config));
    println!(
        "{} {}  {} {}  {} {}",
        dimmed("state:", config),
        colorize_state(issue.state, config),
        dimmed("column:", config),
        column.title(),
        dimmed("author:", config),
        issue.author.login,
    );

    if !issue.assignees.is_empty() {
        let assignees: Vec<String> = issue.assignees.iter().map(|a| a.login.clone()).collect();
        println!("{} {}", dimmed("assignees:", config), assignees.join(", "));
    }

    let label_names: Vec<String> = issue.labels.iter().map(|l| l.name.clone()).collect();
    if !label_names.is_empty() {
        println!(
            "{} {}",
            dimmed("labels:", config),
            colorize_labels(&label_names, config)
        );
    }

    if let Some(milestone) = &issue.milestone {
        println!("{} {}", dimmed("milestone:", config), milestone.title);
    }

    println!(
        "{} {}  {} {}",
        dimmed("created:", config),
        issue.created_at.format("%Y-%m-%d %H:%M"),
        dimmed("updated:", config),
        issue.updated_at.format("%Y-%m-%d %H:%M"),
    );

    if issue.reactions.total() > 0 || issue.comments > 0 {
        println!(
            "{} {}  {} {}",
            dimmed("comments:", config),
            issue.comments,
            dimmed("reactions:", config),
            issue.reactions.total(),
        );
    }

    println!("{} {}", dimmed("url:", config), issue.html_url);

    if let Some(body) = issue.body.as_deref().filter(|body| !body.trim().is_empty()) {
        println!();
        for line in textwrap::wrap(body, config.max_width) {
            println!("{line}");
        }
    }

    println!();
    let notes_header = format!("Local notes ({})", annotations.len());
    println!("{}", bold(&notes_header, config));
    if annotations.is_empty() {
        println!("{}", dimmed("(none)", config));
    }
    for annotation in annotations {
        println!(
            "{} {}",
            dimmed(
                &format!(
                    "[{} {}]",
                    annotation.created_at.format("%Y-%m-%d %H:%M"),
                    annotation.author
                ),
                config,
            ),
            annotation.content,
        );
    }
}

/// Render an issue detail as JSON, merging the local annotations.
pub fn print_issue_detail_json(
    issue: &Issue,
    column: ColumnId,
    annotations: &[&Annotation],
) -> serde_json::Result<()> {
    print_json(&serde_json::json!({
        "issue": issue,
        "column": column,
        "annotations": annotations,
    }))
}

/// Print a red error line to stderr.
pub fn print_error(message: &str, config: &OutputConfig) {
    if config.use_colors {
        eprintln!("{} {message}", "error:".red().bold());
    } else {
        eprintln!("error: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IssueId, IssueState, Reactions, User};
    use chrono::Utc;

    fn sample_issue() -> Issue {
        let now = Utc::now();
        Issue {
            id: IssueId::new(1),
            number: 7,
            title: "A fairly long title that should be truncated when the terminal is narrow"
                .to_string(),
            body: None,
            state: IssueState::Open,
            author: User {
                id: 1,
                login: "alice".to_string(),
                avatar_url: String::new(),
                html_url: String::new(),
            },
            assignees: vec![],
            labels: vec![],
            milestone: None,
            created_at: now,
            updated_at: now,
            closed_at: None,
            comments: 0,
            reactions: Reactions::default(),
            html_url: String::new(),
        }
    }

    #[test]
    fn issue_line_truncates_long_titles() {
        let config = OutputConfig {
            max_width: 40,
            use_colors: false,
        };
        let line = format_issue_line(&sample_issue(), &config);
        assert!(line.contains('…'));
        assert!(line.contains("#7"));
    }

    #[test]
    fn issue_line_keeps_short_titles_intact() {
        let config = OutputConfig {
            max_width: 120,
            use_colors: false,
        };
        let mut issue = sample_issue();
        issue.title = "Short title".to_string();
        let line = format_issue_line(&issue, &config);
        assert!(line.contains("Short title"));
        assert!(!line.contains('…'));
    }
}
