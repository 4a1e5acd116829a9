//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Done/Success:   green   (closed issues, completed actions)
//!   - In Progress:    yellow  (active work)
//!   - To Do:          white   (open, unclaimed)
//!   - Error:          red     (failed refresh)
//!   - Reference:      cyan    (issue numbers, URLs)
//!   - Accent:         magenta (labels)
//!   - Muted:          dimmed  (timestamps, field labels)

use crate::domain::{ColumnId, IssueState};
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Bold section header text.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Dimmed, de-emphasized text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Color a column header by its column identity.
pub(crate) fn colorize_column(id: ColumnId, text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    match id {
        ColumnId::Todo => text.bold().to_string(),
        ColumnId::InProgress => text.yellow().bold().to_string(),
        ColumnId::Done => text.green().bold().to_string(),
    }
}

/// Color an issue state.
pub(crate) fn colorize_state(state: IssueState, config: &OutputConfig) -> String {
    let text = state.to_string();
    if !config.use_colors {
        return text;
    }
    match state {
        IssueState::Open => text.white().to_string(),
        IssueState::Closed => text.green().to_string(),
    }
}

/// Colorize an issue number (cyan).
pub(crate) fn colorize_number(number: u64, config: &OutputConfig) -> String {
    let text = format!("#{number}");
    if !config.use_colors {
        return text;
    }
    text.cyan().to_string()
}

/// Colorize label names (magenta).
pub(crate) fn colorize_labels(labels: &[String], config: &OutputConfig) -> String {
    if labels.is_empty() {
        return String::new();
    }
    let text = format!("[{}]", labels.join(", "));
    if !config.use_colors {
        return text;
    }
    text.magenta().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputConfig {
        OutputConfig {
            max_width: 80,
            use_colors: false,
        }
    }

    #[test]
    fn colors_disabled_passes_text_through() {
        let config = plain();
        assert_eq!(success("done", &config), "done");
        assert_eq!(error("failed", &config), "failed");
        assert_eq!(colorize_number(42, &config), "#42");
    }

    #[test]
    fn labels_render_bracketed_list() {
        let config = plain();
        let labels = vec!["bug".to_string(), "help wanted".to_string()];
        assert_eq!(colorize_labels(&labels, &config), "[bug, help wanted]");
        assert_eq!(colorize_labels(&[], &config), "");
    }

    #[test]
    fn colors_enabled_wraps_with_escapes() {
        colored::control::set_override(true);
        let config = OutputConfig {
            max_width: 80,
            use_colors: true,
        };
        assert_ne!(success("done", &config), "done");
        colored::control::unset_override();
    }
}
