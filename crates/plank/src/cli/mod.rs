//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for plank using clap's
//! derive API.
//!
//! # Commands
//!
//! - `init`: Initialize a plank workspace for a repository
//! - `board`: Fetch the repository's issues and render the kanban board
//! - `show`: Show issue detail with local annotations
//! - `comment`: Attach a local annotation to an issue
//! - `session`: Interactive board session (move cards, refresh, inspect)
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! plank init --owner rust-lang --repo cargo
//! plank board
//! plank show 42
//! plank comment 42 needs a minimal repro
//! plank session
//! ```

mod args;
mod execute;
mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};

// Re-export argument structs
pub use args::{BoardArgs, CommentArgs, InitArgs, SessionArgs, ShowArgs};

// Re-export types
pub use types::ColumnArg;

use crate::output::OutputMode;

/// Plank - a terminal kanban board for GitHub issues
///
/// Issues are fetched live from GitHub and classified into To Do,
/// In Progress, and Done. Annotations are stored locally in
/// `.plank/annotations.jsonl` and never leave this machine.
#[derive(Parser, Debug)]
#[command(name = "plank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a plank workspace
    ///
    /// Creates the `.plank/` directory with configuration and an empty
    /// annotation log. Run this once per checkout.
    Init(InitArgs),

    /// Render the kanban board
    ///
    /// Fetches all issues (open and closed) and shows them classified
    /// into To Do, In Progress, and Done.
    Board(BoardArgs),

    /// Show detailed information about an issue
    ///
    /// Displays the remote issue fields merged with any local annotations.
    Show(ShowArgs),

    /// Attach a local annotation to an issue
    ///
    /// The annotation is stored only on this machine; nothing is sent to
    /// the remote tracker.
    Comment(CommentArgs),

    /// Start an interactive board session
    ///
    /// Renders the board and accepts commands to move cards, refresh,
    /// inspect issues, and add annotations. Moves are local and revert on
    /// the next refresh.
    Session(SessionArgs),
}

impl Cli {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Commands::Init(args) => execute::execute_init(args, output_mode).await,
            Commands::Board(args) => execute::execute_board(args, output_mode).await,
            Commands::Show(args) => execute::execute_show(args, output_mode).await,
            Commands::Comment(args) => execute::execute_comment(args, output_mode).await,
            Commands::Session(args) => execute::execute_session(args).await,
        }
    }
}
