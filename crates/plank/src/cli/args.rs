//! CLI argument structs for all commands.

use clap::Parser;

use super::types::ColumnArg;

/// Arguments for the `init` command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Repository owner (user or organization)
    #[arg(short, long)]
    pub owner: String,

    /// Repository name
    #[arg(short, long)]
    pub repo: String,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `board` command.
#[derive(Parser, Debug, Clone)]
pub struct BoardArgs {
    /// Render only one column
    #[arg(short, long, value_enum)]
    pub column: Option<ColumnArg>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Issue number to display
    pub number: u64,
}

/// Arguments for the `comment` command.
#[derive(Parser, Debug, Clone)]
pub struct CommentArgs {
    /// Issue number to annotate
    pub number: u64,

    /// Comment text (joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Arguments for the `session` command.
#[derive(Parser, Debug, Clone)]
pub struct SessionArgs {}
