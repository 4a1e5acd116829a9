//! Error types for plank operations.

use crate::github::GatewayError;
use std::io;
use thiserror::Error;

/// The error type for plank operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Annotation storage error.
    #[error("Annotation storage error: {0}")]
    Annotations(#[from] plank_jsonl::Error),

    /// Remote fetch failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Issue not found on the board.
    #[error("Issue not found: #{0}")]
    IssueNotFound(u64),
}

/// A specialized Result type for plank operations.
pub type Result<T> = std::result::Result<T, Error>;
