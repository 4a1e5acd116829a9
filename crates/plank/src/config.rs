//! Configuration management for plank.
//!
//! A plank workspace is a `.plank/` directory holding `config.yaml` with
//! the repository coordinates and `annotations.jsonl` with the local
//! annotation log. The API credential is deliberately NOT stored in the
//! config file; it is read from the environment and passed explicitly into
//! the gateway.

use crate::error::{Error, Result};
use crate::github::RepoId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the plank directory.
pub const PLANK_DIR_NAME: &str = ".plank";

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the annotations data file.
pub const ANNOTATIONS_FILE_NAME: &str = "annotations.jsonl";

/// Environment variables consulted for the API token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["PLANK_GITHUB_TOKEN", "GITHUB_TOKEN"];

/// Maximum directory depth to traverse when searching for the plank root.
pub const MAX_TRAVERSAL_DEPTH: usize = 256;

/// Configuration file structure for plank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlankConfig {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,
}

impl PlankConfig {
    /// Create a new configuration for `owner/repo`.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Load configuration from a file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to a file.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// The configured repository as a gateway address.
    #[must_use]
    pub fn repo_id(&self) -> RepoId {
        RepoId::new(self.owner.clone(), self.repo.clone())
    }
}

/// Search upward from `start` for a directory containing `.plank/`.
///
/// Traversal is capped at [`MAX_TRAVERSAL_DEPTH`] levels.
#[must_use]
pub fn find_plank_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    for _ in 0..MAX_TRAVERSAL_DEPTH {
        if current.join(PLANK_DIR_NAME).is_dir() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
    None
}

/// Resolve the API token from the environment.
///
/// # Errors
///
/// Returns a configuration error naming the consulted variables when none
/// of them is set to a non-empty value.
pub fn resolve_token() -> Result<String> {
    for var in TOKEN_ENV_VARS {
        if let Ok(value) = std::env::var(var) {
            if !value.trim().is_empty() {
                return Ok(value);
            }
        }
    }
    Err(Error::Config(format!(
        "no API token found; set one of {}",
        TOKEN_ENV_VARS.join(" or ")
    )))
}
