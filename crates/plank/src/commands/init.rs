//! Implementation of the `init` command.
//!
//! Creates the `.plank/` directory with the configuration file, an empty
//! annotation log, and a `.gitignore` keeping the log out of version
//! control (annotations are private to this machine).

use crate::config::{
    PlankConfig, ANNOTATIONS_FILE_NAME, CONFIG_FILE_NAME, PLANK_DIR_NAME,
};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the gitignore file within `.plank/`.
pub const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Result of the init command.
#[derive(Debug)]
pub struct InitResult {
    /// Path to the created plank directory.
    pub plank_dir: PathBuf,
    /// Path to the created config file.
    pub config_file: PathBuf,
    /// Path to the created annotations file.
    pub annotations_file: PathBuf,
    /// The configured repository slug.
    pub repo_slug: String,
}

/// Validate a repository owner or name segment.
///
/// GitHub slugs are non-empty and limited to alphanumerics, `-`, `_`,
/// and `.`.
pub fn validate_slug_segment(segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(Error::Config(
            "owner and repo must be non-empty".to_string(),
        ));
    }
    if !segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(Error::Config(format!(
            "'{segment}' contains characters outside [A-Za-z0-9._-]"
        )));
    }
    Ok(())
}

/// Initialize a new plank workspace in the given directory.
///
/// # Errors
///
/// Returns an error if `.plank/` already exists, if the owner or repo
/// segment is invalid, or if file system operations fail.
pub async fn init(base_dir: &Path, owner: &str, repo: &str) -> Result<InitResult> {
    let owner = owner.trim();
    let repo = repo.trim();
    validate_slug_segment(owner)?;
    validate_slug_segment(repo)?;

    let plank_dir = base_dir.join(PLANK_DIR_NAME);
    if plank_dir.exists() {
        return Err(Error::Config(format!(
            "plank is already initialized in this directory. Found existing '{PLANK_DIR_NAME}'"
        )));
    }

    fs::create_dir_all(&plank_dir).await?;

    let config_file = plank_dir.join(CONFIG_FILE_NAME);
    let config = PlankConfig::new(owner, repo);
    config.save(&config_file).await?;

    let annotations_file = plank_dir.join(ANNOTATIONS_FILE_NAME);
    fs::write(&annotations_file, "").await?;

    let gitignore_file = plank_dir.join(GITIGNORE_FILE_NAME);
    fs::write(&gitignore_file, format!("{ANNOTATIONS_FILE_NAME}\n")).await?;

    tracing::info!(dir = %plank_dir.display(), repo = %config.repo_id(), "initialized plank");

    Ok(InitResult {
        plank_dir,
        config_file,
        annotations_file,
        repo_slug: config.repo_id().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn init_creates_expected_tree() {
        let dir = TempDir::new().unwrap();

        let result = init(dir.path(), "rust-lang", "cargo").await.unwrap();

        assert!(result.config_file.is_file());
        assert!(result.annotations_file.is_file());
        assert_eq!(result.repo_slug, "rust-lang/cargo");

        let gitignore =
            std::fs::read_to_string(result.plank_dir.join(GITIGNORE_FILE_NAME)).unwrap();
        assert!(gitignore.contains(ANNOTATIONS_FILE_NAME));
    }

    #[tokio::test]
    async fn init_refuses_to_reinitialize() {
        let dir = TempDir::new().unwrap();
        init(dir.path(), "owner", "repo").await.unwrap();

        let result = init(dir.path(), "owner", "repo").await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn init_rejects_invalid_slugs() {
        let dir = TempDir::new().unwrap();
        assert!(init(dir.path(), "owner", "re/po").await.is_err());
        assert!(init(dir.path(), "", "repo").await.is_err());
    }

    #[test]
    fn slug_validation_accepts_github_names() {
        assert!(validate_slug_segment("rust-lang").is_ok());
        assert!(validate_slug_segment("serde_json").is_ok());
        assert!(validate_slug_segment("vue.js").is_ok());
        assert!(validate_slug_segment("owner name").is_err());
    }
}
