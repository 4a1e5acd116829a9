//! Application context for CLI command execution.
//!
//! The `App` struct is the composition root: it locates the `.plank/`
//! workspace, loads configuration, resolves the credential, and wires the
//! gateway, board store, and annotation store together.

use crate::annotations::AnnotationStore;
use crate::board::BoardStore;
use crate::config::{
    find_plank_root, PlankConfig, ANNOTATIONS_FILE_NAME, CONFIG_FILE_NAME, PLANK_DIR_NAME,
    resolve_token,
};
use crate::error::{Error, Result};
use crate::github::{GitHubGateway, IssueGateway, RepoId};
use std::path::{Path, PathBuf};

/// Application context for CLI operations.
pub struct App {
    /// The remote gateway (trait object for polymorphism and tests).
    gateway: Box<dyn IssueGateway>,

    /// The board state store.
    board: BoardStore,

    /// The local annotation store.
    annotations: AnnotationStore,

    /// Configured repository coordinates.
    repo: RepoId,

    /// Path to the plank directory (.plank).
    plank_dir: PathBuf,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("repo", &self.repo)
            .field("plank_dir", &self.plank_dir)
            .field("gateway", &"<dyn IssueGateway>")
            .finish_non_exhaustive()
    }
}

impl App {
    /// Create an App instance from the given working directory.
    ///
    /// Searches up the directory tree for `.plank/`, loads configuration,
    /// resolves the token from the environment, and loads the annotation
    /// log.
    ///
    /// # Errors
    ///
    /// Returns an error if no plank workspace is found, configuration or
    /// the annotation log cannot be loaded, or no token is set.
    pub async fn from_directory(working_dir: &Path) -> Result<Self> {
        let root_dir = find_plank_root(working_dir).ok_or_else(|| {
            Error::Config(format!(
                "Not a plank workspace (no '{PLANK_DIR_NAME}' directory found); run 'plank init'"
            ))
        })?;
        let plank_dir = root_dir.join(PLANK_DIR_NAME);

        let config = PlankConfig::load(&plank_dir.join(CONFIG_FILE_NAME)).await?;
        let token = resolve_token()?;
        let gateway = Box::new(GitHubGateway::new(token));

        let (annotations, warnings) =
            AnnotationStore::load(plank_dir.join(ANNOTATIONS_FILE_NAME)).await?;
        for warning in &warnings {
            tracing::warn!("annotation log: {warning}");
        }

        Ok(Self::assemble(gateway, annotations, config.repo_id(), plank_dir))
    }

    /// Assemble an App from already-constructed parts.
    ///
    /// Used by `from_directory` and by tests that substitute a canned
    /// gateway.
    #[must_use]
    pub fn assemble(
        gateway: Box<dyn IssueGateway>,
        annotations: AnnotationStore,
        repo: RepoId,
        plank_dir: PathBuf,
    ) -> Self {
        Self {
            gateway,
            board: BoardStore::new(),
            annotations,
            repo,
            plank_dir,
        }
    }

    /// The configured repository.
    #[must_use]
    pub fn repo(&self) -> &RepoId {
        &self.repo
    }

    /// Path to the plank directory.
    #[must_use]
    pub fn plank_dir(&self) -> &Path {
        &self.plank_dir
    }

    /// Read access to the board store.
    #[must_use]
    pub fn board(&self) -> &BoardStore {
        &self.board
    }

    /// Mutable access to the board store.
    pub fn board_mut(&mut self) -> &mut BoardStore {
        &mut self.board
    }

    /// Read access to the annotation store.
    #[must_use]
    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    /// Mutable access to the annotation store.
    pub fn annotations_mut(&mut self) -> &mut AnnotationStore {
        &mut self.annotations
    }

    /// Fetch a single issue by number for the detail view.
    pub async fn fetch_issue(&self, number: u64) -> Result<crate::domain::Issue> {
        Ok(self.gateway.fetch_issue(&self.repo, number).await?)
    }

    /// Fetch the configured repository's issues and reload the board.
    ///
    /// Failures are recorded in the board store's `last_error` rather than
    /// propagated; previously loaded columns stay visible.
    pub async fn refresh(&mut self) {
        self.board.refresh(self.gateway.as_ref(), &self.repo).await;
    }
}
