//! Remote issue gateway for the GitHub REST API.
//!
//! The gateway fetches the flat issue collection for a repository and
//! normalizes failures into [`GatewayError`]. It performs no business
//! logic: classification and column ownership live in [`crate::board`].
//!
//! The credential is passed in explicitly at construction. There is no
//! shared client or ambient token state, so repeated configuration changes
//! cannot race.

pub(crate) mod wire;

use crate::domain::Issue;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const USER_AGENT_VALUE: &str = "plank-board";
const PER_PAGE: usize = 100;

/// Coordinates of a repository on the remote tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,
}

impl RepoId {
    /// Create a new repository id.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Errors surfaced by the remote issue gateway.
///
/// Every variant renders as a single human-readable message; the board
/// treats all of them as an opaque fetch failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Credential rejected or missing required scope.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Repository (or issue) does not exist or is not visible.
    #[error("not found: {0}")]
    NotFound(String),

    /// API rate limit exhausted.
    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    /// Network failure or unexpected HTTP status.
    #[error("request failed: {0}")]
    Transport(String),

    /// Response body did not match the expected wire format.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// The one operation the board core consumes from the remote side.
///
/// Object-safe so the application can hold `Box<dyn IssueGateway>` and
/// tests can substitute a canned implementation.
#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Fetch the full flat issue collection for `repo`, open and closed.
    async fn fetch_issues(&self, repo: &RepoId) -> Result<Vec<Issue>, GatewayError>;

    /// Fetch a single issue by its human-facing number.
    async fn fetch_issue(&self, repo: &RepoId, number: u64) -> Result<Issue, GatewayError>;
}

/// Gateway implementation over the GitHub REST API.
pub struct GitHubGateway {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl fmt::Debug for GitHubGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubGateway")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GitHubGateway {
    /// Create a gateway authenticating with `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a gateway against a non-default API root (used by tests).
    #[must_use]
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.token)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    async fn get_json<T>(&self, url: &str, query: &[(&str, String)]) -> Result<T, GatewayError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .headers(self.headers())
            .query(query)
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let rate_limit_exhausted = response
                .headers()
                .get("x-ratelimit-remaining")
                .and_then(|value| value.to_str().ok())
                .is_some_and(|remaining| remaining == "0");
            return Err(error_for_status(status, rate_limit_exhausted, url));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

/// Map a non-success HTTP status to the gateway error taxonomy.
///
/// A 403 is authentication unless the rate-limit budget is exhausted, in
/// which case GitHub uses it to signal throttling.
fn error_for_status(status: StatusCode, rate_limit_exhausted: bool, url: &str) -> GatewayError {
    match status {
        StatusCode::UNAUTHORIZED => {
            GatewayError::Auth("credential rejected (HTTP 401)".to_string())
        }
        StatusCode::FORBIDDEN if rate_limit_exhausted => {
            GatewayError::RateLimit("API rate limit exhausted (HTTP 403)".to_string())
        }
        StatusCode::FORBIDDEN => {
            GatewayError::Auth("access forbidden (HTTP 403)".to_string())
        }
        StatusCode::TOO_MANY_REQUESTS => {
            GatewayError::RateLimit("too many requests (HTTP 429)".to_string())
        }
        StatusCode::NOT_FOUND => GatewayError::NotFound(url.to_string()),
        other => GatewayError::Transport(format!("unexpected HTTP status {other} for {url}")),
    }
}

#[async_trait]
impl IssueGateway for GitHubGateway {
    async fn fetch_issues(&self, repo: &RepoId) -> Result<Vec<Issue>, GatewayError> {
        let url = format!("{}/repos/{}/{}/issues", self.base_url, repo.owner, repo.repo);
        let mut issues = Vec::new();
        let mut page = 1usize;

        loop {
            let batch: Vec<wire::WireIssue> = self
                .get_json(
                    &url,
                    &[
                        ("state", "all".to_string()),
                        ("per_page", PER_PAGE.to_string()),
                        ("page", page.to_string()),
                    ],
                )
                .await?;

            let batch_len = batch.len();
            // Pull requests arrive through the issues endpoint; drop them.
            issues.extend(
                batch
                    .into_iter()
                    .filter(|item| !item.is_pull_request())
                    .map(Issue::from),
            );

            if batch_len < PER_PAGE {
                break;
            }
            page += 1;
        }

        tracing::debug!(repo = %repo, count = issues.len(), pages = page, "fetched issues");
        Ok(issues)
    }

    async fn fetch_issue(&self, repo: &RepoId, number: u64) -> Result<Issue, GatewayError> {
        let url = format!(
            "{}/repos/{}/{}/issues/{number}",
            self.base_url, repo.owner, repo.repo
        );
        let item: wire::WireIssue = self.get_json(&url, &[]).await?;

        if item.is_pull_request() {
            return Err(GatewayError::NotFound(format!(
                "#{number} in {repo} is a pull request, not an issue"
            )));
        }

        Ok(item.into())
    }
}
