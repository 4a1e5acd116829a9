//! Domain types for the plank board.
//!
//! This module contains the core domain types: the GitHub-shaped issue
//! model consumed from the gateway, the closed set of board columns, and
//! the locally stored annotation record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for an issue.
///
/// Wraps the tracker's stable numeric id, which is unique across the full
/// issue set for the lifetime of a board session. Distinct from the
/// human-facing issue number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IssueId(pub u64);

impl IssueId {
    /// Create a new issue ID.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IssueId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Lifecycle state of an issue on the remote tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// Issue is open.
    Open,

    /// Issue has been closed.
    Closed,
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// A user account on the remote tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable account id.
    pub id: u64,

    /// Login name.
    pub login: String,

    /// Avatar image URL.
    pub avatar_url: String,

    /// Profile URL.
    pub html_url: String,
}

/// A label attached to an issue.
///
/// Label names are matched case-insensitively by substring against the
/// board's keyword rules; they are free text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Stable label id.
    pub id: u64,

    /// Label name (free text).
    pub name: String,

    /// Hex color without the leading `#`.
    pub color: String,

    /// Optional description.
    pub description: Option<String>,
}

/// A milestone an issue may belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Stable milestone id.
    pub id: u64,

    /// Milestone title.
    pub title: String,

    /// Milestone state.
    pub state: IssueState,

    /// Optional due date.
    pub due_on: Option<DateTime<Utc>>,
}

/// Reaction counts on an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    /// Thumbs up.
    #[serde(rename = "+1", default)]
    pub plus_one: u64,

    /// Thumbs down.
    #[serde(rename = "-1", default)]
    pub minus_one: u64,

    /// Laugh.
    #[serde(default)]
    pub laugh: u64,

    /// Hooray.
    #[serde(default)]
    pub hooray: u64,

    /// Confused.
    #[serde(default)]
    pub confused: u64,

    /// Heart.
    #[serde(default)]
    pub heart: u64,

    /// Rocket.
    #[serde(default)]
    pub rocket: u64,

    /// Eyes.
    #[serde(default)]
    pub eyes: u64,
}

impl Reactions {
    /// Total number of reactions across all kinds.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.plus_one
            + self.minus_one
            + self.laugh
            + self.hooray
            + self.confused
            + self.heart
            + self.rocket
            + self.eyes
    }
}

/// An issue fetched from the remote tracker.
///
/// Read-only to the board core. Issues carry no column membership of their
/// own; membership is owned by the board store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier for the issue.
    pub id: IssueId,

    /// Human-facing issue number.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body text.
    pub body: Option<String>,

    /// Lifecycle state.
    pub state: IssueState,

    /// Issue author.
    pub author: User,

    /// Assignees (ordered, zero or more).
    pub assignees: Vec<User>,

    /// Labels (ordered).
    pub labels: Vec<Label>,

    /// Milestone, if any.
    pub milestone: Option<Milestone>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,

    /// Close timestamp, if closed.
    pub closed_at: Option<DateTime<Utc>>,

    /// Remote comment count.
    pub comments: u64,

    /// Reaction counts.
    pub reactions: Reactions,

    /// Canonical URL.
    pub html_url: String,
}

/// Identifier of a board column.
///
/// The column set is fixed; it is not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    /// Open issues nobody has picked up.
    Todo,

    /// Open issues with assignees or a progress label.
    InProgress,

    /// Closed issues.
    Done,
}

impl ColumnId {
    /// All columns in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Kebab-case identifier used by the CLI and JSON output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Fixed display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(format!(
                "unknown column '{other}' (expected todo, in-progress, or done)"
            )),
        }
    }
}

/// Unique identifier for a local annotation.
///
/// Generated ids are monotonic: sorting annotations by id preserves
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnotationId(pub String);

impl AnnotationId {
    /// Create a new annotation ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-authored comment stored only on this machine.
///
/// Never synced to the remote tracker, never edited or deleted, and kept
/// even if the referenced issue disappears remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Generated, monotonic id.
    pub id: AnnotationId,

    /// Id of the issue this annotation refers to. Not enforced at storage
    /// time; may reference a since-deleted or unknown issue.
    pub issue_id: IssueId,

    /// Free-text content (non-blank).
    pub content: String,

    /// Local author label.
    pub author: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
