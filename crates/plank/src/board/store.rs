//! The board state store.
//!
//! Single source of truth for column membership. The store has two
//! observable states: Empty (no columns, initial) and Loaded (three column
//! sequences, possibly empty). `load` transitions Empty→Loaded or
//! Loaded→Loaded as a full replacement; `move_issue` relocates one issue
//! between columns and is the only other mutation.

use super::{classify, Column, Columns};
use crate::domain::{ColumnId, Issue, IssueId};
use crate::github::{IssueGateway, RepoId};

/// Handle for one in-flight refresh.
///
/// Tickets carry a monotonically increasing sequence number. When a fetch
/// completes, its result is applied only if no newer refresh has begun in
/// the meantime, so a slow stale response can never overwrite a newer one.
#[derive(Debug)]
pub struct RefreshTicket {
    seq: u64,
}

/// In-memory owner of the three board columns.
///
/// All reads used by the presentation layer go through this type, and all
/// mutation is funneled through [`load`](Self::load) and
/// [`move_issue`](Self::move_issue). Both are synchronous pure-data
/// operations; only the fetch driven by [`refresh`](Self::refresh) touches
/// the network.
#[derive(Debug, Default)]
pub struct BoardStore {
    /// `None` until the first successful load.
    columns: Option<Columns>,

    /// True while a fetch is in flight.
    loading: bool,

    /// Message from the most recent failed fetch. Cleared when a refresh
    /// begins and on success.
    last_error: Option<String>,

    /// Sequence number of the most recently issued refresh ticket.
    latest_seq: u64,
}

impl BoardStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a board has been loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.columns.is_some()
    }

    /// The three columns, if loaded.
    #[must_use]
    pub fn columns(&self) -> Option<&Columns> {
        self.columns.as_ref()
    }

    /// One column by id, if loaded.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.as_ref().map(|columns| columns.get(id))
    }

    /// Whether a fetch is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The most recent fetch failure, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Total issue count across all columns. Zero while Empty.
    #[must_use]
    pub fn total_issues(&self) -> usize {
        self.columns
            .as_ref()
            .map_or(0, Columns::total_issues)
    }

    /// Locate an issue anywhere on the board.
    #[must_use]
    pub fn find_issue(&self, issue_id: IssueId) -> Option<(ColumnId, &Issue)> {
        self.columns
            .as_ref()
            .and_then(|columns| columns.find_issue(issue_id))
    }

    /// Locate an issue by its human-facing number.
    #[must_use]
    pub fn find_by_number(&self, number: u64) -> Option<(ColumnId, &Issue)> {
        self.columns
            .as_ref()
            .and_then(|columns| columns.find_by_number(number))
    }

    /// Replace all three columns with a fresh classification of `issues`.
    ///
    /// Full overwrite, not a merge: any issue previously relocated by a
    /// local move reverts to its classification-derived column.
    pub fn load(&mut self, issues: Vec<Issue>) {
        let columns = classify(issues);
        tracing::debug!(
            todo = columns.todo.issues.len(),
            in_progress = columns.in_progress.issues.len(),
            done = columns.done.issues.len(),
            "board loaded"
        );
        self.columns = Some(columns);
    }

    /// Relocate one issue from `from` to the end of `to`.
    ///
    /// Safe no-op when `from == to`, when the store is Empty, or when the
    /// issue is not currently in `from` (stale caller state). Never panics,
    /// never duplicates or drops an issue. The remaining issues in `from`
    /// keep their relative order.
    pub fn move_issue(&mut self, issue_id: IssueId, from: ColumnId, to: ColumnId) {
        if from == to {
            return;
        }

        let Some(columns) = self.columns.as_mut() else {
            tracing::debug!(%issue_id, "move ignored: board not loaded");
            return;
        };

        let Some(position) = columns.get(from).position_of(issue_id) else {
            tracing::debug!(%issue_id, %from, %to, "move ignored: issue not in source column");
            return;
        };

        let issue = columns.get_mut(from).issues.remove(position);
        columns.get_mut(to).issues.push(issue);
        tracing::debug!(%issue_id, %from, %to, "issue moved");
    }

    /// Start a refresh: mark the store loading, clear the previous error,
    /// and issue a ticket for the fetch about to run.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_seq += 1;
        self.loading = true;
        self.last_error = None;
        RefreshTicket {
            seq: self.latest_seq,
        }
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// If a newer refresh has begun since the ticket was issued, the result
    /// is discarded entirely and `false` is returned. Otherwise a success
    /// replaces the board and a failure records the message while leaving
    /// the previously loaded columns visible.
    pub fn apply_fetch(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Issue>, String>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                ticket = ticket.seq,
                latest = self.latest_seq,
                "discarding stale fetch result"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(issues) => {
                self.load(issues);
                self.last_error = None;
            }
            Err(message) => {
                tracing::warn!(error = %message, "refresh failed");
                self.last_error = Some(message);
            }
        }
        true
    }

    /// Fetch from the gateway and apply the result.
    ///
    /// Convenience wrapper around [`begin_refresh`](Self::begin_refresh) and
    /// [`apply_fetch`](Self::apply_fetch) for callers that await the fetch
    /// in place.
    pub async fn refresh(&mut self, gateway: &dyn IssueGateway, repo: &RepoId) {
        let ticket = self.begin_refresh();
        let result = gateway
            .fetch_issues(repo)
            .await
            .map_err(|err| err.to_string());
        self.apply_fetch(ticket, result);
    }
}
