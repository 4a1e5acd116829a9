//! Board core: column types, the classification engine, and the board
//! state store.
//!
//! This is the one part of plank with non-trivial invariants. After every
//! load and every move, each issue from the source set appears in exactly
//! one column's sequence: never duplicated, never dropped. All mutation is
//! funneled through [`BoardStore::load`] and [`BoardStore::move_issue`].

mod classify;
mod store;

pub use classify::{classify, classify_issue, PROGRESS_KEYWORD};
pub use store::{BoardStore, RefreshTicket};

use crate::domain::{ColumnId, Issue, IssueId};
use serde::Serialize;

/// One kanban column: identity, display title, ordered issues.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    /// Column identity.
    pub id: ColumnId,

    /// Fixed display title.
    pub title: String,

    /// Ordered sequence of issues currently assigned to this column.
    pub issues: Vec<Issue>,
}

impl Column {
    fn empty(id: ColumnId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            issues: Vec::new(),
        }
    }

    /// Position of an issue within this column, if present.
    #[must_use]
    pub fn position_of(&self, issue_id: IssueId) -> Option<usize> {
        self.issues.iter().position(|issue| issue.id == issue_id)
    }
}

/// The three columns of a loaded board.
#[derive(Debug, Clone, Serialize)]
pub struct Columns {
    /// To Do.
    pub todo: Column,

    /// In Progress.
    pub in_progress: Column,

    /// Done.
    pub done: Column,
}

impl Columns {
    /// Three empty columns.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            todo: Column::empty(ColumnId::Todo),
            in_progress: Column::empty(ColumnId::InProgress),
            done: Column::empty(ColumnId::Done),
        }
    }

    /// Shared access to a column by id.
    #[must_use]
    pub fn get(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Done => &self.done,
        }
    }

    /// Mutable access to a column by id.
    pub(crate) fn get_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        ColumnId::ALL.iter().map(|id| self.get(*id))
    }

    /// Total issue count across all three columns.
    #[must_use]
    pub fn total_issues(&self) -> usize {
        self.iter().map(|column| column.issues.len()).sum()
    }

    /// Locate an issue anywhere on the board.
    #[must_use]
    pub fn find_issue(&self, issue_id: IssueId) -> Option<(ColumnId, &Issue)> {
        self.iter().find_map(|column| {
            column
                .issues
                .iter()
                .find(|issue| issue.id == issue_id)
                .map(|issue| (column.id, issue))
        })
    }

    /// Locate an issue by its human-facing number.
    #[must_use]
    pub fn find_by_number(&self, number: u64) -> Option<(ColumnId, &Issue)> {
        self.iter().find_map(|column| {
            column
                .issues
                .iter()
                .find(|issue| issue.number == number)
                .map(|issue| (column.id, issue))
        })
    }
}
