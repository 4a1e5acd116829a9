//! The classification engine.
//!
//! Pure partitioning of a flat issue sequence into the three columns.
//! Classification is total and deterministic; it never fails.

use super::Columns;
use crate::domain::{ColumnId, Issue, IssueState};

/// Substring matched case-insensitively against label names to detect
/// work-in-progress labels ("in progress", "Progress Report", ...).
pub const PROGRESS_KEYWORD: &str = "progress";

/// Classify one issue into its column.
///
/// Rule, first match wins:
///
/// 1. Closed issues go to Done unconditionally, even with assignees or a
///    progress label.
/// 2. Open issues with at least one assignee, or with any label whose name
///    contains `"progress"` (case-insensitive), go to In Progress.
/// 3. All remaining open issues go to To Do.
///
/// The two open-issue conditions are complements, so every issue lands in
/// exactly one column.
#[must_use]
pub fn classify_issue(issue: &Issue) -> ColumnId {
    match issue.state {
        IssueState::Closed => ColumnId::Done,
        IssueState::Open if in_progress_signal(issue) => ColumnId::InProgress,
        IssueState::Open => ColumnId::Todo,
    }
}

/// Partition `issues` into three column buckets.
///
/// Preserves the relative input order of issues within each bucket. The
/// output always contains every input issue exactly once.
#[must_use]
pub fn classify(issues: Vec<Issue>) -> Columns {
    let mut columns = Columns::empty();
    for issue in issues {
        let target = classify_issue(&issue);
        columns.get_mut(target).issues.push(issue);
    }
    columns
}

fn in_progress_signal(issue: &Issue) -> bool {
    !issue.assignees.is_empty()
        || issue
            .labels
            .iter()
            .any(|label| label.name.to_lowercase().contains(PROGRESS_KEYWORD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IssueId, Label, Reactions, User};
    use chrono::Utc;

    fn user(login: &str) -> User {
        User {
            id: 1,
            login: login.to_string(),
            avatar_url: format!("https://example.com/{login}.png"),
            html_url: format!("https://example.com/{login}"),
        }
    }

    fn label(name: &str) -> Label {
        Label {
            id: 1,
            name: name.to_string(),
            color: "ededed".to_string(),
            description: None,
        }
    }

    fn issue(id: u64, state: IssueState, assignees: Vec<User>, labels: Vec<Label>) -> Issue {
        let now = Utc::now();
        Issue {
            id: IssueId::new(id),
            number: id,
            title: format!("Issue {id}"),
            body: None,
            state,
            author: user("author"),
            assignees,
            labels,
            milestone: None,
            created_at: now,
            updated_at: now,
            closed_at: None,
            comments: 0,
            reactions: Reactions::default(),
            html_url: format!("https://example.com/issues/{id}"),
        }
    }

    #[test]
    fn open_issue_without_signals_is_todo() {
        let issue = issue(1, IssueState::Open, vec![], vec![]);
        assert_eq!(classify_issue(&issue), ColumnId::Todo);
    }

    #[test]
    fn open_issue_with_assignee_is_in_progress() {
        let issue = issue(1, IssueState::Open, vec![user("alice")], vec![]);
        assert_eq!(classify_issue(&issue), ColumnId::InProgress);
    }

    #[test]
    fn progress_label_substring_matches() {
        let issue = issue(1, IssueState::Open, vec![], vec![label("Progress Report")]);
        assert_eq!(classify_issue(&issue), ColumnId::InProgress);
    }

    #[test]
    fn progress_label_match_is_case_insensitive() {
        let issue = issue(1, IssueState::Open, vec![], vec![label("PROGRESS")]);
        assert_eq!(classify_issue(&issue), ColumnId::InProgress);
    }

    #[test]
    fn unrelated_label_stays_todo() {
        let issue = issue(1, IssueState::Open, vec![], vec![label("bug")]);
        assert_eq!(classify_issue(&issue), ColumnId::Todo);
    }

    #[test]
    fn closed_issue_is_done() {
        let issue = issue(1, IssueState::Closed, vec![], vec![]);
        assert_eq!(classify_issue(&issue), ColumnId::Done);
    }

    #[test]
    fn closed_short_circuits_assignees_and_labels() {
        let issue = issue(
            1,
            IssueState::Closed,
            vec![user("alice")],
            vec![label("in progress")],
        );
        assert_eq!(classify_issue(&issue), ColumnId::Done);
    }

    #[test]
    fn classify_partitions_without_loss_or_duplication() {
        let input = vec![
            issue(1, IssueState::Open, vec![], vec![]),
            issue(2, IssueState::Open, vec![user("bob")], vec![]),
            issue(3, IssueState::Closed, vec![], vec![]),
            issue(4, IssueState::Open, vec![], vec![label("in progress")]),
            issue(5, IssueState::Closed, vec![user("carol")], vec![]),
        ];
        let mut expected_ids: Vec<_> = input.iter().map(|i| i.id).collect();

        let columns = classify(input);

        assert_eq!(columns.total_issues(), 5);
        let mut seen: Vec<_> = columns
            .iter()
            .flat_map(|c| c.issues.iter().map(|i| i.id))
            .collect();
        seen.sort();
        expected_ids.sort();
        assert_eq!(seen, expected_ids);
    }

    #[test]
    fn classify_preserves_input_order_within_buckets() {
        let input = vec![
            issue(10, IssueState::Open, vec![], vec![]),
            issue(11, IssueState::Closed, vec![], vec![]),
            issue(12, IssueState::Open, vec![], vec![]),
            issue(13, IssueState::Open, vec![], vec![]),
            issue(14, IssueState::Closed, vec![], vec![]),
        ];

        let columns = classify(input);

        let todo_ids: Vec<_> = columns.todo.issues.iter().map(|i| i.id.0).collect();
        let done_ids: Vec<_> = columns.done.issues.iter().map(|i| i.id.0).collect();
        assert_eq!(todo_ids, vec![10, 12, 13]);
        assert_eq!(done_ids, vec![11, 14]);
    }

    #[test]
    fn classify_is_deterministic() {
        let input = vec![
            issue(1, IssueState::Open, vec![user("a")], vec![]),
            issue(2, IssueState::Open, vec![], vec![label("progress")]),
            issue(3, IssueState::Closed, vec![], vec![]),
        ];

        let first = classify(input.clone());
        let second = classify(input);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            let a_ids: Vec<_> = a.issues.iter().map(|i| i.id).collect();
            let b_ids: Vec<_> = b.issues.iter().map(|i| i.id).collect();
            assert_eq!(a_ids, b_ids);
        }
    }

    #[test]
    fn classify_empty_input_yields_empty_columns() {
        let columns = classify(vec![]);
        assert_eq!(columns.total_issues(), 0);
        for column in columns.iter() {
            assert!(column.issues.is_empty());
        }
    }
}
