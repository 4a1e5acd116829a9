//! CLI value enums and domain type conversions.

use clap::ValueEnum;

use crate::domain::ColumnId;

/// Board column for CLI arguments.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnArg {
    /// Open issues nobody has picked up.
    Todo,
    /// Open issues with assignees or a progress label.
    #[value(name = "in-progress", alias = "in_progress")]
    InProgress,
    /// Closed issues.
    Done,
}

impl std::fmt::Display for ColumnArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ColumnId::from(*self).as_str())
    }
}

impl From<ColumnArg> for ColumnId {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::Todo => Self::Todo,
            ColumnArg::InProgress => Self::InProgress,
            ColumnArg::Done => Self::Done,
        }
    }
}
