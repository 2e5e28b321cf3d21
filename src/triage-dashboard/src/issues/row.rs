//! Output row for one prioritized issue.

use super::STALE_MARKER;
use serde_json::Value;

/// One dashboard row: an issue listed under one of its priorities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRow {
    /// Board column the issue was listed under.
    pub priority: String,
    /// Issue URL.
    pub url: String,
    /// Issue title.
    pub title: String,
    /// Last `area/` label, or empty.
    pub area: String,
    /// Comma separated assignee names.
    pub assignees: String,
    /// Whether the issue is flagged stale.
    pub stale: bool,
}

impl IssueRow {
    /// Converts the row into spreadsheet cells.
    #[must_use]
    pub fn to_cells(&self) -> Vec<Value> {
        vec![
            Value::from(self.priority.as_str()),
            Value::from(self.url.as_str()),
            Value::from(self.title.as_str()),
            Value::from(self.area.as_str()),
            Value::from(self.assignees.as_str()),
            Value::from(if self.stale { STALE_MARKER } else { "" }),
        ]
    }
}
