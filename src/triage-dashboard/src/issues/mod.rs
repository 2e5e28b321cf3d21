//! Milestone issue classification.
//!
//! Issues are grouped by the board columns their cards sit in, then emitted as one
//! dashboard row per (priority, issue) pair in a fixed priority order.

mod buckets;
mod record;
mod row;
mod status;

pub use buckets::PriorityBuckets;
pub use record::{Assignee, IssueRecord};
pub use row::IssueRow;
pub use status::{is_stale, STALE_MARKER};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::info;

/// Substring identifying an area label.
const AREA_LABEL_MARKER: &str = "area/";

/// Groups issues by board column.
///
/// This is a multi-map build: an issue is appended once for every column it sits in.
#[must_use]
pub fn classify(issues: &[IssueRecord]) -> PriorityBuckets<'_> {
    let mut buckets = PriorityBuckets::default();
    for issue in issues {
        for column in &issue.columns {
            buckets.insert(column, issue);
        }
    }
    buckets
}

/// Emits dashboard rows for the given priorities, in order.
///
/// Columns not listed in `priorities` are not emitted.
#[must_use]
pub fn emit_rows(
    buckets: &PriorityBuckets<'_>,
    priorities: &[String],
    threshold: TimeDelta,
    now: DateTime<Utc>,
) -> Vec<IssueRow> {
    let mut rows = Vec::new();

    for priority in priorities {
        let issues = buckets.issues(priority);
        info!(priority = %priority, count = issues.len(), "Open items in priority");

        for issue in issues {
            let stale = is_stale(issue.last_edited_at, threshold, now);
            if stale {
                info!(title = %issue.title, "Stale");
            }

            rows.push(IssueRow {
                priority: priority.clone(),
                url: issue.url.clone(),
                title: issue.title.clone(),
                area: area_label(&issue.labels).to_string(),
                assignees: assignee_names(&issue.assignees),
                stale,
            });
        }
    }

    rows
}

/// Returns the last label containing `area/`, or an empty string.
#[must_use]
pub fn area_label(labels: &[String]) -> &str {
    labels
        .iter()
        .rev()
        .find(|label| label.contains(AREA_LABEL_MARKER))
        .map_or("", String::as_str)
}

/// Joins assignee display names with commas.
///
/// A comma is only inserted once the accumulated string is non-empty, so leading
/// assignees without a display name leave no trace.
#[must_use]
pub fn assignee_names(assignees: &[Assignee]) -> String {
    assignees.iter().fold(String::new(), |mut names, assignee| {
        if !names.is_empty() {
            names.push(',');
        }
        names.push_str(&assignee.name);
        names
    })
}
