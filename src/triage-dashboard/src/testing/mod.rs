//! Community doc-testing progress.
//!
//! Reads the manually maintained tracker rows, keeps the tests that take part in
//! the effort, and aggregates per-tier and per-participant counts.

mod doc_test;
mod error;
mod row;
mod stats;

pub use doc_test::DocTest;
pub use error::StatsError;
pub use row::StatsRow;
pub use stats::{TestStats, Tier, TierCounts};

use crate::github::CreatedIssue;
use crate::sheets::CellRow;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Parses tracker rows into tracked doc tests.
///
/// The first row is the header and is skipped. Rows whose automation status is
/// empty or "N/A" are dropped.
#[must_use]
pub fn parse_doc_tests(rows: &[CellRow]) -> Vec<DocTest> {
    if rows.is_empty() {
        info!("No data found");
        return Vec::new();
    }

    let tests: Vec<DocTest> = rows
        .iter()
        .skip(1)
        .map(|row| DocTest::from_cells(row))
        .filter(DocTest::is_tracked)
        .collect();

    debug!(
        rows = rows.len() - 1,
        tracked = tests.len(),
        "Parsed doc tests"
    );
    tests
}

/// Counts issues created strictly after `since`.
///
/// The GitHub filter works on update time, so every issue is re-checked here.
#[must_use]
pub fn count_created_after(issues: &[CreatedIssue], since: DateTime<Utc>) -> usize {
    issues
        .iter()
        .filter(|issue| issue.created_at > since)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use serde_json::{json, Value};

    fn row(cells: &[&str]) -> CellRow {
        cells.iter().map(|cell| Value::from(*cell)).collect()
    }

    fn header() -> CellRow {
        row(&["doc", "pri", "auto", "assigned", "inprog", "done"])
    }

    #[test]
    fn single_row_end_to_end() {
        let rows = vec![header(), row(&["d1", "P0", "DONE", "alice", "", ""])];

        let stats = TestStats::from_doc_tests(&parse_doc_tests(&rows));

        assert_eq!(stats.participants.len(), 1);
        assert_eq!(stats.participants.get("alice"), Some(&1));
        assert_eq!(stats.claimed_tests, 1);
        assert_eq!(stats.total, 1);
        assert_eq!(
            stats.priority0,
            TierCounts {
                claimed: 1,
                done: 0,
                automated: 1,
                total: 1,
            }
        );
    }

    #[test]
    fn excludes_not_applicable_and_empty_status() {
        let rows = vec![
            header(),
            row(&["d1", "P0", "N/A", "alice", "bob", "carol"]),
            row(&["d2", "P0", "", "alice", "", ""]),
            row(&["d3", "P1"]),
            row(&["d4", "P1", "TODO"]),
        ];

        let tests = parse_doc_tests(&rows);
        let stats = TestStats::from_doc_tests(&tests);

        assert_eq!(tests.len(), 1);
        assert_eq!(tests[0].doc, "d4");
        assert!(stats.participants.is_empty());
        assert_eq!(stats.priority0, TierCounts::default());
        assert_eq!(stats.total, 1);
        assert_eq!(stats.unclaimed, 1);
        assert_eq!(stats.claimed_tests, 0);
    }

    #[test]
    fn header_only_and_empty_sheets_have_no_tests() {
        assert!(parse_doc_tests(&[]).is_empty());
        assert!(parse_doc_tests(&[header()]).is_empty());
    }

    #[test]
    fn numeric_cells_are_read_as_text() {
        let rows = vec![
            header(),
            vec![json!("d1"), json!("P2"), json!("DONE"), json!(42)],
        ];

        let tests = parse_doc_tests(&rows);

        assert_eq!(tests[0].assigned, "42");
    }

    #[test]
    fn counts_issues_created_strictly_after() {
        let since = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
        let issue = |created_at| CreatedIssue {
            title: "issue".to_string(),
            created_at,
        };
        let issues = vec![
            issue(since - TimeDelta::days(30)),
            issue(since),
            issue(since + TimeDelta::seconds(1)),
            issue(since + TimeDelta::days(2)),
        ];

        assert_eq!(count_created_after(&issues, since), 2);
        assert_eq!(count_created_after(&[], since), 0);
    }
}
