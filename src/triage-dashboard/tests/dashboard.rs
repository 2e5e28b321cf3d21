use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use triage_dashboard::sheets::ValueRange;
use triage_dashboard::{
    classify, emit_rows, parse_doc_tests, Assignee, ConfigError, DashboardConfig, IssueRecord,
    StatsError, StatsRow, TestStats, TierCounts,
};

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

fn load_tracker() -> ValueRange {
    let content = std::fs::read_to_string(fixtures_root().join("tracker.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn aggregates_tracker_fixture() {
    let tracker = load_tracker();

    let tests = parse_doc_tests(&tracker.values);
    let stats = TestStats::from_doc_tests(&tests);

    assert_eq!(tests.len(), 6);
    assert_eq!(stats.total, 6);
    assert_eq!(stats.unclaimed, 1);
    assert_eq!(stats.claimed_tests, 5);
    assert_eq!(stats.participant_count(), 5);
    assert_eq!(stats.participants.get("alice"), Some(&3));
    assert_eq!(stats.participants.get("bob"), Some(&2));
    assert_eq!(stats.participants.get("carol"), None);
    assert_eq!(
        stats.priority0,
        TierCounts {
            claimed: 2,
            done: 1,
            automated: 1,
            total: 2,
        }
    );
    assert_eq!(
        stats.priority1,
        TierCounts {
            claimed: 0,
            done: 1,
            automated: 1,
            total: 2,
        }
    );
    assert_eq!(
        stats.priority2,
        TierCounts {
            claimed: 1,
            done: 1,
            automated: 1,
            total: 1,
        }
    );
}

#[test]
fn builds_stats_row_from_tracker_fixture() {
    let tracker = load_tracker();
    let stats = TestStats::from_doc_tests(&parse_doc_tests(&tracker.values));

    let row = StatsRow::new(now().date_naive(), stats, [14, 3]).unwrap();
    let cells = row.to_cells();

    assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
    assert_eq!(row.tier_claimed_percent, 50);
    assert_eq!(row.claimed_percent, 83);
    assert_eq!(cells.len(), 16);
    assert_eq!(cells[0], "2024-05-10");
    assert_eq!(cells[1], 5);
    assert_eq!(cells[2], 5);
    assert_eq!(cells[14], 14);
    assert_eq!(cells[15], 3);
}

#[test]
fn empty_tracker_cannot_build_stats_row() {
    let stats = TestStats::from_doc_tests(&parse_doc_tests(&[]));

    let result = StatsRow::new(now().date_naive(), stats, [0, 0]);

    assert_eq!(result, Err(StatsError::NoTrackedTests));
}

#[test]
fn classifies_milestone_issues() {
    let issues = vec![
        IssueRecord {
            title: "Sidecar crash".to_string(),
            url: "https://github.com/istio/istio/issues/10".to_string(),
            state: "OPEN".to_string(),
            columns: vec!["Release Blocker".to_string(), "P0".to_string()],
            labels: vec!["kind/bug".to_string(), "area/networking".to_string()],
            last_edited_at: Some(now() - TimeDelta::days(1)),
            assignees: vec![Assignee {
                name: "Alice".to_string(),
                login: "alice".to_string(),
                email: String::new(),
            }],
        },
        IssueRecord {
            title: "Docs typo".to_string(),
            url: "https://github.com/istio/istio/issues/11".to_string(),
            state: "OPEN".to_string(),
            columns: vec!["> P2".to_string()],
            labels: vec!["area/docs".to_string()],
            last_edited_at: Some(now() - TimeDelta::days(10)),
            assignees: Vec::new(),
        },
    ];
    let priorities = DashboardConfig::default().github.priorities;

    let buckets = classify(&issues);
    let rows = emit_rows(&buckets, &priorities, TimeDelta::days(3), now());
    let cells: Vec<_> = rows.iter().map(|row| row.to_cells()).collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(
        cells[0],
        vec![
            "Release Blocker",
            "https://github.com/istio/istio/issues/10",
            "Sidecar crash",
            "area/networking",
            "Alice",
            "STALE",
        ]
    );
    assert_eq!(cells[1][0], "P0");
    assert_eq!(
        cells[2],
        vec![
            "> P2",
            "https://github.com/istio/istio/issues/11",
            "Docs typo",
            "area/docs",
            "",
            "",
        ]
    );
}

#[test]
fn loads_config_fixture() {
    let config = DashboardConfig::load(&fixtures_root().join("dashboard.toml")).unwrap();

    assert_eq!(config.github.owner, "acme");
    assert_eq!(config.github.repository, "mesh");
    assert_eq!(config.github.milestone, 4);
    assert_eq!(config.github.priorities, vec!["Blocker", "P0", "P1"]);
    assert_eq!(config.github.recent_window_days, 7);
    assert_eq!(config.sheets.dashboard_spreadsheet_id, "dashboard-sheet");
    assert_eq!(config.sheets.tracker_range, "Tracker!B:H");
    assert_eq!(config.sheets.issues_range, "Issues!A2:F");
}

#[test]
fn rejects_invalid_config_fixture() {
    let result = DashboardConfig::load(&fixtures_root().join("broken.toml"));
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
