#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod github;
pub mod issues;
pub mod pull_requests;
pub mod rate_limit;
pub mod runner;
pub mod sheets;
pub mod summary;
pub mod testing;

pub use config::{ConfigError, DashboardConfig, GitHubSettings, SheetsSettings};
pub use github::{CreatedIssue, GitHubError, GitHubSource, MilestoneIssues, Page};
pub use issues::{
    area_label, assignee_names, classify, emit_rows, is_stale, Assignee, IssueRecord, IssueRow,
    PriorityBuckets, STALE_MARKER,
};
pub use pull_requests::{summary_rows, PullRequestRecord, ReviewDecision, ReviewSummary};
pub use rate_limit::{log_rate_limit, RateLimitInfo};
pub use runner::{Runner, RunnerConfig, RunnerError, DEFAULT_STALE_DAYS};
pub use sheets::{CellRow, SheetsClient, SheetsError};
pub use summary::{RunSummary, WriteOutcome};
pub use testing::{
    count_created_after, parse_doc_tests, DocTest, StatsError, StatsRow, TestStats, Tier,
    TierCounts,
};
