//! Configuration sections deserialized from the dashboard TOML file.

use serde::Deserialize;

/// Where issues and pull requests are read from on GitHub.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct GitHubSettings {
    /// Repository owner (user or organization).
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Repository holding the tracked milestone.
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Milestone number whose open issues are classified.
    #[serde(default = "default_milestone")]
    pub milestone: u32,

    /// Board columns emitted, in order.
    #[serde(default = "default_priorities")]
    pub priorities: Vec<String>,

    /// Repositories whose newly created issues are counted.
    #[serde(default = "default_recent_issue_repositories")]
    pub recent_issue_repositories: Vec<String>,

    /// Size of the newly created issue window, in days.
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: u32,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repository: default_repository(),
            milestone: default_milestone(),
            priorities: default_priorities(),
            recent_issue_repositories: default_recent_issue_repositories(),
            recent_window_days: default_recent_window_days(),
        }
    }
}

/// Spreadsheets and ranges the dashboard reads from and writes to.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SheetsSettings {
    /// Spreadsheet receiving the dashboard rows.
    #[serde(default = "default_dashboard_spreadsheet_id")]
    pub dashboard_spreadsheet_id: String,

    /// Range cleared and rewritten with one row per prioritized issue.
    #[serde(default = "default_issues_range")]
    pub issues_range: String,

    /// Range the daily testing stats row is appended to.
    #[serde(default = "default_stats_range")]
    pub stats_range: String,

    /// Range the pull request review summary is appended to.
    #[serde(default = "default_pull_requests_range")]
    pub pull_requests_range: String,

    /// Spreadsheet with the manually maintained doc-test assignments.
    #[serde(default = "default_tracker_spreadsheet_id")]
    pub tracker_spreadsheet_id: String,

    /// Range of the doc-test assignments, header row first.
    #[serde(default = "default_tracker_range")]
    pub tracker_range: String,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            dashboard_spreadsheet_id: default_dashboard_spreadsheet_id(),
            issues_range: default_issues_range(),
            stats_range: default_stats_range(),
            pull_requests_range: default_pull_requests_range(),
            tracker_spreadsheet_id: default_tracker_spreadsheet_id(),
            tracker_range: default_tracker_range(),
        }
    }
}

pub(crate) fn default_owner() -> String {
    "istio".to_string()
}

pub(crate) fn default_repository() -> String {
    "istio".to_string()
}

pub(crate) fn default_milestone() -> u32 {
    22
}

pub(crate) fn default_priorities() -> Vec<String> {
    ["Release Blocker", "P0", "P1", "P2", "> P2"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub(crate) fn default_recent_issue_repositories() -> Vec<String> {
    vec!["istio".to_string(), "istio.io".to_string()]
}

pub(crate) fn default_recent_window_days() -> u32 {
    7
}

pub(crate) fn default_dashboard_spreadsheet_id() -> String {
    "1OzEFguruX9vB6IJot2hk5f5B7D4N48VAOO61bEJQXy4".to_string()
}

pub(crate) fn default_issues_range() -> String {
    "Issues!A2:F".to_string()
}

pub(crate) fn default_stats_range() -> String {
    "Stats!A:P".to_string()
}

pub(crate) fn default_pull_requests_range() -> String {
    "Pull Requests!A:C".to_string()
}

pub(crate) fn default_tracker_spreadsheet_id() -> String {
    "1g6qsYnIkLHMXn210HkB3pJCGQMC4Adr7fqqlWLJ8uw4".to_string()
}

pub(crate) fn default_tracker_range() -> String {
    "'Testing week 2'!B:H".to_string()
}
