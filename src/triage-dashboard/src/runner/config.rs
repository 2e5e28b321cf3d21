//! Runner configuration.

use crate::config::DashboardConfig;
use chrono::TimeDelta;
use std::path::{Path, PathBuf};

/// Default staleness threshold, in days.
pub const DEFAULT_STALE_DAYS: u32 = 3;

/// Configuration for a dashboard run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub token used for GraphQL queries.
    token: String,
    /// Path to the Google credentials file.
    credentials_path: PathBuf,
    /// Days after an edit during which an issue is flagged.
    stale_days: u32,
    /// Whether to print rows instead of writing them.
    dry_run: bool,
    /// Whether to append the pull request review summary.
    pull_requests: bool,
    /// Query and spreadsheet targets.
    dashboard: DashboardConfig,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(token: String, credentials_path: PathBuf, dashboard: DashboardConfig) -> Self {
        Self {
            token,
            credentials_path,
            stale_days: DEFAULT_STALE_DAYS,
            dry_run: false,
            pull_requests: false,
            dashboard,
        }
    }

    /// Sets the staleness threshold in days.
    pub fn with_stale_days(mut self, stale_days: u32) -> Self {
        self.stale_days = stale_days;
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enables or disables the pull request review summary.
    pub fn with_pull_requests(mut self, pull_requests: bool) -> Self {
        self.pull_requests = pull_requests;
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the Google credentials path.
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Returns the staleness threshold.
    pub fn stale_threshold(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.stale_days))
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns whether the pull request review summary is enabled.
    pub fn pull_requests(&self) -> bool {
        self.pull_requests
    }

    /// Returns the query and spreadsheet targets.
    pub fn dashboard(&self) -> &DashboardConfig {
        &self.dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_three_day_threshold() {
        let config = RunnerConfig::new(
            "token".to_string(),
            PathBuf::from("./credentials.json"),
            DashboardConfig::default(),
        );

        assert_eq!(config.stale_threshold(), TimeDelta::days(3));
        assert!(!config.dry_run());
        assert!(!config.pull_requests());
    }

    #[test]
    fn can_override_options() {
        let config = RunnerConfig::new(
            "token".to_string(),
            PathBuf::from("creds.json"),
            DashboardConfig::default(),
        )
        .with_stale_days(7)
        .with_dry_run(true)
        .with_pull_requests(true);

        assert_eq!(config.stale_threshold(), TimeDelta::days(7));
        assert!(config.dry_run());
        assert!(config.pull_requests());
        assert_eq!(config.credentials_path(), Path::new("creds.json"));
    }
}
