//! Dashboard configuration loading.
//!
//! Every identifier the dashboard touches (repositories, milestone, spreadsheets and
//! ranges) lives here rather than in the queries. A missing file section falls back
//! to the defaults in [`settings`].

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{GitHubSettings, SheetsSettings};

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Number of repositories whose recent issues feed the stats row.
pub const RECENT_ISSUE_REPOSITORY_COUNT: usize = 2;

/// Longest window, in days, for counting recently created issues.
pub const MAX_RECENT_WINDOW_DAYS: u32 = 3650;

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DashboardConfig {
    /// GitHub query targets.
    #[serde(default)]
    pub github: GitHubSettings,

    /// Spreadsheet targets.
    #[serde(default)]
    pub sheets: SheetsSettings,
}

impl DashboardConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading configuration");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config = Self::parse(&content, &path.display().to_string())?;
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration content. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the content is not valid TOML or fails validation.
    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: origin.to_string(),
            source: e,
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Replaces the dashboard spreadsheet id.
    pub fn with_dashboard_spreadsheet_id(mut self, spreadsheet_id: String) -> Self {
        self.sheets.dashboard_spreadsheet_id = spreadsheet_id;
        self
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first invalid value.
    pub fn validate(&self, origin: &str) -> Result<(), ConfigError> {
        let fail = |message: &str| {
            Err(ConfigError::ValidationError {
                path: origin.to_string(),
                message: message.to_string(),
            })
        };

        let github = &self.github;
        if github.owner.trim().is_empty() {
            return fail("github.owner cannot be empty");
        }
        if github.repository.trim().is_empty() {
            return fail("github.repository cannot be empty");
        }
        if github.milestone == 0 {
            return fail("github.milestone must be greater than zero");
        }
        if github.priorities.is_empty() {
            return fail("github.priorities cannot be empty");
        }
        if github.recent_issue_repositories.len() != RECENT_ISSUE_REPOSITORY_COUNT {
            return fail("github.recent-issue-repositories must name exactly two repositories");
        }
        if github
            .recent_issue_repositories
            .iter()
            .any(|repo| repo.trim().is_empty())
        {
            return fail("github.recent-issue-repositories cannot contain empty names");
        }
        if github.recent_window_days == 0 {
            return fail("github.recent-window-days must be greater than zero");
        }
        if github.recent_window_days > MAX_RECENT_WINDOW_DAYS {
            return fail(&format!(
                "github.recent-window-days cannot exceed {MAX_RECENT_WINDOW_DAYS}"
            ));
        }

        let sheets = &self.sheets;
        let required = [
            ("sheets.dashboard-spreadsheet-id", &sheets.dashboard_spreadsheet_id),
            ("sheets.issues-range", &sheets.issues_range),
            ("sheets.stats-range", &sheets.stats_range),
            ("sheets.pull-requests-range", &sheets.pull_requests_range),
            ("sheets.tracker-spreadsheet-id", &sheets.tracker_spreadsheet_id),
            ("sheets.tracker-range", &sheets.tracker_range),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return fail(&format!("{key} cannot be empty"));
            }
        }

        Ok(())
    }
}
