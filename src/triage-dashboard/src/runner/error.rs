//! Runner error types.

/// Errors that abort a dashboard run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub query errors.
    #[error(transparent)]
    GitHub(#[from] crate::github::GitHubError),

    /// Google Sheets authentication or read errors.
    #[error(transparent)]
    Sheets(#[from] crate::sheets::SheetsError),

    /// Testing stats could not be summarized.
    #[error(transparent)]
    Stats(#[from] crate::testing::StatsError),
}
