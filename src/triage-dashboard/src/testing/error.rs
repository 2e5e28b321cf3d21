//! Testing stats error types.

use thiserror::Error;

/// Errors that can occur while summarizing testing progress.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// No tracked doc tests, so completion percentages are undefined.
    #[error("No tracked doc tests, cannot compute completion percentages")]
    NoTrackedTests,
}
