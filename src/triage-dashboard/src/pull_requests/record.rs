//! Open pull request snapshot.

use super::ReviewDecision;
use chrono::{DateTime, Utc};

/// An open pull request as returned by GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// Pull request title.
    pub title: String,

    /// Pull request URL.
    pub url: String,

    /// Review decision; `None` when the repository requires no reviews.
    pub review_decision: Option<ReviewDecision>,

    /// Last time the description was edited, if ever.
    pub last_edited_at: Option<DateTime<Utc>>,

    /// Label names.
    pub labels: Vec<String>,
}
