//! Pull request review decision.

use serde::{Deserialize, Serialize};

/// Review decision GitHub reports for an open pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewDecision {
    /// Approved and waiting to merge.
    Approved,

    /// Changes were requested by a reviewer.
    ChangesRequested,

    /// A review is required before merging.
    ReviewRequired,
}

impl ReviewDecision {
    /// Returns the decision as GitHub spells it.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::ChangesRequested => "CHANGES_REQUESTED",
            Self::ReviewRequired => "REVIEW_REQUIRED",
        }
    }
}
