//! Open pull request review summary.
//!
//! Counts the configured repository's open pull requests by review decision and
//! lays the counts out next to the per-priority issue totals.

mod record;
mod status;

pub use record::PullRequestRecord;
pub use status::ReviewDecision;

use serde_json::Value;

/// Open pull requests counted by review decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewSummary {
    /// Waiting on a required review.
    pub review_required: usize,

    /// Approved but not yet merged.
    pub approved: usize,

    /// Changes requested by a reviewer.
    pub changes_requested: usize,
}

impl ReviewSummary {
    /// Tallies pull requests by review decision.
    ///
    /// Pull requests without a decision are not counted.
    #[must_use]
    pub fn from_pull_requests(pull_requests: &[PullRequestRecord]) -> Self {
        let mut summary = Self::default();
        for pull_request in pull_requests {
            match pull_request.review_decision {
                Some(ReviewDecision::Approved) => summary.approved += 1,
                Some(ReviewDecision::ReviewRequired) => summary.review_required += 1,
                Some(ReviewDecision::ChangesRequested) => summary.changes_requested += 1,
                None => {}
            }
        }
        summary
    }
}

/// Builds the pull request dashboard block.
///
/// One `"<priority> issues"` row per entry of `priority_counts`, each followed by a
/// blank row, then the review-required and ready-to-merge counts with links to the
/// matching GitHub searches.
#[must_use]
pub fn summary_rows(
    priority_counts: &[(String, usize)],
    owner: &str,
    repository: &str,
    summary: &ReviewSummary,
) -> Vec<Vec<Value>> {
    let mut rows = Vec::with_capacity(priority_counts.len() * 2 + 4);

    for (priority, count) in priority_counts {
        rows.push(vec![
            Value::from(format!("{priority} issues")),
            Value::from(*count),
        ]);
        rows.push(Vec::new());
    }

    rows.push(vec![
        Value::from(format!("{repository} PRs waiting on review")),
        Value::from(summary.review_required),
        Value::from(pulls_search_url(owner, repository, "required")),
    ]);
    rows.push(Vec::new());
    rows.push(vec![
        Value::from(format!("{repository} PRs waiting to merge")),
        Value::from(summary.approved),
        Value::from(pulls_search_url(owner, repository, "approved")),
    ]);
    rows.push(vec![Value::from(""), Value::from("")]);

    rows
}

/// Link to the open pull requests of a repository with the given review state.
fn pulls_search_url(owner: &str, repository: &str, review: &str) -> String {
    format!(
        "https://github.com/{owner}/{repository}/pulls?q=is%3Apr+is%3Aopen+sort%3Aupdated-desc+review%3A{review}"
    )
}
