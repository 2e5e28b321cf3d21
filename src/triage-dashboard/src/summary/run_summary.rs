//! Run summary types.

use super::result::WriteOutcome;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Title of the classified milestone.
    pub milestone: String,

    /// Open milestone issues fetched.
    pub issues_fetched: usize,

    /// Rows emitted for prioritized issues.
    pub issue_rows: usize,

    /// Tracked doc tests.
    pub tracked_tests: usize,

    /// Distinct testing participants.
    pub participants: usize,

    /// Newly created issues per repository.
    pub recent_issues: Vec<(String, usize)>,

    /// Open pull requests fetched, when the review summary ran.
    pub pull_requests: Option<usize>,

    /// Outcome of every sheet write, in order.
    pub writes: Vec<WriteOutcome>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Records the outcome of a sheet write.
    pub fn record_write(&mut self, outcome: WriteOutcome) {
        self.writes.push(outcome);
    }

    /// Number of failed writes.
    #[must_use]
    pub fn writes_failed(&self) -> usize {
        self.writes
            .iter()
            .filter(|outcome| matches!(outcome, WriteOutcome::Failed { .. }))
            .count()
    }

    /// Returns true if any write failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.writes_failed() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_writes() {
        let mut summary = RunSummary::new(false);

        summary.record_write(WriteOutcome::Written {
            range: "Issues!A2:F".to_string(),
            rows: 12,
        });
        assert!(!summary.has_failures());

        summary.record_write(WriteOutcome::Failed {
            range: "Stats!A:P".to_string(),
            error: "403 Forbidden".to_string(),
        });

        assert_eq!(summary.writes.len(), 2);
        assert_eq!(summary.writes_failed(), 1);
        assert!(summary.has_failures());
    }

    #[test]
    fn dry_run_skips_are_not_failures() {
        let mut summary = RunSummary::new(true);
        summary.record_write(WriteOutcome::Skipped {
            range: "Issues!A2:F".to_string(),
            rows: 3,
        });

        assert!(summary.dry_run);
        assert!(!summary.has_failures());
    }
}
