//! Orchestrates a dashboard refresh.
//!
//! A run is strictly sequential: classify milestone issues and rewrite the issues
//! range, aggregate testing progress and append the stats row, then optionally
//! append the pull request review summary. Fetch failures abort the run; write
//! failures are logged and recorded in the [`RunSummary`].

mod config;
mod error;
mod writes;

pub use config::{RunnerConfig, DEFAULT_STALE_DAYS};
pub use error::RunnerError;

use crate::github::GitHubSource;
use crate::issues::{classify, emit_rows, PriorityBuckets};
use crate::pull_requests::{summary_rows, ReviewDecision, ReviewSummary};
use crate::sheets::{CellRow, SheetsClient};
use crate::summary::RunSummary;
use crate::testing::{count_created_after, parse_doc_tests, StatsRow, TestStats};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, info_span, Instrument};
use writes::DashboardWrites;

/// Orchestrates a full dashboard refresh.
pub struct Runner {
    config: RunnerConfig,
    github: GitHubSource,
    sheets: SheetsClient,
}

impl Runner {
    /// Builds a runner, authenticating against GitHub and Google Sheets.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the dashboard configuration is invalid or
    /// either client cannot be built.
    pub async fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        config.dashboard().validate("runner configuration")?;
        let github = GitHubSource::new(
            config.token().to_string(),
            config.dashboard().github.clone(),
        )?;
        let sheets = SheetsClient::connect(config.credentials_path()).await?;
        Ok(Self {
            config,
            github,
            sheets,
        })
    }

    /// Executes the full refresh as of `now`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] on any fetch failure or when no doc tests are tracked.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        let dashboard = self.config.dashboard();

        let milestone = self.github.milestone_issues().await?;
        summary.milestone = milestone.title.clone();
        summary.issues_fetched = milestone.issues.len();

        let buckets = classify(&milestone.issues);
        let rows: Vec<CellRow> = emit_rows(
            &buckets,
            &dashboard.github.priorities,
            self.config.stale_threshold(),
            now,
        )
        .iter()
        .map(|row| row.to_cells())
        .collect();
        summary.issue_rows = rows.len();

        let outcome = self
            .writes()
            .replace_rows(&dashboard.sheets.issues_range, rows)
            .await;
        summary.record_write(outcome);

        let stats_row = self.testing_stats(now, &mut summary).await?;
        let outcome = self
            .writes()
            .append_rows(&dashboard.sheets.stats_range, vec![stats_row.to_cells()])
            .await;
        summary.record_write(outcome);

        if self.config.pull_requests() {
            self.pull_request_summary(&buckets, &mut summary).await?;
        }

        Ok(summary)
    }

    /// Reads the tracker sheet and recent issues and builds the stats row.
    async fn testing_stats(
        &self,
        now: DateTime<Utc>,
        summary: &mut RunSummary,
    ) -> Result<StatsRow, RunnerError> {
        let dashboard = self.config.dashboard();
        let span = info_span!("testing_stats", tracker = %dashboard.sheets.tracker_range);

        async {
            let rows = self
                .sheets
                .read(
                    &dashboard.sheets.tracker_spreadsheet_id,
                    &dashboard.sheets.tracker_range,
                )
                .await?;

            let tests = parse_doc_tests(&rows);
            let stats = TestStats::from_doc_tests(&tests);
            info!(
                participants = stats.participant_count(),
                claimed = stats.claimed_tests,
                unclaimed = stats.unclaimed,
                total = stats.total,
                p0 = ?stats.priority0,
                p1 = ?stats.priority1,
                p2 = ?stats.priority2,
                "Aggregated testing stats"
            );
            summary.tracked_tests = stats.total;
            summary.participants = stats.participant_count();

            let since = now - TimeDelta::days(i64::from(dashboard.github.recent_window_days));
            let mut recent_issues = [0usize; 2];
            for (count, repository) in recent_issues
                .iter_mut()
                .zip(&dashboard.github.recent_issue_repositories)
            {
                let issues = self.github.issues_updated_since(repository, since).await?;
                *count = count_created_after(&issues, since);
                info!(repo = %repository, created = *count, "Counted new issues");
                summary.recent_issues.push((repository.clone(), *count));
            }

            Ok(StatsRow::new(now.date_naive(), stats, recent_issues)?)
        }
        .instrument(span)
        .await
    }

    /// Fetches open pull requests and appends the review summary block.
    async fn pull_request_summary(
        &self,
        buckets: &PriorityBuckets<'_>,
        summary: &mut RunSummary,
    ) -> Result<(), RunnerError> {
        let dashboard = self.config.dashboard();
        let pull_requests = self.github.open_pull_requests().await?;
        summary.pull_requests = Some(pull_requests.len());
        for pull_request in &pull_requests {
            debug!(
                title = %pull_request.title,
                url = %pull_request.url,
                review = pull_request
                    .review_decision
                    .as_ref()
                    .map_or("NONE", ReviewDecision::as_str),
                last_edited_at = ?pull_request.last_edited_at,
                labels = ?pull_request.labels,
                "Open pull request"
            );
        }

        let review = ReviewSummary::from_pull_requests(&pull_requests);
        info!(
            review_required = review.review_required,
            approved = review.approved,
            changes_requested = review.changes_requested,
            "Summarized pull request reviews"
        );

        let rows = summary_rows(
            &priority_counts(buckets, &dashboard.github.priorities),
            &dashboard.github.owner,
            &dashboard.github.repository,
            &review,
        );
        let outcome = self
            .writes()
            .append_rows(&dashboard.sheets.pull_requests_range, rows)
            .await;
        summary.record_write(outcome);
        Ok(())
    }

    fn writes(&self) -> DashboardWrites<'_, SheetsClient> {
        DashboardWrites::new(
            &self.sheets,
            &self.config.dashboard().sheets.dashboard_spreadsheet_id,
            self.config.dry_run(),
        )
    }
}

/// Issue counts per priority, in priority order.
fn priority_counts(buckets: &PriorityBuckets<'_>, priorities: &[String]) -> Vec<(String, usize)> {
    priorities
        .iter()
        .map(|priority| (priority.clone(), buckets.count(priority)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, DashboardConfig, MAX_RECENT_WINDOW_DAYS};
    use crate::issues::IssueRecord;
    use std::path::PathBuf;

    #[test]
    fn counts_follow_priority_order() {
        let issues = vec![
            IssueRecord {
                columns: vec!["P1".to_string(), "P0".to_string()],
                ..Default::default()
            },
            IssueRecord {
                columns: vec!["P1".to_string()],
                ..Default::default()
            },
        ];
        let buckets = classify(&issues);
        let priorities = vec!["P0".to_string(), "P1".to_string(), "P2".to_string()];

        assert_eq!(
            priority_counts(&buckets, &priorities),
            vec![
                ("P0".to_string(), 1),
                ("P1".to_string(), 2),
                ("P2".to_string(), 0)
            ]
        );
    }

    #[tokio::test]
    async fn rejects_unvalidated_dashboard_config() {
        let mut dashboard = DashboardConfig::default();
        dashboard.github.recent_window_days = MAX_RECENT_WINDOW_DAYS + 1;
        let config = RunnerConfig::new(
            "token".to_string(),
            PathBuf::from("missing-credentials.json"),
            dashboard,
        );

        let result = Runner::new(config).await;

        assert!(matches!(
            result,
            Err(RunnerError::Config(ConfigError::ValidationError { .. }))
        ));
    }
}
