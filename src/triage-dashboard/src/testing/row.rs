//! Daily stats row appended to the dashboard.

use super::{StatsError, TestStats};
use chrono::NaiveDate;
use serde_json::Value;

/// Format of the date cell.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day of testing progress plus newly created issue counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRow {
    /// Day the row was produced.
    pub date: NaiveDate,
    /// Aggregated testing progress.
    pub stats: TestStats,
    /// Claimed tests over all three tiers, as a truncated percentage of the total.
    pub tier_claimed_percent: usize,
    /// Claimed tests as a truncated percentage of the total.
    pub claimed_percent: usize,
    /// Newly created issues per configured repository, in configured order.
    pub recent_issues: [usize; 2],
}

impl StatsRow {
    /// Builds the row, computing the completion percentages.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::NoTrackedTests`] when `stats` has no tracked tests.
    pub fn new(
        date: NaiveDate,
        stats: TestStats,
        recent_issues: [usize; 2],
    ) -> Result<Self, StatsError> {
        let tier_claimed_percent = percent(stats.tier_claimed(), stats.total)?;
        let claimed_percent = percent(stats.claimed_tests, stats.total)?;
        Ok(Self {
            date,
            stats,
            tier_claimed_percent,
            claimed_percent,
            recent_issues,
        })
    }

    /// Converts the row into spreadsheet cells.
    #[must_use]
    pub fn to_cells(&self) -> Vec<Value> {
        let stats = &self.stats;
        let mut cells = vec![
            Value::from(self.date.format(DATE_FORMAT).to_string()),
            Value::from(stats.participant_count()),
            Value::from(stats.claimed_tests),
        ];
        for tier in [&stats.priority0, &stats.priority1, &stats.priority2] {
            cells.push(Value::from(tier.claimed));
            cells.push(Value::from(tier.done));
            cells.push(Value::from(tier.automated));
        }
        cells.push(Value::from(self.tier_claimed_percent));
        cells.push(Value::from(self.claimed_percent));
        cells.extend(self.recent_issues.iter().copied().map(Value::from));
        cells
    }
}

/// `part * 100 / total`, truncated.
fn percent(part: usize, total: usize) -> Result<usize, StatsError> {
    (part * 100)
        .checked_div(total)
        .ok_or(StatsError::NoTrackedTests)
}
