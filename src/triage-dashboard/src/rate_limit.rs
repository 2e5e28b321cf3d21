//! GraphQL rate limit reporting.
//!
//! Every query requests the `rateLimit` object alongside its data. The counters are
//! only reported; the dashboard never waits on them.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

/// Remaining points below which a warning is logged.
const MIN_REMAINING_THRESHOLD: u32 = 100;

/// Rate limit counters returned with a GraphQL response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitInfo {
    /// Points allowed per window.
    pub limit: u32,
    /// Points the query cost.
    pub cost: u32,
    /// Points remaining in the current window.
    pub remaining: u32,
    /// When the window resets.
    pub reset_at: DateTime<Utc>,
}

impl RateLimitInfo {
    /// Returns true if the remaining budget is nearly exhausted.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.remaining < MIN_REMAINING_THRESHOLD
    }
}

/// Logs the rate limit counters.
pub fn log_rate_limit(info: &RateLimitInfo) {
    info!(
        limit = info.limit,
        cost = info.cost,
        remaining = info.remaining,
        reset_at = %info.reset_at,
        "Rate limits"
    );

    if info.is_low() {
        warn!(
            remaining = info.remaining,
            reset_at = %info.reset_at,
            "GraphQL rate limit nearly exhausted"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_deserialize_rate_limit() {
        let info: RateLimitInfo = serde_json::from_str(
            r#"{"limit":5000,"cost":1,"remaining":4999,"resetAt":"2024-05-01T12:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(info.limit, 5000);
        assert_eq!(info.cost, 1);
        assert_eq!(info.remaining, 4999);
        assert_eq!(info.reset_at.to_rfc3339(), "2024-05-01T12:00:00+00:00");
        assert!(!info.is_low());
    }

    #[test]
    fn detects_low_budget() {
        let info = RateLimitInfo {
            limit: 5000,
            cost: 1,
            remaining: 10,
            reset_at: DateTime::<Utc>::UNIX_EPOCH,
        };

        assert!(info.is_low());
    }
}
