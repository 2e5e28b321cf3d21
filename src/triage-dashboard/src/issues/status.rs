//! Issue staleness.

use chrono::{DateTime, TimeDelta, Utc};

/// Cell value written for a stale issue.
pub const STALE_MARKER: &str = "STALE";

/// Returns whether an issue counts as stale.
///
/// An issue is stale when `last_edited_at + threshold` is not strictly before `now`,
/// so an issue edited within the threshold is flagged and one edited earlier is not.
/// An issue that was never edited is never stale.
#[must_use]
pub fn is_stale(
    last_edited_at: Option<DateTime<Utc>>,
    threshold: TimeDelta,
    now: DateTime<Utc>,
) -> bool {
    match last_edited_at {
        Some(edited) => edited
            .checked_add_signed(threshold)
            .map_or(true, |deadline| deadline >= now),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn edited_within_threshold_is_stale() {
        let edited = now() - TimeDelta::days(1);
        assert!(is_stale(Some(edited), TimeDelta::days(3), now()));
    }

    #[test]
    fn edited_before_threshold_is_not_stale() {
        let edited = now() - TimeDelta::days(5);
        assert!(!is_stale(Some(edited), TimeDelta::days(3), now()));
    }

    #[test]
    fn deadline_equal_to_now_is_stale() {
        let edited = now() - TimeDelta::days(3);
        assert!(is_stale(Some(edited), TimeDelta::days(3), now()));
    }

    #[test]
    fn deadline_one_second_before_now_is_not_stale() {
        let edited = now() - TimeDelta::days(3) - TimeDelta::seconds(1);
        assert!(!is_stale(Some(edited), TimeDelta::days(3), now()));
    }

    #[test]
    fn never_edited_is_not_stale() {
        assert!(!is_stale(None, TimeDelta::days(3), now()));
    }
}
