//! Aggregated testing progress.

use super::DocTest;
use std::collections::BTreeMap;

/// Priority tiers with their own counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    P0,
    P1,
    P2,
}

impl Tier {
    /// Maps a tracker priority string to a tier. Anything but exact "P0", "P1"
    /// and "P2" has no tier.
    #[must_use]
    pub fn from_priority(priority: &str) -> Option<Self> {
        match priority {
            "P0" => Some(Self::P0),
            "P1" => Some(Self::P1),
            "P2" => Some(Self::P2),
            _ => None,
        }
    }
}

/// Counters for one priority tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub claimed: usize,
    pub done: usize,
    pub automated: usize,
    pub total: usize,
}

impl TierCounts {
    fn record(&mut self, test: &DocTest) {
        self.claimed += usize::from(test.is_claimed());
        self.done += usize::from(test.is_done());
        self.automated += usize::from(test.is_automated());
        self.total += 1;
    }
}

/// Testing progress across all tracked doc tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestStats {
    /// Participant name to number of person fields naming them.
    pub participants: BTreeMap<String, usize>,

    /// Tracked tests that are claimed or done.
    pub claimed_tests: usize,

    /// Tracked tests nobody claimed, runs or finished.
    pub unclaimed: usize,

    /// Tracked tests.
    pub total: usize,

    pub priority0: TierCounts,
    pub priority1: TierCounts,
    pub priority2: TierCounts,
}

impl TestStats {
    /// Aggregates tracked doc tests.
    ///
    /// Callers pass only tracked rows; see [`DocTest::is_tracked`].
    #[must_use]
    pub fn from_doc_tests(tests: &[DocTest]) -> Self {
        let mut stats = Self::default();

        for test in tests {
            for name in test.participants() {
                *stats.participants.entry(name.to_string()).or_default() += 1;
            }

            if test.is_unclaimed() {
                stats.unclaimed += 1;
            }

            if let Some(tier) = Tier::from_priority(&test.priority) {
                stats.tier_mut(tier).record(test);
            }
        }

        stats.total = tests.len();
        stats.claimed_tests = stats.total - stats.unclaimed;
        stats
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut TierCounts {
        match tier {
            Tier::P0 => &mut self.priority0,
            Tier::P1 => &mut self.priority1,
            Tier::P2 => &mut self.priority2,
        }
    }

    /// Claimed tests summed over the three tiers.
    #[must_use]
    pub fn tier_claimed(&self) -> usize {
        self.priority0.claimed + self.priority1.claimed + self.priority2.claimed
    }

    /// Number of distinct participants.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_test(priority: &str, assigned: &str, in_progress: &str, done_by: &str) -> DocTest {
        DocTest {
            doc: "doc".to_string(),
            priority: priority.to_string(),
            automation: "TODO".to_string(),
            assigned: assigned.to_string(),
            in_progress: in_progress.to_string(),
            done_by: done_by.to_string(),
        }
    }

    #[test]
    fn same_person_in_two_fields_claims_once() {
        let stats = TestStats::from_doc_tests(&[doc_test("P0", "Alice", "Alice", "")]);

        assert_eq!(stats.priority0.claimed, 1);
        assert_eq!(stats.claimed_tests, 1);
        assert_eq!(stats.participants.get("Alice"), Some(&2));
        assert_eq!(stats.participant_count(), 1);
    }

    #[test]
    fn three_names_credit_three_participants() {
        let stats = TestStats::from_doc_tests(&[doc_test("P1", "alice", "bob", "carol")]);

        assert_eq!(stats.participant_count(), 3);
        assert_eq!(
            stats.priority1,
            TierCounts {
                claimed: 1,
                done: 1,
                automated: 0,
                total: 1,
            }
        );
    }

    #[test]
    fn unknown_priority_counts_only_overall() {
        let stats = TestStats::from_doc_tests(&[doc_test("P3", "alice", "", "")]);

        assert_eq!(stats.total, 1);
        assert_eq!(stats.claimed_tests, 1);
        assert_eq!(stats.participants.get("alice"), Some(&1));
        assert_eq!(stats.priority0, TierCounts::default());
        assert_eq!(stats.priority1, TierCounts::default());
        assert_eq!(stats.priority2, TierCounts::default());
        assert_eq!(stats.tier_claimed(), 0);
    }

    #[test]
    fn claimed_plus_unclaimed_equals_total() {
        let tests = vec![
            doc_test("P0", "", "", ""),
            doc_test("P0", "alice", "", ""),
            doc_test("P1", "", "", "bob"),
            doc_test("P2", "", "", ""),
            doc_test("", "", "carol", ""),
        ];

        let stats = TestStats::from_doc_tests(&tests);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.unclaimed, 2);
        assert_eq!(stats.claimed_tests + stats.unclaimed, stats.total);
        assert_eq!(
            stats.priority0.total + stats.priority1.total + stats.priority2.total,
            4
        );
    }

    #[test]
    fn done_only_row_counts_overall_but_not_tier_claimed() {
        let stats = TestStats::from_doc_tests(&[doc_test("P2", "", "", "dave")]);

        assert_eq!(stats.claimed_tests, 1);
        assert_eq!(stats.priority2.claimed, 0);
        assert_eq!(stats.priority2.done, 1);
    }

    #[test]
    fn tier_lookup_matches_fields() {
        let stats = TestStats::from_doc_tests(&[doc_test("P2", "alice", "", "")]);

        assert_eq!(stats.priority2.claimed, 1);
        assert_eq!(stats.priority0.total, 0);
        assert_eq!(Tier::from_priority("p0"), None);
    }

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(TestStats::from_doc_tests(&[]), TestStats::default());
    }
}
