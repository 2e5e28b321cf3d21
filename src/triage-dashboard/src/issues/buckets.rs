//! Priority buckets keyed by board column.

use super::IssueRecord;
use std::collections::HashMap;

/// Issues grouped by the board columns they sit in.
///
/// An issue with cards in several columns appears in each of their buckets.
#[derive(Debug, Default)]
pub struct PriorityBuckets<'a> {
    buckets: HashMap<&'a str, Vec<&'a IssueRecord>>,
}

impl<'a> PriorityBuckets<'a> {
    /// Appends an issue to the bucket for `column`.
    pub fn insert(&mut self, column: &'a str, issue: &'a IssueRecord) {
        self.buckets.entry(column).or_default().push(issue);
    }

    /// Returns the issues in `column`, in insertion order.
    #[must_use]
    pub fn issues(&self, column: &str) -> &[&'a IssueRecord] {
        self.buckets.get(column).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of issues in `column`.
    #[must_use]
    pub fn count(&self, column: &str) -> usize {
        self.issues(column).len()
    }

    /// Returns the number of distinct columns seen.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.buckets.len()
    }
}
