//! One line of the community doc-test tracker.

use crate::sheets::cell_text;
use serde_json::Value;

/// Automation status marking a row as not part of the test effort.
const NOT_APPLICABLE: &str = "N/A";

/// Automation status marking a test as automated.
const AUTOMATED: &str = "DONE";

/// A documentation test and the people working on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocTest {
    /// Document under test.
    pub doc: String,
    /// Priority tier (e.g., "P0").
    pub priority: String,
    /// Automation status (e.g., "DONE", "N/A").
    pub automation: String,
    /// Person who claimed the test.
    pub assigned: String,
    /// Person currently running the test.
    pub in_progress: String,
    /// Person who finished the test.
    pub done_by: String,
}

impl DocTest {
    /// Maps the first six cells positionally; missing cells are empty.
    #[must_use]
    pub fn from_cells(cells: &[Value]) -> Self {
        let cell = |index: usize| cells.get(index).map(cell_text).unwrap_or_default();
        Self {
            doc: cell(0),
            priority: cell(1),
            automation: cell(2),
            assigned: cell(3),
            in_progress: cell(4),
            done_by: cell(5),
        }
    }

    /// Returns whether the row takes part in the stats.
    #[must_use]
    pub fn is_tracked(&self) -> bool {
        !self.automation.is_empty() && self.automation != NOT_APPLICABLE
    }

    /// Returns whether someone is assigned to or running the test.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        !self.assigned.is_empty() || !self.in_progress.is_empty()
    }

    /// Returns whether the test was finished.
    #[must_use]
    pub fn is_done(&self) -> bool {
        !self.done_by.is_empty()
    }

    /// Returns whether the test is automated.
    #[must_use]
    pub fn is_automated(&self) -> bool {
        self.automation == AUTOMATED
    }

    /// Returns whether nobody is assigned to, running, or finished the test.
    #[must_use]
    pub fn is_unclaimed(&self) -> bool {
        !self.is_claimed() && !self.is_done()
    }

    /// Names credited for this test, one per non-empty person field.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        [&self.assigned, &self.in_progress, &self.done_by]
            .into_iter()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_cells_positionally() {
        let cells = vec![
            json!("install"),
            json!("P0"),
            json!("DONE"),
            json!("alice"),
            json!("bob"),
            json!("carol"),
            json!("ignored"),
        ];

        let test = DocTest::from_cells(&cells);

        assert_eq!(test.doc, "install");
        assert_eq!(test.priority, "P0");
        assert_eq!(test.automation, "DONE");
        assert_eq!(test.assigned, "alice");
        assert_eq!(test.in_progress, "bob");
        assert_eq!(test.done_by, "carol");
    }

    #[test]
    fn short_rows_leave_trailing_fields_empty() {
        let test = DocTest::from_cells(&[json!("install"), json!("P1"), json!("TODO")]);

        assert_eq!(test.automation, "TODO");
        assert_eq!(test.assigned, "");
        assert_eq!(test.in_progress, "");
        assert_eq!(test.done_by, "");
    }

    #[test]
    fn untracked_when_not_applicable_or_empty() {
        let mut test = DocTest::default();
        assert!(!test.is_tracked());

        test.automation = "N/A".to_string();
        assert!(!test.is_tracked());

        test.automation = "n/a".to_string();
        assert!(test.is_tracked());
    }

    #[test]
    fn automated_requires_exact_status() {
        let mut test = DocTest {
            automation: "DONE".to_string(),
            ..Default::default()
        };
        assert!(test.is_automated());

        test.automation = "Done".to_string();
        assert!(!test.is_automated());
    }

    #[test]
    fn done_without_claim_is_not_unclaimed() {
        let test = DocTest {
            automation: "TODO".to_string(),
            done_by: "carol".to_string(),
            ..Default::default()
        };

        assert!(!test.is_claimed());
        assert!(test.is_done());
        assert!(!test.is_unclaimed());
        assert_eq!(test.participants().collect::<Vec<_>>(), vec!["carol"]);
    }
}
