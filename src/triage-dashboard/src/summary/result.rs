//! Sheet write outcomes.

/// Result of writing rows to one spreadsheet range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Rows were written.
    Written {
        /// Target range.
        range: String,
        /// Number of rows written.
        rows: usize,
    },

    /// Nothing was written because this is a dry run.
    Skipped {
        /// Target range.
        range: String,
        /// Number of rows that would have been written.
        rows: usize,
    },

    /// Writing failed; the run continued.
    Failed {
        /// Target range.
        range: String,
        /// Error message.
        error: String,
    },
}

impl WriteOutcome {
    /// Returns the target range.
    #[must_use]
    pub fn range(&self) -> &str {
        match self {
            Self::Written { range, .. } | Self::Skipped { range, .. } | Self::Failed { range, .. } => {
                range
            }
        }
    }

    /// Returns the outcome as a short status string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Written { .. } => "written",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }
}
