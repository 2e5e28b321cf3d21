//! Run summary types and helpers.

mod result;
mod run_summary;

pub use result::WriteOutcome;
pub use run_summary::RunSummary;
