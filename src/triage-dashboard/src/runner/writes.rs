//! Dashboard writes.
//!
//! Write failures never abort a run. Each write yields a [`WriteOutcome`] that the
//! runner records in the run summary.

use crate::sheets::{cell_text, CellRow, SheetWriter};
use crate::summary::WriteOutcome;
use tracing::warn;

/// Writes rows into one dashboard spreadsheet.
pub(crate) struct DashboardWrites<'a, W> {
    writer: &'a W,
    spreadsheet_id: &'a str,
    dry_run: bool,
}

impl<'a, W: SheetWriter> DashboardWrites<'a, W> {
    pub(crate) fn new(writer: &'a W, spreadsheet_id: &'a str, dry_run: bool) -> Self {
        Self {
            writer,
            spreadsheet_id,
            dry_run,
        }
    }

    /// Clears `range` and writes `rows` into it. The append is skipped if the
    /// clear fails, so old rows are never mixed with new ones.
    pub(crate) async fn replace_rows(&self, range: &str, rows: Vec<CellRow>) -> WriteOutcome {
        if self.dry_run {
            return dry_run_outcome(range, &rows);
        }

        if let Err(e) = self.writer.clear(self.spreadsheet_id, range).await {
            warn!(range, error = %e, "Unable to clear sheet range");
            return WriteOutcome::Failed {
                range: range.to_string(),
                error: e.to_string(),
            };
        }

        self.append_rows(range, rows).await
    }

    /// Appends `rows` to `range`, recording rather than propagating failures.
    pub(crate) async fn append_rows(&self, range: &str, rows: Vec<CellRow>) -> WriteOutcome {
        if self.dry_run {
            return dry_run_outcome(range, &rows);
        }

        let count = rows.len();
        match self.writer.append(self.spreadsheet_id, range, rows).await {
            Ok(()) => WriteOutcome::Written {
                range: range.to_string(),
                rows: count,
            },
            Err(e) => {
                warn!(range, error = %e, "Unable to update data to sheet");
                WriteOutcome::Failed {
                    range: range.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }
}

fn dry_run_outcome(range: &str, rows: &[CellRow]) -> WriteOutcome {
    print_dry_run_preview(range, rows);
    WriteOutcome::Skipped {
        range: range.to_string(),
        rows: rows.len(),
    }
}

fn print_dry_run_preview(range: &str, rows: &[CellRow]) {
    println!("\n[DRY RUN] Would write {} rows to {range}", rows.len());
    for row in rows {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        println!("    {}", cells.join(" | "));
    }
}
