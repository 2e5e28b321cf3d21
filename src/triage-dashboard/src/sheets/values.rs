//! Spreadsheet cell values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A row of spreadsheet cells.
pub type CellRow = Vec<Value>;

/// Body of a Sheets `values` request or response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// A1 range the values cover.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// Cell rows; absent when the range is empty.
    #[serde(default)]
    pub values: Vec<CellRow>,
}

/// Renders a cell as text.
///
/// Strings are returned as-is, numbers and booleans in their display form, and
/// empty or null cells as an empty string.
#[must_use]
pub fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}
