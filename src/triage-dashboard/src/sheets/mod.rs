//! Google Sheets v4 values client.
//!
//! Only the three calls the dashboard needs: clear a range, append rows to a
//! range, and read a range.

mod auth;
mod error;
mod values;

pub use auth::{env_access_token, resolve_access_token, AuthorizedUser, ACCESS_TOKEN_ENV};
pub use error::SheetsError;
pub use values::{cell_text, CellRow, ValueRange};

use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Base URL of the spreadsheets collection.
const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

/// Authenticated Google Sheets client.
pub struct SheetsClient {
    http: reqwest::Client,
    access_token: String,
    base_url: Url,
}

impl SheetsClient {
    /// Builds a client, resolving an access token from the environment or the
    /// credentials file.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] if no access token can be obtained.
    pub async fn connect(credentials_path: &Path) -> Result<Self, SheetsError> {
        let http = reqwest::Client::new();
        let access_token = resolve_access_token(&http, credentials_path).await?;
        Self::with_access_token(http, access_token)
    }

    /// Builds a client around an existing access token.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::InvalidUrl`] if the API base URL cannot be parsed.
    pub fn with_access_token(
        http: reqwest::Client,
        access_token: String,
    ) -> Result<Self, SheetsError> {
        Ok(Self {
            http,
            access_token,
            base_url: Url::parse(SHEETS_API_BASE)?,
        })
    }

    /// Clears every value in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] if the request fails.
    pub async fn clear(&self, spreadsheet_id: &str, range: &str) -> Result<(), SheetsError> {
        let url = self.values_url(spreadsheet_id, range, Some("clear"))?;
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        check_status(response).await?;

        info!(range, "Cleared range");
        Ok(())
    }

    /// Appends `rows` to `range`, overwriting cells below the existing table.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] if the request fails.
    pub async fn append(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<CellRow>,
    ) -> Result<(), SheetsError> {
        let mut url = self.values_url(spreadsheet_id, range, Some("append"))?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "OVERWRITE");

        let count = rows.len();
        let body = ValueRange {
            range: None,
            values: rows,
        };
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;
        check_status(response).await?;

        info!(range, rows = count, "Appended rows");
        Ok(())
    }

    /// Reads every row in `range`. Trailing empty cells are omitted by the API.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] if the request fails or the body is malformed.
    pub async fn read(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<CellRow>, SheetsError> {
        let url = self.values_url(spreadsheet_id, range, None)?;
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let response: ValueRange = check_status(response).await?.json().await?;

        debug!(range, rows = response.values.len(), "Read range");
        Ok(response.values)
    }

    /// Builds `{base}/{spreadsheet_id}/values/{range}[:{action}]`.
    fn values_url(
        &self,
        spreadsheet_id: &str,
        range: &str,
        action: Option<&str>,
    ) -> Result<Url, SheetsError> {
        let segment = match action {
            Some(action) => format!("{range}:{action}"),
            None => range.to_string(),
        };

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SheetsError::InvalidUrl {
                message: format!("{} cannot be a base", self.base_url),
            })?
            .pop_if_empty()
            .push(spreadsheet_id)
            .push("values")
            .push(&segment);
        Ok(url)
    }
}

/// Rows can be cleared from and appended to a spreadsheet range.
pub(crate) trait SheetWriter {
    async fn clear(&self, spreadsheet_id: &str, range: &str) -> Result<(), SheetsError>;

    async fn append(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<CellRow>,
    ) -> Result<(), SheetsError>;
}

impl SheetWriter for SheetsClient {
    async fn clear(&self, spreadsheet_id: &str, range: &str) -> Result<(), SheetsError> {
        SheetsClient::clear(self, spreadsheet_id, range).await
    }

    async fn append(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<CellRow>,
    ) -> Result<(), SheetsError> {
        SheetsClient::append(self, spreadsheet_id, range, rows).await
    }
}

/// Turns a non-success response into [`SheetsError::Status`], keeping the API's message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SheetsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(SheetsError::Status {
        status: status.as_u16(),
        message: api_error_message(&body),
    })
}

/// Extracts `error.message` from a Google API error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SheetsClient {
        SheetsClient::with_access_token(reqwest::Client::new(), "token".to_string()).unwrap()
    }

    #[test]
    fn builds_read_url() {
        let url = client()
            .values_url("abc", "'Testing week 2'!B:H", None)
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/'Testing%20week%202'!B:H"
        );
    }

    #[test]
    fn builds_action_url() {
        let url = client()
            .values_url("abc", "Issues!A2:F", Some("clear"))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/Issues!A2:F:clear"
        );
    }

    #[test]
    fn extracts_api_error_message() {
        let body = r#"{"error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}}"#;

        assert_eq!(api_error_message(body), "The caller does not have permission");
        assert_eq!(api_error_message("Bad Gateway\n"), "Bad Gateway");
    }

    #[test]
    fn escapes_slashes_in_ranges() {
        let url = client().values_url("abc", "A/B!A1", None).unwrap();
        assert!(url.as_str().ends_with("/values/A%2FB!A1"));
    }
}
