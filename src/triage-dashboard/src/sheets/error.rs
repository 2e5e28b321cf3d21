//! Google Sheets error types.

use thiserror::Error;

/// Errors that can occur while talking to Google Sheets.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// HTTP transport or status error.
    #[error("Sheets API error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Sheets API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// A request URL could not be built.
    #[error("Invalid Sheets URL: {message}")]
    InvalidUrl { message: String },

    /// Failed to read the credentials file.
    #[error("Failed to read credentials '{path}': {source}")]
    CredentialsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the credentials file.
    #[error("Failed to parse credentials '{path}': {source}")]
    CredentialsParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Credentials are of a type that cannot be exchanged for a token here.
    #[error("Unsupported credentials in '{path}': {message}")]
    UnsupportedCredentials { path: String, message: String },
}

impl From<url::ParseError> for SheetsError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl {
            message: e.to_string(),
        }
    }
}
