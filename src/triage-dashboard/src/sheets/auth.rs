//! Google OAuth access tokens for the Sheets API.
//!
//! Accepts `authorized_user` credentials (as written by `gcloud auth application-default
//! login`) and exchanges the refresh token for an access token.

use super::SheetsError;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable holding a ready-to-use access token.
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_SHEETS_ACCESS_TOKEN";

/// Token endpoint used when the credentials file names none.
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Credentials type this module can exchange.
const AUTHORIZED_USER: &str = "authorized_user";

/// Raw credentials file; fields depend on `type`.
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    #[serde(rename = "type")]
    kind: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    refresh_token: Option<String>,
    token_uri: Option<String>,
}

/// OAuth client and refresh token for a user account.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizedUser {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    token_uri: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl AuthorizedUser {
    /// Loads credentials from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] if the file cannot be read or parsed, or holds
    /// anything other than `authorized_user` credentials.
    pub fn load(path: &Path) -> Result<Self, SheetsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SheetsError::CredentialsIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parses credentials JSON. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] if the content is not valid JSON, has the wrong
    /// type, or lacks a required field.
    pub fn parse(content: &str, origin: &str) -> Result<Self, SheetsError> {
        let file: CredentialsFile =
            serde_json::from_str(content).map_err(|e| SheetsError::CredentialsParse {
                path: origin.to_string(),
                source: e,
            })?;

        if file.kind != AUTHORIZED_USER {
            return Err(SheetsError::UnsupportedCredentials {
                path: origin.to_string(),
                message: format!(
                    "type '{}' is not supported, use '{AUTHORIZED_USER}' credentials or set {ACCESS_TOKEN_ENV}",
                    file.kind
                ),
            });
        }

        let required = |value: Option<String>, field: &str| {
            value
                .filter(|v| !v.is_empty())
                .ok_or_else(|| SheetsError::UnsupportedCredentials {
                    path: origin.to_string(),
                    message: format!("missing '{field}'"),
                })
        };

        Ok(Self {
            client_id: required(file.client_id, "client_id")?,
            client_secret: required(file.client_secret, "client_secret")?,
            refresh_token: required(file.refresh_token, "refresh_token")?,
            token_uri: file
                .token_uri
                .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
        })
    }

    /// Exchanges the refresh token for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the token endpoint rejects the request.
    pub async fn access_token(&self, http: &reqwest::Client) -> Result<String, SheetsError> {
        debug!(token_uri = %self.token_uri, "Refreshing Google access token");

        let response: TokenResponse = http
            .post(&self.token_uri)
            .form(&[
                ("grant_type", "refresh_token"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", self.refresh_token.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(expires_in = ?response.expires_in, "Obtained Google access token");
        Ok(response.access_token)
    }
}

/// Returns the access token from [`ACCESS_TOKEN_ENV`], if set and non-empty.
#[must_use]
pub fn env_access_token() -> Option<String> {
    std::env::var(ACCESS_TOKEN_ENV)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// Resolves an access token from the environment or the credentials file.
///
/// # Errors
///
/// Returns [`SheetsError`] if the credentials cannot be loaded or exchanged.
pub async fn resolve_access_token(
    http: &reqwest::Client,
    credentials_path: &Path,
) -> Result<String, SheetsError> {
    if let Some(token) = env_access_token() {
        debug!(env = ACCESS_TOKEN_ENV, "Using access token from environment");
        return Ok(token);
    }

    AuthorizedUser::load(credentials_path)?
        .access_token(http)
        .await
}
