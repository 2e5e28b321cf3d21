//! Issue snapshot consumed by the classifier.

use chrono::{DateTime, Utc};

/// A person assigned to an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignee {
    /// Display name; empty when the account has none set.
    pub name: String,
    /// Account login.
    pub login: String,
    /// Public email; empty when hidden.
    pub email: String,
}

/// An open milestone issue as returned by GitHub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueRecord {
    /// Issue title.
    pub title: String,

    /// Issue URL.
    pub url: String,

    /// Issue state (e.g., "OPEN").
    pub state: String,

    /// Names of the board columns the issue's cards sit in.
    pub columns: Vec<String>,

    /// Label names.
    pub labels: Vec<String>,

    /// Last time the issue body was edited, if ever.
    pub last_edited_at: Option<DateTime<Utc>>,

    /// Assigned users.
    pub assignees: Vec<Assignee>,
}
