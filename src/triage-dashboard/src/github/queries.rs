//! GraphQL documents and their response shapes.

use super::{GitHubError, Page};
use crate::issues::{Assignee, IssueRecord};
use crate::pull_requests::{PullRequestRecord, ReviewDecision};
use crate::rate_limit::RateLimitInfo;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Open issues of a milestone, with board columns, labels and assignees.
pub(crate) const MILESTONE_ISSUES_QUERY: &str = r#"
query($owner: String!, $name: String!, $milestone: Int!, $cursor: String) {
  repository(owner: $owner, name: $name) {
    milestone(number: $milestone) {
      title
      issues(first: 100, filterBy: {states: OPEN}, after: $cursor) {
        pageInfo { hasNextPage endCursor }
        edges {
          node {
            title
            url
            state
            projectCards { nodes { column { name } } }
            labels(first: 10) { nodes { name } }
            lastEditedAt
            assignees(first: 10) { edges { node { name login email } } }
          }
        }
      }
    }
  }
  rateLimit { limit cost remaining resetAt }
}
"#;

/// Issues updated since a timestamp, most recently updated first.
pub(crate) const ISSUES_SINCE_QUERY: &str = r#"
query($owner: String!, $name: String!, $since: DateTime!, $cursor: String) {
  repository(owner: $owner, name: $name) {
    issues(first: 100, after: $cursor, filterBy: {since: $since}, orderBy: {field: UPDATED_AT, direction: DESC}) {
      pageInfo { hasNextPage endCursor }
      edges { node { title createdAt } }
    }
  }
  rateLimit { limit cost remaining resetAt }
}
"#;

/// Open pull requests, most recently updated first.
pub(crate) const OPEN_PULL_REQUESTS_QUERY: &str = r#"
query($owner: String!, $name: String!, $cursor: String) {
  repository(owner: $owner, name: $name) {
    pullRequests(first: 100, after: $cursor, states: [OPEN], orderBy: {field: UPDATED_AT, direction: DESC}) {
      pageInfo { hasNextPage endCursor }
      edges {
        node {
          title
          url
          reviewDecision
          lastEditedAt
          labels(first: 10) { nodes { name } }
        }
      }
    }
  }
  rateLimit { limit cost remaining resetAt }
}
"#;

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Extracts the data, turning reported errors into [`GitHubError::Query`].
    pub fn into_data(self) -> Result<T, GitHubError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let messages = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GitHubError::Query { messages });
        }
        self.data.ok_or(GitHubError::EmptyResponse)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub(crate) struct Connection<T> {
    pub page_info: PageInfo,
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    /// Converts the connection into a [`Page`], mapping each node.
    pub fn into_page<U>(self, map: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.edges.into_iter().map(|edge| edge.node).map(map).collect(),
            has_next_page: self.page_info.has_next_page,
            end_cursor: self.page_info.end_cursor,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Edges<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Nodes<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Named {
    pub name: String,
}

// Milestone issues

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MilestoneIssuesData {
    pub repository: Option<MilestoneRepository>,
    pub rate_limit: Option<RateLimitInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MilestoneRepository {
    pub milestone: Option<Milestone>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Milestone {
    pub title: String,
    pub issues: Connection<IssueNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IssueNode {
    pub title: String,
    pub url: String,
    pub state: String,
    pub project_cards: Nodes<ProjectCard>,
    pub labels: Option<Nodes<Named>>,
    pub last_edited_at: Option<DateTime<Utc>>,
    pub assignees: Edges<AssigneeNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectCard {
    pub column: Option<Named>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssigneeNode {
    pub name: Option<String>,
    pub login: String,
    pub email: Option<String>,
}

impl From<IssueNode> for IssueRecord {
    fn from(node: IssueNode) -> Self {
        Self {
            title: node.title,
            url: node.url,
            state: node.state,
            columns: node
                .project_cards
                .nodes
                .into_iter()
                .filter_map(|card| card.column.map(|column| column.name))
                .collect(),
            labels: label_names(node.labels),
            last_edited_at: node.last_edited_at,
            assignees: node
                .assignees
                .edges
                .into_iter()
                .map(|edge| Assignee {
                    name: edge.node.name.unwrap_or_default(),
                    login: edge.node.login,
                    email: edge.node.email.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

fn label_names(labels: Option<Nodes<Named>>) -> Vec<String> {
    labels
        .map(|labels| labels.nodes.into_iter().map(|label| label.name).collect())
        .unwrap_or_default()
}

// Issues since

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IssuesSinceData {
    pub repository: Option<IssuesSinceRepository>,
    pub rate_limit: Option<RateLimitInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssuesSinceRepository {
    pub issues: Connection<CreatedIssue>,
}

/// An issue reduced to its creation time.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedIssue {
    /// Issue title.
    pub title: String,
    /// When the issue was opened.
    pub created_at: DateTime<Utc>,
}

// Pull requests

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PullRequestsData {
    pub repository: Option<PullRequestsRepository>,
    pub rate_limit: Option<RateLimitInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PullRequestsRepository {
    pub pull_requests: Connection<PullRequestNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PullRequestNode {
    pub title: String,
    pub url: String,
    pub review_decision: Option<ReviewDecision>,
    pub last_edited_at: Option<DateTime<Utc>>,
    pub labels: Option<Nodes<Named>>,
}

impl From<PullRequestNode> for PullRequestRecord {
    fn from(node: PullRequestNode) -> Self {
        Self {
            title: node.title,
            url: node.url,
            review_decision: node.review_decision,
            last_edited_at: node.last_edited_at,
            labels: label_names(node.labels),
        }
    }
}
