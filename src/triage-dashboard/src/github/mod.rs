//! GitHub GraphQL data source.
//!
//! Each query is fetched one page at a time through [`collect_pages`]; any failed
//! page aborts the whole fetch.

mod error;
mod pagination;
mod queries;

pub use error::GitHubError;
pub use pagination::Page;
pub use queries::CreatedIssue;

use crate::config::GitHubSettings;
use crate::issues::IssueRecord;
use crate::pull_requests::PullRequestRecord;
use crate::rate_limit::{log_rate_limit, RateLimitInfo};
use chrono::{DateTime, SecondsFormat, Utc};
use octocrab::Octocrab;
use pagination::{collect_pages, PagedQuery};
use queries::{
    GraphQlResponse, IssuesSinceData, MilestoneIssuesData, PullRequestsData, ISSUES_SINCE_QUERY,
    MILESTONE_ISSUES_QUERY, OPEN_PULL_REQUESTS_QUERY,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{info, info_span, Instrument};

/// Open issues of the configured milestone.
#[derive(Debug, Clone)]
pub struct MilestoneIssues {
    /// Milestone title.
    pub title: String,
    /// Every open issue in the milestone.
    pub issues: Vec<IssueRecord>,
}

/// Reads issues and pull requests from GitHub's GraphQL API.
pub struct GitHubSource {
    octocrab: Octocrab,
    settings: GitHubSettings,
}

impl GitHubSource {
    /// Builds an authenticated source for the configured repositories.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Api`] if the client cannot be built.
    pub fn new(token: String, settings: GitHubSettings) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self { octocrab, settings })
    }

    /// Fetches every open issue of the configured milestone.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if any page fails, or if the repository or
    /// milestone does not exist.
    pub async fn milestone_issues(&self) -> Result<MilestoneIssues, GitHubError> {
        let span = info_span!(
            "milestone_issues",
            owner = %self.settings.owner,
            repo = %self.settings.repository,
            milestone = self.settings.milestone
        );

        async {
            let mut query = MilestoneIssuesQuery {
                octocrab: &self.octocrab,
                settings: &self.settings,
                title: String::new(),
                rate_limit: None,
            };
            let issues = collect_pages(&mut query).await?;

            info!(milestone = %query.title, count = issues.len(), "Fetched milestone issues");
            if let Some(rate_limit) = &query.rate_limit {
                log_rate_limit(rate_limit);
            }

            Ok(MilestoneIssues {
                title: query.title,
                issues,
            })
        }
        .instrument(span)
        .await
    }

    /// Fetches the issues of `repository` updated since `since`.
    ///
    /// GitHub filters on update time, so the result may include issues created
    /// before `since`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if any page fails or the repository does not exist.
    pub async fn issues_updated_since(
        &self,
        repository: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<CreatedIssue>, GitHubError> {
        let span = info_span!("issues_since", owner = %self.settings.owner, repo = %repository);

        async {
            let mut query = IssuesSinceQuery {
                octocrab: &self.octocrab,
                owner: &self.settings.owner,
                repository,
                since: since.to_rfc3339_opts(SecondsFormat::Secs, true),
                rate_limit: None,
            };
            let issues = collect_pages(&mut query).await?;

            info!(count = issues.len(), "Retrieved issue history");
            if let Some(rate_limit) = &query.rate_limit {
                log_rate_limit(rate_limit);
            }
            Ok(issues)
        }
        .instrument(span)
        .await
    }

    /// Fetches every open pull request of the configured repository.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if any page fails or the repository does not exist.
    pub async fn open_pull_requests(&self) -> Result<Vec<PullRequestRecord>, GitHubError> {
        let span = info_span!(
            "open_pull_requests",
            owner = %self.settings.owner,
            repo = %self.settings.repository
        );

        async {
            let mut query = PullRequestsQuery {
                octocrab: &self.octocrab,
                settings: &self.settings,
                rate_limit: None,
            };
            let pull_requests = collect_pages(&mut query).await?;

            info!(count = pull_requests.len(), "Retrieved pull requests");
            if let Some(rate_limit) = &query.rate_limit {
                log_rate_limit(rate_limit);
            }
            Ok(pull_requests)
        }
        .instrument(span)
        .await
    }
}

/// Sends a GraphQL document and unwraps the response envelope.
async fn run_query<T: DeserializeOwned>(
    octocrab: &Octocrab,
    payload: &serde_json::Value,
) -> Result<T, GitHubError> {
    let response: GraphQlResponse<T> = octocrab.graphql(payload).await?;
    response.into_data()
}

struct MilestoneIssuesQuery<'a> {
    octocrab: &'a Octocrab,
    settings: &'a GitHubSettings,
    title: String,
    rate_limit: Option<RateLimitInfo>,
}

impl PagedQuery for MilestoneIssuesQuery<'_> {
    type Item = IssueRecord;

    fn describe(&self) -> String {
        format!(
            "milestone {} of {}/{}",
            self.settings.milestone, self.settings.owner, self.settings.repository
        )
    }

    async fn fetch_page(&mut self, cursor: Option<&str>) -> Result<Page<IssueRecord>, GitHubError> {
        let payload = json!({
            "query": MILESTONE_ISSUES_QUERY,
            "variables": {
                "owner": self.settings.owner,
                "name": self.settings.repository,
                "milestone": self.settings.milestone,
                "cursor": cursor,
            }
        });

        let data: MilestoneIssuesData = run_query(self.octocrab, &payload).await?;
        self.rate_limit = data.rate_limit;

        let repository = data.repository.ok_or_else(|| GitHubError::RepositoryNotFound {
            owner: self.settings.owner.clone(),
            name: self.settings.repository.clone(),
        })?;
        let milestone = repository
            .milestone
            .ok_or_else(|| GitHubError::MilestoneNotFound {
                owner: self.settings.owner.clone(),
                name: self.settings.repository.clone(),
                number: self.settings.milestone,
            })?;

        self.title = milestone.title;
        Ok(milestone.issues.into_page(IssueRecord::from))
    }
}

struct IssuesSinceQuery<'a> {
    octocrab: &'a Octocrab,
    owner: &'a str,
    repository: &'a str,
    since: String,
    rate_limit: Option<RateLimitInfo>,
}

impl PagedQuery for IssuesSinceQuery<'_> {
    type Item = CreatedIssue;

    fn describe(&self) -> String {
        format!(
            "issues of {}/{} since {}",
            self.owner, self.repository, self.since
        )
    }

    async fn fetch_page(&mut self, cursor: Option<&str>) -> Result<Page<CreatedIssue>, GitHubError> {
        let payload = json!({
            "query": ISSUES_SINCE_QUERY,
            "variables": {
                "owner": self.owner,
                "name": self.repository,
                "since": self.since,
                "cursor": cursor,
            }
        });

        let data: IssuesSinceData = run_query(self.octocrab, &payload).await?;
        self.rate_limit = data.rate_limit;

        let repository = data.repository.ok_or_else(|| GitHubError::RepositoryNotFound {
            owner: self.owner.to_string(),
            name: self.repository.to_string(),
        })?;
        Ok(repository.issues.into_page(|issue| issue))
    }
}

struct PullRequestsQuery<'a> {
    octocrab: &'a Octocrab,
    settings: &'a GitHubSettings,
    rate_limit: Option<RateLimitInfo>,
}

impl PagedQuery for PullRequestsQuery<'_> {
    type Item = PullRequestRecord;

    fn describe(&self) -> String {
        format!(
            "open pull requests of {}/{}",
            self.settings.owner, self.settings.repository
        )
    }

    async fn fetch_page(
        &mut self,
        cursor: Option<&str>,
    ) -> Result<Page<PullRequestRecord>, GitHubError> {
        let payload = json!({
            "query": OPEN_PULL_REQUESTS_QUERY,
            "variables": {
                "owner": self.settings.owner,
                "name": self.settings.repository,
                "cursor": cursor,
            }
        });

        let data: PullRequestsData = run_query(self.octocrab, &payload).await?;
        self.rate_limit = data.rate_limit;

        let repository = data.repository.ok_or_else(|| GitHubError::RepositoryNotFound {
            owner: self.settings.owner.clone(),
            name: self.settings.repository.clone(),
        })?;
        Ok(repository.pull_requests.into_page(PullRequestRecord::from))
    }
}
