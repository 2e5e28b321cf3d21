//! GitHub data source error types.

use thiserror::Error;

/// Errors that can occur while querying GitHub.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The GraphQL endpoint answered with errors.
    #[error("GraphQL query failed: {messages}")]
    Query { messages: String },

    /// The GraphQL response carried neither data nor errors.
    #[error("GraphQL response contained no data")]
    EmptyResponse,

    /// Repository does not exist or is not visible to the token.
    #[error("Repository {owner}/{name} not found")]
    RepositoryNotFound { owner: String, name: String },

    /// Milestone does not exist in the repository.
    #[error("Milestone {number} not found in {owner}/{name}")]
    MilestoneNotFound {
        owner: String,
        name: String,
        number: u32,
    },
}
