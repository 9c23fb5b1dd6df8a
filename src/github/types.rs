use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub title: String,
    pub number: u64,
    pub repo: String,           // "owner/repo" format
    pub url: String,            // HTML URL for browser
    pub created_at: DateTime<Utc>,
}

/// Open PRs of a single user, as returned by one query
#[derive(Debug, Clone, PartialEq)]
pub struct UserReport {
    /// Username as written in the settings file
    pub username: String,
    /// Profile name, or the login when the account has none
    pub display_name: String,
    pub login: String,
    /// Open PRs across all of GitHub, not only the first page
    pub total_count: u64,
    pub has_next_page: bool,
    pub pull_requests: Vec<PullRequest>,
}

impl UserReport {
    pub fn from_graphql(username: &str, user: GraphQLUser) -> Self {
        let display_name = user
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| user.login.clone());

        let pull_requests = user
            .pull_requests
            .nodes
            .into_iter()
            .map(|node| PullRequest {
                title: node.title,
                number: node.number,
                repo: node.repository.name_with_owner,
                url: node.url,
                created_at: node.created_at,
            })
            .collect();

        Self {
            username: username.to_string(),
            display_name,
            login: user.login,
            total_count: user.pull_requests.total_count,
            has_next_page: user.pull_requests.page_info.has_next_page,
            pull_requests,
        }
    }
}

// GraphQL response schema for the user pull request query

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    pub data: Option<GraphQLData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLData {
    pub user: Option<GraphQLUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLUser {
    pub name: Option<String>,
    pub login: String,
    pub pull_requests: GraphQLPullRequestConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLPullRequestConnection {
    pub total_count: u64,
    pub nodes: Vec<GraphQLPullRequest>,
    pub page_info: GraphQLPageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLPageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLPullRequest {
    pub repository: GraphQLRepository,
    pub created_at: DateTime<Utc>,
    pub number: u64,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRepository {
    pub name_with_owner: String,
}
