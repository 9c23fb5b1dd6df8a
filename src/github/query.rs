use octocrab::Octocrab;
use tracing::{debug, warn};

use crate::github::error::FetchError;
use crate::github::types::{GraphQLResponse, UserReport};

/// First page of a user's open pull requests. Pagination is not followed.
pub const USER_PULL_REQUESTS_QUERY: &str = r#"
    query($login: String!) {
        user(login: $login) {
            name
            login
            pullRequests(first: 100, states: OPEN) {
                totalCount
                nodes {
                    repository {
                        id
                        nameWithOwner
                    }
                    createdAt
                    number
                    title
                    url
                }
                pageInfo {
                    hasNextPage
                    endCursor
                }
            }
        }
    }
"#;

pub fn create_graphql_query(login: &str) -> serde_json::Value {
    serde_json::json!({
        "query": USER_PULL_REQUESTS_QUERY,
        "variables": { "login": login }
    })
}

/// Decode a raw GraphQL response body into a [`UserReport`].
pub fn decode_response(username: &str, body: serde_json::Value) -> Result<UserReport, FetchError> {
    let response: GraphQLResponse = serde_json::from_value(body)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    let errors: Vec<String> = response
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect();

    let user = match response.data {
        Some(data) => data.user,
        None if !errors.is_empty() => return Err(FetchError::Api(errors)),
        None => return Err(FetchError::MalformedResponse("missing `data` field".to_string())),
    };

    match user {
        Some(user) => {
            for message in &errors {
                warn!("GraphQL warning for {}: {}", username, message);
            }
            Ok(UserReport::from_graphql(username, user))
        }
        None if !errors.is_empty() => Err(FetchError::Api(errors)),
        None => Err(FetchError::UserNotFound(username.to_string())),
    }
}

/// Fetch the open pull requests of `username` with a single GraphQL request
pub async fn fetch_user_prs(client: &Octocrab, username: &str) -> Result<UserReport, FetchError> {
    debug!("Querying open pull requests for {}", username);

    // `Octocrab::graphql` strips the envelope and folds `errors` into its own
    // error type, so post to the endpoint directly and decode the whole body.
    let query = create_graphql_query(username);
    let body: serde_json::Value = client.post("/graphql", Some(&query)).await?;
    let report = decode_response(username, body)?;

    debug!(
        "{}: {} open PRs, {} on first page",
        username,
        report.total_count,
        report.pull_requests.len()
    );

    if report.has_next_page {
        warn!(
            "{} has {} open pull requests; only the first {} were inspected",
            username,
            report.total_count,
            report.pull_requests.len()
        );
    }

    Ok(report)
}
