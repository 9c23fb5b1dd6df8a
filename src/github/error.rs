use std::fmt;

use http::StatusCode;

/// Failure fetching one user's pull requests
#[derive(Debug)]
pub enum FetchError {
    /// Network, HTTP status or authentication failure
    Transport(octocrab::Error),
    /// GraphQL `errors` returned without a user
    Api(Vec<String>),
    UserNotFound(String),
    /// Response body does not match the expected schema
    MalformedResponse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(octocrab::Error::GitHub { source, .. }) => {
                let status = source.status_code;
                if status == StatusCode::UNAUTHORIZED {
                    write!(f, "Authentication failed. Your GitHub token may be invalid or expired.")
                } else if is_rate_limited(status, &source.message) {
                    write!(f, "GitHub API rate limit exceeded. Wait a few minutes and try again.")
                } else {
                    write!(f, "GitHub API error ({}): {}", status, source.message)
                }
            }
            FetchError::Transport(e) => write!(f, "GitHub API error: {}", e),
            FetchError::Api(messages) => write!(f, "GitHub GraphQL error: {}", messages.join("; ")),
            FetchError::UserNotFound(login) => write!(f, "GitHub user not found: {}", login),
            FetchError::MalformedResponse(detail) => {
                write!(f, "Malformed response from GitHub: {}", detail)
            }
        }
    }
}

/// GitHub answers 429, or 403 with a rate limit message, once the quota is spent
fn is_rate_limited(status: StatusCode, message: &str) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && message.to_lowercase().contains("rate limit"))
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<octocrab::Error> for FetchError {
    fn from(e: octocrab::Error) -> Self {
        FetchError::Transport(e)
    }
}
