use std::fmt;

/// Environment variable consulted when the settings file carries no token
pub const ENV_TOKEN_VAR: &str = "GITHUB_TOKEN_GALAXY";

/// Check for a GitHub token in the GITHUB_TOKEN_GALAXY environment variable.
/// Returns Some(token) if the env var is set and non-empty, None otherwise.
pub fn get_token_from_env() -> Option<String> {
    normalize(std::env::var(ENV_TOKEN_VAR).ok())
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[derive(Debug, PartialEq)]
pub enum CredentialError {
    TokenNotFound,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::TokenNotFound => write!(
                f,
                "Please provide a GitHub API token via environment variable `{}` or via settings file.",
                ENV_TOKEN_VAR
            ),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Pick the settings token first, then the environment value.
pub fn resolve_token(
    settings_token: Option<&str>,
    env_token: Option<String>,
) -> Result<String, CredentialError> {
    normalize(settings_token.map(str::to_string))
        .or_else(|| normalize(env_token))
        .ok_or(CredentialError::TokenNotFound)
}

/// Resolve the token from settings, falling back to GITHUB_TOKEN_GALAXY
pub fn resolve_token_from_env(settings_token: Option<&str>) -> Result<String, CredentialError> {
    resolve_token(settings_token, get_token_from_env())
}
