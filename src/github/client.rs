use std::time::Duration;

use anyhow::{Context, Result};
use http::header::AUTHORIZATION;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;

pub const GITHUB_API_URL: &str = "https://api.github.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create a GitHub client against `base_uri`, authenticated with a
/// personal access token.
///
/// Requests are sent once: the client's built-in retry is disabled.
pub fn create_client_with_base_uri(token: &str, base_uri: &str) -> Result<Octocrab> {
    // Install rustls crypto provider (required for rustls 0.23+); a provider
    // already installed by an earlier call is kept.
    let _ = rustls::crypto::ring::default_provider().install_default();

    Octocrab::builder()
        .base_uri(base_uri)
        .with_context(|| format!("Invalid GitHub API URL: {}", base_uri))?
        .add_header(AUTHORIZATION, format!("token {}", token))
        .add_retry_config(RetryConfig::None)
        .set_connect_timeout(Some(REQUEST_TIMEOUT))
        .set_read_timeout(Some(REQUEST_TIMEOUT))
        .build()
        .context("Failed to create GitHub client")
}
