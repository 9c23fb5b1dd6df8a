use serde::Deserialize;

use crate::github::client::GITHUB_API_URL;
use crate::report::DEFAULT_STALE_AFTER_DAYS;

/// Settings file as written on disk.
///
/// The required keys are optional here so a missing key can be reported by
/// name rather than as a generic TOML error.
#[derive(Debug, Default, Deserialize)]
pub struct RawSettings {
    pub usernames: Option<Vec<String>>,
    pub repos: Option<Vec<String>>,
    pub github_token: Option<String>,
    pub stale_after_days: Option<u32>,
    pub github_api_url: Option<String>,
}

/// Validated settings, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub usernames: Vec<String>,
    pub repos: Vec<String>,
    /// Token from the settings file. `None` when absent or blank.
    pub github_token: Option<String>,
    /// PRs older than this many days are shown as stale
    pub stale_after_days: u32,
    /// API root, e.g. for GitHub Enterprise Server
    pub github_api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            usernames: Vec::new(),
            repos: Vec::new(),
            github_token: None,
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
            github_api_url: GITHUB_API_URL.to_string(),
        }
    }
}
