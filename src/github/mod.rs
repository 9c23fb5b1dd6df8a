pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{create_client_with_base_uri, GITHUB_API_URL};
pub use error::FetchError;
pub use query::fetch_user_prs;
pub use types::{PullRequest, UserReport};
