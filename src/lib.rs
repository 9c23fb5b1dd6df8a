//! List the open pull requests of a set of GitHub users, limited to a
//! configured set of repositories, as a color-coded console report.

pub mod config;
pub mod credentials;
pub mod fetch;
pub mod github;
pub mod output;
pub mod report;
