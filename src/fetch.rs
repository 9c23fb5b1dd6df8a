use std::io::Write;

use anyhow::{Context, Result};
use octocrab::Octocrab;
use tracing::debug;

use crate::config::Settings;
use crate::github::fetch_user_prs;
use crate::output::{format_user_report, RenderContext};
use crate::report::filter_by_repos;

/// Outcome of a full run over the configured users
#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Users whose block was written
    pub reported: Vec<String>,
    /// Users whose fetch failed
    pub failed: Vec<String>,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetch, filter and render each configured user in turn.
///
/// Users are processed one at a time. A failed fetch is reported on stderr
/// and the run continues with the next user. Only write errors on `out`
/// abort the run.
pub async fn fetch_and_render<W: Write>(
    client: &Octocrab,
    settings: &Settings,
    ctx: &RenderContext,
    out: &mut W,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for username in &settings.usernames {
        let report = match fetch_user_prs(client, username).await {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to fetch pull requests for {}: {}", username, e);
                summary.failed.push(username.clone());
                continue;
            }
        };

        let fetched = report.pull_requests.len();
        let prs = filter_by_repos(report.pull_requests, &settings.repos);
        debug!("{}: {} of {} PRs in configured repos", username, prs.len(), fetched);
        for pr in &prs {
            let age = ctx.now - pr.created_at;
            debug!("  {}#{} opened {} days ago", pr.repo, pr.number, age.num_days());
        }

        let block = format_user_report(&report.display_name, &prs, ctx);
        out.write_all(block.as_bytes())
            .context("Failed to write report")?;
        summary.reported.push(username.clone());
    }

    out.flush().context("Failed to write report")?;
    Ok(summary)
}
