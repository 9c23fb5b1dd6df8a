use chrono::{DateTime, Utc};

use crate::github::types::PullRequest;
use crate::output::palette::{Palette, Tone};
use crate::report::classify;

/// Width of the `=` and `-` rules
pub const RULE_WIDTH: usize = 80;

const NO_PULL_REQUESTS: &str = "No pull requests!";

/// Everything the renderer needs besides the data itself
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub palette: Palette,
    pub now: DateTime<Utc>,
    pub stale_after_days: u32,
}

/// Format one user's block of the report.
///
/// ```text
/// <display name>
/// ======== (80)
/// <title>
/// 🔗 <url>
/// -------- (80, between PRs only)
/// <title>
/// 🔗 <url>
/// <blank line>
/// ```
pub fn format_user_report(display_name: &str, prs: &[PullRequest], ctx: &RenderContext) -> String {
    let mut out = String::new();
    out.push_str(&ctx.palette.paint(display_name, Tone::Info));
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    if prs.is_empty() {
        out.push_str(NO_PULL_REQUESTS);
        out.push_str("\n\n");
        return out;
    }

    for (idx, pr) in prs.iter().enumerate() {
        let freshness = classify(pr.created_at, ctx.now, ctx.stale_after_days);
        out.push_str(&ctx.palette.paint(&pr.title, freshness.into()));
        out.push('\n');
        out.push_str(&format!("🔗 {}\n", pr.url));

        if idx + 1 == prs.len() {
            out.push('\n');
        } else {
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push('\n');
        }
    }

    out
}
