use std::collections::HashSet;

use crate::github::types::PullRequest;

/// Keep only PRs whose "owner/name" is one of `repos`, in their original order
pub fn filter_by_repos(prs: Vec<PullRequest>, repos: &[String]) -> Vec<PullRequest> {
    let wanted: HashSet<&str> = repos.iter().map(String::as_str).collect();
    prs.into_iter()
        .filter(|pr| wanted.contains(pr.repo.as_str()))
        .collect()
}
