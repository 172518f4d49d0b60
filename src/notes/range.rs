//! Commit-range computation between the previous and target milestones.

use crate::config::RepoConfig;
use crate::github::{ApiError, HostingClient};
use crate::models::Milestone;

/// Ahead-by count and the browse link for the range.
#[derive(Debug, Clone)]
pub struct CommitRange {
    pub count: u64,
    pub url: String,
}

impl CommitRange {
    /// "1 commit" / "N commits".
    pub fn phrase(&self) -> String {
        pluralize(self.count, "commit")
    }
}

/// Ask the hosting API how many commits the target is ahead of its
/// predecessor (or of the default branch when there is none) and build the
/// matching comparison link.
pub async fn commits_between(
    client: &dyn HostingClient,
    config: &RepoConfig,
    previous: Option<&Milestone>,
    target: &Milestone,
) -> Result<CommitRange, ApiError> {
    let (from_ref, url) = match previous {
        Some(previous) => (
            previous.title.as_str(),
            format!(
                "https://github.com/{}/{}/compare/{}...{}",
                config.owner, config.repository, previous.title, target.title
            ),
        ),
        None => (
            config.default_branch.as_str(),
            format!(
                "https://github.com/{}/{}/commits/{}",
                config.owner, config.repository, target.title
            ),
        ),
    };

    let count = client.commits_ahead(from_ref, &target.title).await?;
    Ok(CommitRange { count, url })
}

/// Singular exactly at 1, plural otherwise (including 0).
pub fn pluralize(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
