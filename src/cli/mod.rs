//! Command-line verbs.
//!
//! Each verb module exposes `pub async fn run(...)`. The verbs are thin
//! wrappers over the notes engine and the release plumbing; none of them
//! carry compilation logic of their own.

pub mod attach;
pub mod create;
pub mod export;
pub mod publish;
pub mod update;

use crate::config::{ConfigFile, RepoConfig};
use crate::github::types::ReleasePayload;
use crate::github::GitHubClient;
use crate::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Repository and milestone flags shared by every verb.
#[derive(Debug, clap::Args)]
pub struct RepoArgs {
    /// The owner of the repository
    #[arg(short, long)]
    pub owner: Option<String>,

    /// The name of the repository
    #[arg(short, long)]
    pub repository: Option<String>,

    /// The milestone to use
    #[arg(short, long)]
    pub milestone: String,

    /// GitHub token (defaults to the GITHUB_TOKEN environment variable)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Comparison base when the milestone has no predecessor
    #[arg(long)]
    pub default_branch: Option<String>,
}

impl RepoArgs {
    /// Merge flags with the settings files and the environment.
    pub fn resolve(&self) -> Result<RepoConfig> {
        let file = ConfigFile::load();

        let owner = self
            .owner
            .clone()
            .or(file.owner)
            .context("Repository owner not set. Pass --owner or add it to relnotes.toml.")?;
        let repository = self
            .repository
            .clone()
            .or(file.repository)
            .context("Repository name not set. Pass --repository or add it to relnotes.toml.")?;
        let token = self
            .token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok());
        let default_branch = self
            .default_branch
            .clone()
            .or(file.default_branch)
            .unwrap_or_else(|| "master".to_string());

        Ok(RepoConfig {
            owner,
            repository,
            token,
            default_branch,
        })
    }
}

/// Spinner shown while remote fetches are in flight.
pub(crate) fn fetch_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Read a local file and attach it to a release, reporting its digest.
pub(crate) async fn upload_asset(
    client: &GitHubClient,
    release: &ReleasePayload,
    path: &Path,
) -> Result<()> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read asset {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("Asset path has no usable file name")?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = format!("{:x}", hasher.finalize());

    client.upload_asset(release, file_name, bytes).await?;

    println!(
        "{}",
        format!("📦 Uploaded {} (sha256:{})", file_name, digest).green()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(milestone: &str) -> RepoArgs {
        RepoArgs {
            owner: Some("couchbase".to_string()),
            repository: Some("couchbase-lite-ios".to_string()),
            milestone: milestone.to_string(),
            token: Some("ghp_example".to_string()),
            default_branch: None,
        }
    }

    #[test]
    fn test_resolve_uses_flags() {
        let config = args("2.0.0").resolve().unwrap();
        assert_eq!(config.owner, "couchbase");
        assert_eq!(config.repository, "couchbase-lite-ios");
        assert_eq!(config.token.as_deref(), Some("ghp_example"));
        assert_eq!(config.default_branch, "master");
    }

    #[test]
    fn test_resolve_default_branch_override() {
        let mut repo_args = args("2.0.0");
        repo_args.default_branch = Some("main".to_string());
        let config = repo_args.resolve().unwrap();
        assert_eq!(config.default_branch, "main");
    }
}
