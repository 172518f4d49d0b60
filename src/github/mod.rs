//! GitHub REST API surface.
//!
//! The notes core consumes the hosting API through the [`HostingClient`]
//! trait, which keeps the compilation engine testable against an in-memory
//! implementation. [`GitHubClient`] is the real reqwest-backed client and
//! additionally carries the release plumbing used by the CLI verbs.

pub mod client;
pub mod types;

pub use client::GitHubClient;

use crate::models::{Issue, Milestone};
use async_trait::async_trait;

/// Failure of a remote call. The notes core treats every variant as fatal
/// for the current run; no retries are attempted.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// The hosting-API collaborator consumed by the notes core.
#[async_trait]
pub trait HostingClient: Send + Sync {
    /// All milestones for the repository, open and closed.
    async fn milestones(&self) -> Result<Vec<Milestone>, ApiError>;

    /// All issues assigned to a milestone, open and closed, oldest first.
    async fn issues_for_milestone(&self, milestone: &Milestone) -> Result<Vec<Issue>, ApiError>;

    /// Commits reachable from `to_ref` but not from `from_ref`.
    async fn commits_ahead(&self, from_ref: &str, to_ref: &str) -> Result<u64, ApiError>;
}
