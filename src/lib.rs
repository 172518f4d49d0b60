// Relnotes - GitHub milestone release-notes compiler
// Reads a milestone's issues from the GitHub API and renders Markdown and
// documentation-XML release notes.

pub mod cli;
pub mod config;
pub mod github;
pub mod models;
pub mod notes;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use config::RepoConfig;
pub use github::{ApiError, GitHubClient, HostingClient};
pub use models::{Issue, ItemState, Milestone, MilestoneVersion};
pub use notes::{CompiledNotes, DocumentDialect, NotesBuilder, NotesError};
