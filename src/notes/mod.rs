//! Release-notes compilation engine.
//!
//! One [`NotesBuilder::build`] run fetches fresh milestone and issue
//! snapshots, resolves the commit range against the previous milestone,
//! classifies issues by label, and renders the Markdown and
//! documentation-XML artifacts. The run is sequential; the only suspension
//! points are the hosting-API calls, and any of their failures aborts the
//! run.

pub mod classify;
pub mod footer;
pub mod markdown;
pub mod range;
pub mod resolve;
pub mod xml;

pub use classify::{classify, Category, ClassifiedIssues};
pub use range::CommitRange;
pub use xml::DocumentDialect;

use crate::config::RepoConfig;
use crate::github::{ApiError, HostingClient};
use std::path::PathBuf;

/// Fatal compilation failures, surfaced once to the operator.
#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("Could not find milestone for '{0}'.")]
    MilestoneNotFound(String),

    #[error("GitHub data unavailable: {0}")]
    DataUnavailable(#[from] ApiError),
}

/// The two artifacts of one compilation run, owned by the caller.
#[derive(Debug, Clone)]
pub struct CompiledNotes {
    pub markdown: String,
    pub xml: String,
}

/// Compiles release notes for one milestone of one repository.
pub struct NotesBuilder<'a> {
    client: &'a dyn HostingClient,
    config: &'a RepoConfig,
    milestone_title: &'a str,
    dialect: DocumentDialect,
    footer_dir: PathBuf,
}

impl<'a> NotesBuilder<'a> {
    pub fn new(
        client: &'a dyn HostingClient,
        config: &'a RepoConfig,
        milestone_title: &'a str,
    ) -> Self {
        Self {
            client,
            config,
            milestone_title,
            dialect: DocumentDialect::for_repository(&config.repository),
            footer_dir: PathBuf::from("."),
        }
    }

    /// Override the XML wrapper dialect (defaults by repository name).
    pub fn with_dialect(mut self, dialect: DocumentDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Directory probed for `footer.md` / `footer.txt` /
    /// `{repository}-footer.xml`; defaults to the working directory.
    pub fn with_footer_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.footer_dir = dir.into();
        self
    }

    pub async fn build(&self) -> Result<CompiledNotes, NotesError> {
        let milestones = self.client.milestones().await?;
        let target = resolve::target(&milestones, self.milestone_title)?;

        let issues = classify(self.client.issues_for_milestone(target).await?);
        let previous = resolve::previous(&milestones, target);
        let commits = range::commits_between(self.client, self.config, previous, target).await?;

        let body = markdown::render_body(self.config, target, &issues, &commits);

        let mut markdown = body.clone();
        markdown.push_str(&footer::markdown_footer(&self.footer_dir));

        let xml_footer =
            footer::xml_footer(&self.footer_dir, &self.config.repository, &target.title);
        let xml = xml::render_xml(self.dialect, &target.title, &body, xml_footer.as_deref());

        Ok(CompiledNotes { markdown, xml })
    }
}
