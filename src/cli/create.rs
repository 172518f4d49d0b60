use crate::cli::{fetch_spinner, upload_asset, RepoArgs};
use crate::github::types::NewRelease;
use crate::github::GitHubClient;
use crate::notes::NotesBuilder;
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct CreateArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Path to a file to include in the release
    #[arg(short, long)]
    pub asset: Option<PathBuf>,

    /// The commit to tag. Can be a branch or SHA; defaults to the
    /// repository's default branch
    #[arg(short = 'c', long)]
    pub target_commitish: Option<String>,
}

/// Compile release notes and create a draft release for the milestone.
pub async fn run(args: &CreateArgs) -> Result<()> {
    let config = args.repo.resolve()?;
    let client = GitHubClient::new(&config)?;

    let spinner = fetch_spinner(&format!(
        "Compiling release notes for {}...",
        args.repo.milestone
    ));
    let notes = NotesBuilder::new(&client, &config, &args.repo.milestone)
        .build()
        .await?;
    spinner.finish_and_clear();

    let release = client
        .create_release(&NewRelease {
            tag_name: &args.repo.milestone,
            name: &args.repo.milestone,
            body: &notes.markdown,
            draft: true,
            target_commitish: args.target_commitish.as_deref(),
        })
        .await?;

    println!(
        "{}",
        format!("✅ Draft release created: {}", release.html_url).green()
    );

    if let Some(asset) = &args.asset {
        upload_asset(&client, &release, asset).await?;
    }

    Ok(())
}
