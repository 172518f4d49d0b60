use crate::cli::{fetch_spinner, upload_asset, RepoArgs};
use crate::github::types::ReleasePatch;
use crate::github::GitHubClient;
use crate::notes::NotesBuilder;
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct UpdateArgs {
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

/// Recompile the notes and replace the body of the existing release.
pub async fn run(args: &UpdateArgs) -> Result<()> {
    let config = args.repo.resolve()?;
    let client = GitHubClient::new(&config)?;

    let Some(release) = client.find_release(&args.repo.milestone).await? else {
        anyhow::bail!(
            "No release found for milestone '{}'. Run 'relnotes create' first.",
            args.repo.milestone
        );
    };
    println!(
        "   Found release '{}' (created {})",
        release.tag_name,
        release.created_at.format("%Y-%m-%d")
    );

    let spinner = fetch_spinner(&format!(
        "Compiling release notes for {}...",
        args.repo.milestone
    ));
    let notes = NotesBuilder::new(&client, &config, &args.repo.milestone)
        .build()
        .await?;
    spinner.finish_and_clear();

    let release = client
        .edit_release(
            release.id,
            &ReleasePatch {
                body: Some(&notes.markdown),
                target_commitish: args.target_commitish.as_deref(),
                ..Default::default()
            },
        )
        .await?;

    println!(
        "{}",
        format!("✅ Release notes updated: {}", release.html_url).green()
    );

    if let Some(asset) = &args.asset {
        upload_asset(&client, &release, asset).await?;
    }

    Ok(())
}
