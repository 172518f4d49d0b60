use crate::cli::{upload_asset, RepoArgs};
use crate::github::GitHubClient;
use crate::Result;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct AttachArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Path to the file to include in the release
    #[arg(short, long)]
    pub asset: PathBuf,
}

/// Upload an asset to the milestone's existing release.
pub async fn run(args: &AttachArgs) -> Result<()> {
    let config = args.repo.resolve()?;
    let client = GitHubClient::new(&config)?;

    let Some(release) = client.find_release(&args.repo.milestone).await? else {
        anyhow::bail!("No release found for milestone '{}'.", args.repo.milestone);
    };
    println!(
        "   Found release '{}' (created {})",
        release.tag_name,
        release.created_at.format("%Y-%m-%d")
    );

    upload_asset(&client, &release, &args.asset).await
}
