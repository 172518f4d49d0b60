use crate::cli::RepoArgs;
use crate::github::types::ReleasePatch;
use crate::github::{GitHubClient, HostingClient};
use crate::models::ItemState;
use crate::Result;
use colored::Colorize;
use dialoguer::Confirm;

#[derive(Debug, clap::Args)]
pub struct PublishArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Close the milestone and flip the draft release to published.
pub async fn run(args: &PublishArgs) -> Result<()> {
    let config = args.repo.resolve()?;
    let client = GitHubClient::new(&config)?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Close milestone '{}' and publish the release?",
                args.repo.milestone
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("   Aborted.");
            return Ok(());
        }
    }

    let milestones = client.milestones().await?;
    match milestones
        .iter()
        .find(|milestone| milestone.title == args.repo.milestone)
    {
        Some(milestone) if milestone.state == ItemState::Open => {
            client.close_milestone(milestone.number).await?;
            println!(
                "{}",
                format!("📦 Closed milestone '{}'", milestone.title).green()
            );
        }
        Some(_) => println!("   Milestone '{}' is already closed", args.repo.milestone),
        None => println!(
            "   Milestone '{}' not found; leaving milestones untouched",
            args.repo.milestone
        ),
    }

    let Some(release) = client.find_release(&args.repo.milestone).await? else {
        anyhow::bail!("No release found for milestone '{}'.", args.repo.milestone);
    };

    if release.draft {
        let release = client
            .edit_release(
                release.id,
                &ReleasePatch {
                    draft: Some(false),
                    ..Default::default()
                },
            )
            .await?;
        println!(
            "{}",
            format!("✅ Release published: {}", release.html_url).green()
        );
    } else {
        println!("   Release '{}' is already published", release.tag_name);
    }

    Ok(())
}
