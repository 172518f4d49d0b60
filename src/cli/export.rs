use crate::cli::{fetch_spinner, RepoArgs};
use crate::github::GitHubClient;
use crate::notes::{DocumentDialect, NotesBuilder};
use crate::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Write the Markdown artifact here instead of stdout
    #[arg(short = 'O', long)]
    pub output: Option<PathBuf>,

    /// Also write the documentation-XML artifact to this path
    #[arg(short = 'x', long)]
    pub xml: Option<PathBuf>,

    /// Override the XML wrapper dialect (defaults by repository name)
    #[arg(long, value_enum)]
    pub dialect: Option<DocumentDialect>,
}

/// Compile the notes and write the artifacts locally, without touching any
/// release object.
pub async fn run(args: &ExportArgs) -> Result<()> {
    let config = args.repo.resolve()?;
    let client = GitHubClient::new(&config)?;

    let spinner = fetch_spinner(&format!(
        "Compiling release notes for {}...",
        args.repo.milestone
    ));
    let mut builder = NotesBuilder::new(&client, &config, &args.repo.milestone);
    if let Some(dialect) = args.dialect {
        builder = builder.with_dialect(dialect);
    }
    let notes = builder.build().await?;
    spinner.finish_and_clear();

    match &args.output {
        Some(path) => {
            std::fs::write(path, &notes.markdown)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{}", format!("✅ Wrote {}", path.display()).green());
        }
        None => print!("{}", notes.markdown),
    }

    if let Some(path) = &args.xml {
        std::fs::write(path, &notes.xml)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("{}", format!("✅ Wrote {}", path.display()).green());
    }

    Ok(())
}
