use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use relnotes::Result;
use std::io;

#[derive(Parser)]
#[command(name = "relnotes")]
#[command(author = "Couchbase Mobile Build Team <build@couchbase.com>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GitHub milestone release-notes compiler", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile release notes and create a draft release from a milestone
    Create(relnotes::cli::create::CreateArgs),

    /// Recompile the notes and update an existing draft release
    Update(relnotes::cli::update::UpdateArgs),

    /// Attach an asset to an existing release
    Attach(relnotes::cli::attach::AttachArgs),

    /// Publish the release notes and close the milestone
    Publish(relnotes::cli::publish::PublishArgs),

    /// Compile the notes and write the Markdown/XML artifacts locally
    Export(relnotes::cli::export::ExportArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Create(args) => relnotes::cli::create::run(&args).await?,
        Commands::Update(args) => relnotes::cli::update::run(&args).await?,
        Commands::Attach(args) => relnotes::cli::attach::run(&args).await?,
        Commands::Publish(args) => relnotes::cli::publish::run(&args).await?,
        Commands::Export(args) => relnotes::cli::export::run(&args).await?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}
