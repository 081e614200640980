mod avisos;
mod feed;
mod videos;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "paroquia-sync")]
#[command(about = "Sync the parish app's video and announcement feeds")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build videos.json from the channel's live, upcoming and recent videos
    Videos {
        /// Output file (defaults to PAROQUIA_VIDEOS_OUTPUT or videos.json)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the feed to stdout instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
    /// Build avisos.json from the published announcements spreadsheet
    Avisos {
        /// Output file (defaults to PAROQUIA_AVISOS_OUTPUT or avisos.json)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the feed to stdout instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = paroquia_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Videos { output, dry_run } => {
            let output = output.unwrap_or_else(|| config.videos_output.clone());
            videos::run_videos(&config, &output, dry_run).await
        }
        Commands::Avisos { output, dry_run } => {
            let output = output.unwrap_or_else(|| config.avisos_output.clone());
            avisos::run_avisos(&config, &output, dry_run).await
        }
    }
}
