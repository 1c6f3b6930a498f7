mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vantage_dash_core::ReviewReportKind;

#[derive(Parser)]
#[command(name = "vantage-dash")]
#[command(about = "Transaction reporting dashboard for ABBYY Vantage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard web server
    Serve {
        #[arg(short, long, default_value = "8000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Directory served under /static
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
        /// Report used to classify manual review (qa-documents|transaction-steps)
        #[arg(long, default_value = "qa-documents")]
        review_report: ReviewReportKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, static_dir, review_report } => {
            commands::serve::run(port, host, static_dir, review_report).await?;
        },
    }

    Ok(())
}
