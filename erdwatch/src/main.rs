// erdwatch/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing) on stderr: stdout carries the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: ERD DRIFT GATE ---
        Commands::Check {
            source,
            generator,
            format,
            summary_file,
        } => commands::check::execute(source, generator, format, summary_file).await,

        // --- USE CASE: DRY RUN ---
        Commands::Prompt { source } => commands::prompt::execute(source),
    }
}
