use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use trivia_api::config::LoggingSettings;
use trivia_api::db::transfer::{export_data, import_data};
use trivia_api::db::{establish_connection, run_migrations, seed};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import categories and questions from a directory of CSV files
    Import { path: PathBuf },
    /// Export categories and questions to a directory of CSV files
    Export { path: PathBuf },
    /// Load the bundled sample categories and questions
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(&LoggingSettings::default()).context("Invalid LOG_LEVEL")?;
    let cli = Cli::parse();
    let pool = establish_connection(&cli.db_path.display().to_string(), 1)
        .await
        .context("Cannot connect to DB")?;
    run_migrations(&pool).await?;
    match cli.command {
        Commands::Export { path } => export_data(&pool, &path).await.context("Cannot export")?,
        Commands::Import { path } => import_data(&pool, &path).await.context("Cannot import")?,
        Commands::Seed => seed(&pool).await.context("Cannot seed")?,
    }
    Ok(())
}
