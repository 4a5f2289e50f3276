use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use trivia_api::config::Settings;
use trivia_api::db;
use trivia_api::server::app::{run_server, AppState};
use trivia_api::telemetry::init_tracing;
use trivia_api::trivia::QuestionPicker;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Settings file, defaults to ./trivia.toml when present
    #[clap(long)]
    config: Option<PathBuf>,
    /// Load the bundled sample questions before serving
    #[clap(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Cannot load settings")?;
    init_tracing(&settings.logging).context("Invalid logging.level")?;
    let pool = db::establish_connection(
        &settings.database.path,
        settings.database.max_connections,
    )
    .await
    .context("Cannot connect to DB")?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;
    if cli.seed {
        tracing::info!("Seeding sample questions...");
        db::seed(&pool).await?;
    }

    run_server(&settings, AppState::new(pool, QuestionPicker::from_entropy())).await
}
