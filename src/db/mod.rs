pub mod queries;
pub mod transfer;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

pub use queries::categories::Category;
pub use queries::questions::{NewQuestion, Question};

const SEED_SQL: &str = include_str!("seed.sql");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid question: {0}")]
    Validation(String),
    #[error("question {0} does not exist")]
    NotFound(i64),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub async fn establish_connection(path: &str, max_connections: u32) -> sqlx::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Loads the bundled sample categories and questions. Rows that already
/// exist are left untouched, so seeding twice is harmless.
pub async fn seed(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::raw_sql(SEED_SQL).execute(pool).await?;
    Ok(())
}
