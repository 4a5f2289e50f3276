//! Service settings.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! TOML file (`trivia.toml` in the working directory unless a path is given),
//! and `TRIVIA__SECTION__KEY` environment variables, e.g.
//! `TRIVIA__SERVER__PORT=9000`. A `.env` file is loaded first.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
    pub max_connections: u32,
}

/// `level` takes `EnvFilter` directives, e.g. `info,sqlx=warn`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub span_events: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_owned(),
            span_events: false,
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("trivia").required(false),
        };
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("database.path", "trivia.db")?
            .set_default("database.max_connections", 5_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.span_events", false)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("TRIVIA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
