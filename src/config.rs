use anyhow::{Context, Result};
use ::config::{Environment, Source};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    /// Side length of boards generated when the caller does not ask for one
    pub board_size: usize,
    /// Per-request solve budget; 0 disables the deadline
    pub solve_timeout_ms: u64,
}

impl Config {
    /// Load configuration from defaults, `.env` and `BOGGLE_*` variables,
    /// e.g. `BOGGLE_SERVER__PORT=8080`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_source(
            Environment::with_prefix("BOGGLE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    /// Load configuration from defaults overlaid with a single source
    pub fn from_source<T>(source: T) -> Result<Self>
    where
        T: Source + Send + Sync + 'static,
    {
        ::config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("game.dictionary_path", "./dictionary.txt")?
            .set_default("game.board_size", 4)?
            .set_default("game.solve_timeout_ms", 2000)?
            .add_source(source)
            .build()
            .context("failed to assemble configuration")?
            .try_deserialize()
            .context("configuration values are invalid")
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn solve_timeout(&self) -> Option<Duration> {
        (self.game.solve_timeout_ms > 0).then(|| Duration::from_millis(self.game.solve_timeout_ms))
    }
}
