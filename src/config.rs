//! Process configuration, read from the environment once at start-up.

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:database.sqlite";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: tracing::Level,
}

impl Config {
    /// Read `HOST`, `PORT`, `DATABASE_URL` and `LOG_LEVEL`, falling back to defaults
    /// for the unset ones.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {port}"))?,
            None => DEFAULT_PORT,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse()
                .with_context(|| format!("LOG_LEVEL must be a tracing level, got {level}"))?,
            None => tracing::Level::INFO,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            log_level,
        })
    }
}
