use anyhow::{bail, Context, Result};

use crate::recommend::ranker::DEFAULT_RECOMMENDATION_LIMIT;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Maximum number of jobs returned per recommendation call.
    pub recommendation_limit: usize,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let recommendation_limit = std::env::var("RECOMMENDATION_LIMIT")
            .unwrap_or_else(|_| DEFAULT_RECOMMENDATION_LIMIT.to_string())
            .parse::<usize>()
            .context("RECOMMENDATION_LIMIT must be a positive integer")?;
        if recommendation_limit == 0 {
            bail!("RECOMMENDATION_LIMIT must be at least 1");
        }

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recommendation_limit,
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
