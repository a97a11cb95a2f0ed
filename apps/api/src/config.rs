use anyhow::{Context, Result};

/// Service configuration loaded from environment variables.
/// The upstream people API is not configurable; see `people_client::PEOPLE_API_BASE`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// How many top-ranked candidates are flagged as "Most Recommended".
    pub recommended_count: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recommended_count: std::env::var("RECOMMENDED_COUNT")
                .unwrap_or_else(|_| DEFAULT_RECOMMENDED_COUNT.to_string())
                .parse::<usize>()
                .context("RECOMMENDED_COUNT must be a non-negative integer")?,
        })
    }
}

pub const DEFAULT_RECOMMENDED_COUNT: usize = 5;

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            recommended_count: DEFAULT_RECOMMENDED_COUNT,
        }
    }
}
