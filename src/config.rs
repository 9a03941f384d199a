use anyhow::{Context, Result, bail};
use std::env;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Rate limiting, 0 disables it
    pub rate_limit_per_min: u32,

    pub log_dir: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            api_prefix: "/api/v1".to_string(),
            rate_limit_per_min: 1000,
            log_dir: "logs".to_string(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; missing keys fall back to [`Config::default`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_prefix = lookup("API_PREFIX").unwrap_or(defaults.api_prefix);
        if api_prefix.trim().is_empty() {
            bail!("API_PREFIX must not be empty");
        }

        let rate_limit_per_min = match lookup("RATE_LIMIT_PER_MIN") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("RATE_LIMIT_PER_MIN is not a valid number: {raw:?}"))?,
            None => defaults.rate_limit_per_min,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("LOG_LEVEL is not a valid level: {raw:?}"))?,
            None => defaults.log_level,
        };

        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or(defaults.server_addr),
            api_prefix,
            rate_limit_per_min,
            log_dir: lookup("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level,
        })
    }
}
