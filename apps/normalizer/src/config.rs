use anyhow::{Context, Result};

/// Runtime configuration for the local runner, loaded from environment variables.
/// Every variable has a default; only malformed values are an error.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub run_id: String,
    pub function_name: String,
    pub memory_limit_mb: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            rust_log: env_or("RUST_LOG", "info"),
            run_id: env_or("RUN_ID", "local-test"),
            function_name: env_or("FUNCTION_NAME", "local-test"),
            memory_limit_mb: parse_memory_limit(&env_or("MEMORY_LIMIT_MB", "128"))?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_memory_limit(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .with_context(|| format!("MEMORY_LIMIT_MB must be a valid number, got '{raw}'"))
}
