use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::layout::FontFamily;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file holding the resume record.
    pub data_file: PathBuf,
    pub font: FontFamily,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            data_file: PathBuf::from(env_or("RESUME_DATA_FILE", "resume_data.json")),
            font: env_or("RESUME_FONT", "times")
                .parse::<FontFamily>()
                .map_err(|e| anyhow!(e))
                .context("RESUME_FONT must be times or helvetica")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
