use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::errors::InitError;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub career_dataset_path: PathBuf,
    pub culture_dataset_path: PathBuf,
    /// Fixed seed for Q-table training. `None` seeds from OS entropy.
    pub training_seed: Option<u64>,
    pub extraction_timeout: Duration,
    pub advisor_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            career_dataset_path: std::env::var("CAREER_DATASET_PATH")
                .unwrap_or_else(|_| "data/career_dataset.csv".to_string())
                .into(),
            culture_dataset_path: std::env::var("CULTURE_DATASET_PATH")
                .unwrap_or_else(|_| "data/company_culture.csv".to_string())
                .into(),
            training_seed: match std::env::var("TRAINING_SEED") {
                Ok(raw) => Some(
                    raw.parse::<u64>()
                        .context("TRAINING_SEED must be an unsigned integer")?,
                ),
                Err(_) => None,
            },
            extraction_timeout: Duration::from_secs(parse_env("EXTRACTION_TIMEOUT_SECS", 30)?),
            advisor_timeout: Duration::from_secs(parse_env("ADVISOR_TIMEOUT_SECS", 60)?),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(InitError::MissingConfig(key.to_string()).into()),
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
