use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::kernel::DEFAULT_MODEL;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// AI assist is disabled when absent
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// Override for proxies or regional endpoints
    pub gemini_base_url: Option<String>,
    /// Empty means any origin (local development)
    pub allowed_origins: Vec<String>,
    /// Start with the initial dataset instead of an empty store
    pub seed_data: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL").ok(),
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            seed_data: match env::var("SEED_DATA") {
                Ok(value) => parse_bool(&value).context("SEED_DATA must be true or false")?,
                Err(_) => true,
            },
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean: {}", other),
    }
}
