use anyhow::{Context, Result};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_CATALOG_PATH: &str = "shl_catalog.csv";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub catalog_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            catalog_path: std::env::var("CATALOG_PATH")
                .unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
