use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on request bodies, applied to every route.
    pub max_body_bytes: usize,
    /// Written to the Producer entry of every PDF.
    pub pdf_producer: String,
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
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| (2 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_BODY_BYTES must be a byte count")?,
            pdf_producer: std::env::var("PDF_PRODUCER")
                .unwrap_or_else(|_| env!("CARGO_PKG_NAME").to_string()),
        })
    }
}
