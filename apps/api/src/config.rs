use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::export::PdfFont;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` when `PROFILE_STORE_PATH` is set but empty: the profile is kept in memory.
    pub profile_store_path: Option<PathBuf>,
    pub default_pdf_font: PdfFont,
    /// Terms added to the built-in keyword vocabulary.
    pub extra_keywords: Vec<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            host: var("HOST", "127.0.0.1"),
            port: var("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            profile_store_path: non_empty(var("PROFILE_STORE_PATH", "data/profile-store.json"))
                .map(PathBuf::from),
            default_pdf_font: var("DEFAULT_PDF_FONT", "times")
                .parse::<PdfFont>()
                .context("DEFAULT_PDF_FONT must be times, helvetica or courier")?,
            extra_keywords: split_list(&var("EXTRA_KEYWORDS", "")),
            rust_log: var("RUST_LOG", "info"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
