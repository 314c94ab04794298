use crate::processor::DEFAULT_MAX_TEXT_CHARS;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Input limits
    pub max_text_chars: usize,

    // Lexicon
    pub lexicon_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 5000,
            },

            // Input limits
            max_text_chars: match std::env::var("MAX_TEXT_CHARS") {
                Ok(v) => v
                    .parse()
                    .context("MAX_TEXT_CHARS must be a positive integer")?,
                Err(_) => DEFAULT_MAX_TEXT_CHARS,
            },

            // Lexicon (optional JSON extension merged into the built-in lists)
            lexicon_file: std::env::var("LEXICON_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        })
    }

    /// Address the server listens on (e.g. "0.0.0.0:5000").
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
