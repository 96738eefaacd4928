use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("No config file found (searched: {searched}) and CLEARBIT_KEY is not set")]
    NotFound { searched: String },

    #[error("Unsupported config extension '.{ext}' for file {}", .path.display())]
    UnsupportedFormat { path: PathBuf, ext: String },

    #[error("Invalid config: {0}")]
    Invalid(#[from] Box<figment::Error>),

    #[error("No Clearbit API key configured; set clearbit_key, CLEARBIT_KEY or pass --key")]
    MissingKey,
}

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Clearbit API error {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Failed to decode enrichment response: {0}")]
    Decode(#[from] serde_json::Error),
}
