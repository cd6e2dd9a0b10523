//! Error types for Plukk.

use thiserror::Error;

/// Library-level error type for Plukk operations.
#[derive(Error, Debug)]
pub enum PlukkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search failed: {0}")]
    Search(String),

    #[error("Metadata fetch failed: {0}")]
    Metadata(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Ranking failed: {0}")]
    Ranking(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("Video not found: {0}")]
    VideoNotFound(String),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("External tool failed: {0}")]
    ToolFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Plukk operations.
pub type Result<T> = std::result::Result<T, PlukkError>;
