//! Error types for Kennel

use thiserror::Error;

/// General Kennel error type
#[derive(Debug, Error)]
pub enum KennelError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KennelError>;
