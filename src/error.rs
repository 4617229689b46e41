//! Error types for map generation and export

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid map dimensions {height}x{width}: both must be at least 1")]
    InvalidDimensions { height: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, MapError>;
