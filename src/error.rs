// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlastmapError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BlastmapError>;

// Allow `?` on std::io::Error by converting to BlastmapError::Io with unknown path.
impl From<std::io::Error> for BlastmapError {
    fn from(source: std::io::Error) -> Self {
        BlastmapError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for BlastmapError {
    fn from(e: walkdir::Error) -> Self {
        BlastmapError::Other(e.to_string())
    }
}
