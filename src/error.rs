//! Error types for the Sleeper data intake CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected response from {endpoint}: expected {expected}")]
    UnexpectedResponse {
        endpoint: String,
        expected: &'static str,
    },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),
}

impl SleeperError {
    /// HTTP status code carried by the error, if the upstream API answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            SleeperError::Http(e) => e.status(),
            _ => None,
        }
    }
}
