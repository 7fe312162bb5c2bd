//! Command implementations for the Sleeper data intake CLI
//!
//! Each pipeline is fetch, transform, write, in that order. A failure at
//! any stage aborts the command, so a failed fetch never touches the
//! output file.

pub mod all;
pub mod rookies;
pub mod team_stats;

use std::path::PathBuf;

use crate::{
    core::{ensure_data_dir, DEFAULT_DATA_DIR},
    sleeper::{SleeperClient, SLEEPER_BASE_URL},
    Result, BASE_URL_ENV_VAR, DATA_DIR_ENV_VAR,
};


/// Resolve the output directory: CLI option, then environment variable,
/// then `data/raw`.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .or_else(|| {
            std::env::var(DATA_DIR_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Resolve the API base URL from the environment, falling back to Sleeper.
pub fn resolve_base_url() -> String {
    std::env::var(BASE_URL_ENV_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| SLEEPER_BASE_URL.to_string())
}

/// Resolve the output directory and make sure it exists.
pub fn prepare_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = resolve_data_dir(data_dir);
    ensure_data_dir(&dir)?;
    Ok(dir)
}

/// Build the API client used by every command.
pub fn build_client(debug: bool) -> Result<SleeperClient> {
    Ok(SleeperClient::with_base_url(resolve_base_url())?.with_debug(debug))
}
