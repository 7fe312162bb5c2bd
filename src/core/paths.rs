//! Output directory and file naming.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::Season;

/// Default output directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data/raw";

/// Create the output directory (and parents) if it does not exist yet.
///
/// Safe to call any number of times.
pub fn ensure_data_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

/// Path: {dir}/rookies_{season}.csv
pub fn rookies_path(dir: &Path, season: Season) -> PathBuf {
    dir.join(format!("rookies_{}.csv", season))
}

/// Path: {dir}/sleeper_team_stats_{season}.csv
pub fn team_stats_path(dir: &Path, season: Season) -> PathBuf {
    dir.join(format!("sleeper_team_stats_{}.csv", season))
}
