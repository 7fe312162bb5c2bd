//! Rookie intake command implementation

use std::path::{Path, PathBuf};

use crate::{
    core::{rookies_path, write_records},
    sleeper::{transform::extract_rookies, RookieRecord, SleeperClient},
    Position, Result, Season,
};

use super::{build_client, prepare_data_dir};

/// Parameters for the rookies command
#[derive(Debug)]
pub struct RookiesParams {
    pub season: Season,
    pub data_dir: Option<PathBuf>,
    /// Defaults to all tracked positions.
    pub positions: Option<Vec<Position>>,
    pub as_json: bool,
    pub debug: bool,
}

/// Fetch the player pool, keep rookies at `positions`, and save them to
/// `{data_dir}/rookies_{season}.csv`.
///
/// `season` only names the file. Sleeper's player endpoint has no season
/// parameter and always returns the current pool.
pub async fn get_rookies(
    client: &SleeperClient,
    data_dir: &Path,
    season: Season,
    positions: &[Position],
) -> Result<Vec<RookieRecord>> {
    let players = client.get_players().await?;
    let rookies = extract_rookies(&players, positions)?;

    let path = rookies_path(data_dir, season);
    write_records(&path, &rookies)?;

    let label = Position::ALL
        .iter()
        .filter(|p| positions.contains(p))
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("{}", saved_message(rookies.len(), &label, &file_name)); // tarpaulin::skip

    Ok(rookies)
}

/// Status line printed after a successful save, naming the file only.
fn saved_message(count: usize, positions: &str, file_name: &str) -> String {
    format!("Saved {} rookies ({}) to {}", count, positions, file_name)
}

/// Handle the rookies command
pub async fn handle_rookies(params: RookiesParams) -> Result<()> {
    let data_dir = prepare_data_dir(params.data_dir)?;
    let client = build_client(params.debug)?;
    let positions = params
        .positions
        .unwrap_or_else(|| Position::ALL.to_vec());

    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let rookies = get_rookies(&client, &data_dir, params.season, &positions).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&rookies)?); // tarpaulin::skip
    }

    Ok(())
}
