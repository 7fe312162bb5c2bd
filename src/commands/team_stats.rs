//! Team offensive stats command implementation

use std::path::{Path, PathBuf};

use crate::{
    core::{team_stats_path, write_records},
    sleeper::{transform::extract_team_offense, SleeperClient, TeamOffenseRecord},
    Result, Season,
};

use super::{build_client, prepare_data_dir};

/// Parameters for the team-stats command
#[derive(Debug)]
pub struct TeamStatsParams {
    pub season: Season,
    pub data_dir: Option<PathBuf>,
    pub as_json: bool,
    pub debug: bool,
}

/// Fetch regular-season stats for `season` and save one row per team to
/// `{data_dir}/sleeper_team_stats_{season}.csv`.
pub async fn get_team_offensive_stats(
    client: &SleeperClient,
    data_dir: &Path,
    season: Season,
) -> Result<Vec<TeamOffenseRecord>> {
    let stats = client.get_regular_season_stats(season).await?;
    let records = extract_team_offense(&stats, season)?;

    write_records(&team_stats_path(data_dir, season), &records)?;
    println!("Saved team offensive stats for {}", season); // tarpaulin::skip

    Ok(records)
}

/// Handle the team-stats command
pub async fn handle_team_stats(params: TeamStatsParams) -> Result<()> {
    let data_dir = prepare_data_dir(params.data_dir)?;
    let client = build_client(params.debug)?;

    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let records = get_team_offensive_stats(&client, &data_dir, params.season).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&records)?); // tarpaulin::skip
    }

    Ok(())
}
