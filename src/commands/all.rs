//! Combined intake: rookies and team stats for one season.

use std::path::PathBuf;

use crate::{Position, Result, Season};

use super::{
    build_client, prepare_data_dir, rookies::get_rookies, team_stats::get_team_offensive_stats,
};

/// Parameters for the all command
#[derive(Debug)]
pub struct AllParams {
    pub season: Season,
    pub data_dir: Option<PathBuf>,
    pub debug: bool,
}

/// Handle the all command. Stops at the first failing pipeline; a rookie
/// file written before a team-stats failure is left in place.
pub async fn handle_all(params: AllParams) -> Result<()> {
    let data_dir = prepare_data_dir(params.data_dir)?;
    let client = build_client(params.debug)?;

    // tarpaulin::skip - HTTP/file I/O calls, tested via integration tests
    get_rookies(&client, &data_dir, params.season, &Position::ALL).await?;
    get_team_offensive_stats(&client, &data_dir, params.season).await?;

    Ok(())
}
