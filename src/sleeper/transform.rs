//! Filter and project raw Sleeper responses into output records.
//!
//! Both functions keep the iteration order of the source object, which
//! `serde_json` (built with `preserve_order`) holds in insertion order.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    sleeper::types::{RookieRecord, SleeperPlayer, SleeperTeamStats, TeamOffenseRecord},
    Position, Result, Season,
};


/// Keep players with zero years of experience whose position is in `positions`.
///
/// Every entry must be a JSON object; anything else fails the whole pass.
/// Oddly typed fields inside an object never do: they are read leniently,
/// so one malformed veteran cannot sink the run.
pub fn extract_rookies(
    players: &Map<String, Value>,
    positions: &[Position],
) -> Result<Vec<RookieRecord>> {
    let mut rookies = Vec::new();

    for (player_id, raw) in players {
        let player = SleeperPlayer::deserialize(raw)?;

        if player.years_exp != Some(0.0) {
            continue;
        }
        let Some(position) = player
            .position
            .as_deref()
            .and_then(Position::from_code)
            .filter(|p| positions.contains(p))
        else {
            continue;
        };

        rookies.push(RookieRecord {
            player_id: player_id.clone(),
            full_name: player.full_name,
            position,
            team: player.team,
            college: player.college,
            years_exp: 0,
        });
    }

    Ok(rookies)
}

/// One record per team whose value is an object. Scalar entries (Sleeper
/// uses them for byes and error markers) are dropped silently, and a
/// non-whole rank or count inside a kept entry becomes `None`.
pub fn extract_team_offense(
    stats: &Map<String, Value>,
    season: Season,
) -> Result<Vec<TeamOffenseRecord>> {
    stats
        .iter()
        .filter(|(_, raw)| raw.is_object())
        .map(|(team, raw)| {
            let s = SleeperTeamStats::deserialize(raw)?;
            Ok(TeamOffenseRecord {
                team: team.clone(),
                year: season.as_u16(),
                offense_rank: s.offense_rank,
                pass_yards_rank: s.pass_yds_rank,
                pass_td_rank: s.pass_td_rank,
                rush_yards_rank: s.rush_yds_rank,
                rush_td_rank: s.rush_td_rank,
                rec_yards_rank: s.rec_yds_rank,
                rec_td_rank: s.rec_td_rank,
                team_td: s.td,
                redzone_rank: s.redzone_rank,
                redzone_pct: s.redzone_pct,
            })
        })
        .collect()
}
