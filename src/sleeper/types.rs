use crate::{core::CsvRecord, Position};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Sleeper sends ranks and counts as JSON numbers that are sometimes
/// written as floats (`12.0`). Anything that is not a whole, non-negative
/// number is treated as missing rather than failing the whole response.
fn de_opt_whole_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_number(deserializer)?
        .filter(|v| v.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(v))
        .map(|v| v as u32))
}

/// Any JSON number as `f64`; other types become `None`.
fn de_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| v.as_f64()))
}

/// Text fields pass through whatever scalar Sleeper sent, so a stray
/// `"college": 123` is kept as `"123"`.
fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// One entry of `/players/nfl`. Sleeper sends dozens of fields per player;
/// only the ones used for rookie intake are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SleeperPlayer {
    #[serde(default, deserialize_with = "de_opt_text")]
    pub full_name: Option<String>,
    /// Kept raw: the tracked-position check happens in the transform.
    #[serde(default, deserialize_with = "de_opt_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub college: Option<String>,
    /// `0` and `0.0` both count as zero; non-numbers are `None`.
    #[serde(default, deserialize_with = "de_opt_number")]
    pub years_exp: Option<f64>,
}

/// One team entry of `/stats/nfl/regular/{season}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SleeperTeamStats {
    #[serde(default, deserialize_with = "de_opt_whole_u32")]
    pub offense_rank: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_whole_u32")]
    pub pass_yds_rank: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_whole_u32")]
    pub pass_td_rank: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_whole_u32")]
    pub rush_yds_rank: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_whole_u32")]
    pub rush_td_rank: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_whole_u32")]
    pub rec_yds_rank: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_whole_u32")]
    pub rec_td_rank: Option<u32>,
    /// Total team touchdowns.
    #[serde(default, deserialize_with = "de_opt_whole_u32")]
    pub td: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_whole_u32")]
    pub redzone_rank: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub redzone_pct: Option<f64>,
}

/// A rookie at one of the tracked offensive positions.
///
/// Only built by [`crate::sleeper::transform::extract_rookies`], which
/// guarantees `years_exp == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RookieRecord {
    pub player_id: String,
    pub full_name: Option<String>,
    pub position: Position,
    /// `None` for unsigned players.
    pub team: Option<String>,
    pub college: Option<String>,
    pub years_exp: u32,
}

impl CsvRecord for RookieRecord {
    const HEADERS: &'static [&'static str] = &[
        "player_id",
        "full_name",
        "position",
        "team",
        "college",
        "years_exp",
    ];
}

/// Offensive rankings for one team in one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamOffenseRecord {
    pub team: String,
    /// Season requested by the caller; Sleeper does not echo it back.
    pub year: u16,
    pub offense_rank: Option<u32>,
    pub pass_yards_rank: Option<u32>,
    pub pass_td_rank: Option<u32>,
    pub rush_yards_rank: Option<u32>,
    pub rush_td_rank: Option<u32>,
    pub rec_yards_rank: Option<u32>,
    pub rec_td_rank: Option<u32>,
    pub team_td: Option<u32>,
    pub redzone_rank: Option<u32>,
    pub redzone_pct: Option<f64>,
}

impl CsvRecord for TeamOffenseRecord {
    const HEADERS: &'static [&'static str] = &[
        "team",
        "year",
        "offense_rank",
        "pass_yards_rank",
        "pass_td_rank",
        "rush_yards_rank",
        "rush_td_rank",
        "rec_yards_rank",
        "rec_td_rank",
        "team_td",
        "redzone_rank",
        "redzone_pct",
    ];
}
