//! Unit tests for Sleeper response and output types

use super::*;
use serde_json::json;

#[cfg(test)]
mod player_tests {
    use super::*;

    #[test]
    fn test_player_deserializes_known_fields() {
        let player: SleeperPlayer = serde_json::from_value(json!({
            "full_name": "Caleb Williams",
            "first_name": "Caleb",
            "position": "QB",
            "team": "CHI",
            "college": "USC",
            "years_exp": 0,
            "fantasy_positions": ["QB"],
            "age": 22
        }))
        .unwrap();

        assert_eq!(player.full_name.as_deref(), Some("Caleb Williams"));
        assert_eq!(player.position.as_deref(), Some("QB"));
        assert_eq!(player.team.as_deref(), Some("CHI"));
        assert_eq!(player.college.as_deref(), Some("USC"));
        assert_eq!(player.years_exp, Some(0.0));
    }

    #[test]
    fn test_player_missing_and_null_fields_are_none() {
        let player: SleeperPlayer = serde_json::from_value(json!({
            "position": "WR",
            "team": null,
            "years_exp": null
        }))
        .unwrap();

        assert_eq!(player.full_name, None);
        assert_eq!(player.team, None);
        assert_eq!(player.college, None);
        assert_eq!(player.years_exp, None);
    }

    #[test]
    fn test_player_odd_field_types_are_read_leniently() {
        let player: SleeperPlayer = serde_json::from_value(json!({
            "full_name": "Old Kicker",
            "position": "K",
            "college": 123,
            "team": false,
            "years_exp": "nine"
        }))
        .unwrap();

        assert_eq!(player.college.as_deref(), Some("123"));
        assert_eq!(player.team.as_deref(), Some("false"));
        assert_eq!(player.years_exp, None);
    }

    #[test]
    fn test_player_float_years_exp_is_kept() {
        let player: SleeperPlayer =
            serde_json::from_value(json!({ "position": "RB", "years_exp": 0.0 })).unwrap();
        assert_eq!(player.years_exp, Some(0.0));
    }

    #[test]
    fn test_player_rejects_non_object() {
        let result = serde_json::from_value::<SleeperPlayer>(json!("retired"));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod team_stats_tests {
    use super::*;

    #[test]
    fn test_team_stats_maps_api_field_names() {
        let stats: SleeperTeamStats = serde_json::from_value(json!({
            "offense_rank": 2,
            "pass_yds_rank": 3,
            "pass_td_rank": 1,
            "rush_yds_rank": 10,
            "rush_td_rank": 8,
            "rec_yds_rank": 3,
            "rec_td_rank": 1,
            "td": 54,
            "redzone_rank": 5,
            "redzone_pct": 64.7,
            "gp": 17
        }))
        .unwrap();

        assert_eq!(stats.offense_rank, Some(2));
        assert_eq!(stats.pass_yds_rank, Some(3));
        assert_eq!(stats.rush_td_rank, Some(8));
        assert_eq!(stats.td, Some(54));
        assert_eq!(stats.redzone_pct, Some(64.7));
    }

    #[test]
    fn test_team_stats_accepts_whole_floats() {
        let stats: SleeperTeamStats =
            serde_json::from_value(json!({ "offense_rank": 12.0, "td": 40.0 })).unwrap();

        assert_eq!(stats.offense_rank, Some(12));
        assert_eq!(stats.td, Some(40));
    }

    #[test]
    fn test_team_stats_fractional_value_becomes_none() {
        let stats: SleeperTeamStats =
            serde_json::from_value(json!({ "offense_rank": 2.5, "td": 64.5, "pass_td_rank": 4 }))
                .unwrap();

        assert_eq!(stats.offense_rank, None);
        assert_eq!(stats.td, None);
        assert_eq!(stats.pass_td_rank, Some(4));
    }

    #[test]
    fn test_team_stats_negative_or_text_values_become_none() {
        let stats: SleeperTeamStats = serde_json::from_value(json!({
            "redzone_rank": -1,
            "rush_yds_rank": "3",
            "redzone_pct": "n/a"
        }))
        .unwrap();

        assert_eq!(stats.redzone_rank, None);
        assert_eq!(stats.rush_yds_rank, None);
        assert_eq!(stats.redzone_pct, None);
    }

    #[test]
    fn test_team_stats_empty_object_is_all_none() {
        let stats: SleeperTeamStats = serde_json::from_value(json!({})).unwrap();
        assert_eq!(stats, SleeperTeamStats::default());
    }
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn test_rookie_headers_match_serialized_fields() {
        let record = RookieRecord {
            player_id: "11566".to_string(),
            full_name: Some("Malik Nabers".to_string()),
            position: Position::WR,
            team: Some("NYG".to_string()),
            college: Some("LSU".to_string()),
            years_exp: 0,
        };

        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, RookieRecord::HEADERS);
        assert_eq!(value["position"], "WR");
    }

    #[test]
    fn test_team_headers_match_serialized_fields() {
        let record = TeamOffenseRecord {
            team: "KC".to_string(),
            year: 2024,
            offense_rank: Some(2),
            pass_yards_rank: None,
            pass_td_rank: None,
            rush_yards_rank: None,
            rush_td_rank: None,
            rec_yards_rank: None,
            rec_td_rank: None,
            team_td: None,
            redzone_rank: None,
            redzone_pct: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, TeamOffenseRecord::HEADERS);
        assert!(value["pass_yards_rank"].is_null());
    }
}
