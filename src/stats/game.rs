use serde::{Deserialize, Deserializer, Serialize};

use crate::stats::rating::{defensive_big_plays, offensive_rating, sum_ratings};

// Upstream writes `null` for values it could not compute. Those read as the
// zero value, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// A week of 0 is the upstream "unset".
fn week_is_unset(week: &Option<u32>) -> bool {
    week.map_or(true, |week| week == 0)
}

// Statistics of one completed game, as written by the upstream pipeline.
// Every field is optional in the data files: numbers default to 0, strings
// to "" and sub-records to all zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(skip_serializing_if = "week_is_unset")]
    pub week: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub short_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub matchup_quality: String,
    #[serde(deserialize_with = "null_as_default")]
    pub efficiency: Efficiency,
    #[serde(deserialize_with = "null_as_default")]
    pub scenario: Scenario,
    #[serde(deserialize_with = "null_as_default")]
    pub offense: Offense,
    #[serde(deserialize_with = "null_as_default")]
    pub defense: Defense,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Efficiency {
    #[serde(deserialize_with = "null_as_default")]
    pub home_team_efficiency: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team_efficiency: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team_offensive_efficiency: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team_defensive_efficiency: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team_offensive_efficiency: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team_defensive_efficiency: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team_performance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team_performance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scenario {
    #[serde(deserialize_with = "null_as_default")]
    pub margin_of_victory: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fourth_quarter_leadership_change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub leadership_change: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub scenario_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub scenario_data: ScenarioData,
}

// Win probability swings. The 4th quarter fields are snake_case upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioData {
    #[serde(deserialize_with = "null_as_default")]
    pub max_win_probability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub min_win_probability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub inversion_of_lead: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub share_of_lead: f64,
    #[serde(rename = "max_4th", deserialize_with = "null_as_default")]
    pub max_4th: f64,
    #[serde(rename = "min_4th", deserialize_with = "null_as_default")]
    pub min_4th: f64,
    #[serde(rename = "inv_4th", deserialize_with = "null_as_default")]
    pub inv_4th: f64,
    #[serde(rename = "share_4th", deserialize_with = "null_as_default")]
    pub share_4th: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Offense {
    #[serde(deserialize_with = "null_as_default")]
    pub offensive_big_plays: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub offensive_explosive_plays: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub explosive_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_plays: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_points: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_yards: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_yards_per_attempt: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_pass_yards: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_pass_yards_per_attempt: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_rush_yards: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_rush_yards_per_attempt: f64,
    #[serde(rename = "homeQBR", deserialize_with = "null_as_default")]
    pub home_qbr: f64,
    #[serde(rename = "awayQBR", deserialize_with = "null_as_default")]
    pub away_qbr: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Defense {
    #[serde(deserialize_with = "null_as_default")]
    pub punts: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sacks: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub interceptions: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub defensive_tds: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fumble_recs: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub blocked_kicks: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub safeties: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub special_teams_td: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub goal_line_stands: f64,
}

/// Per-game view served by the week endpoint. Built on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedGame {
    pub id: String,
    pub full_name: String,
    pub short_name: String,
    pub matchup_quality: String,
    pub offensive_rating: f64,
    pub defensive_big_plays: f64,
    pub scenario_rating: f64,
    pub total_rating: f64,
}

impl From<&GameRecord> for RankedGame {
    fn from(game: &GameRecord) -> Self {
        let offensive_rating = offensive_rating(game);
        let defensive_big_plays = defensive_big_plays(game);
        let scenario_rating = game.scenario.scenario_rating;

        RankedGame {
            id: game.id.clone(),
            full_name: game.full_name.clone(),
            short_name: game.short_name.clone(),
            matchup_quality: game.matchup_quality.clone(),
            offensive_rating,
            defensive_big_plays,
            scenario_rating,
            total_rating: sum_ratings(offensive_rating, defensive_big_plays, scenario_rating),
        }
    }
}
