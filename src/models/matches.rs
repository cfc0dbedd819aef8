use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub match_date: NaiveDate,
    pub match_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Batting row as submitted by the scorer. Rows without a player id or a runs
/// value are skipped on write rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct BattingStatInput {
    pub player_id: Option<Uuid>,
    pub runs: Option<i32>,
    pub balls_faced: Option<i32>,
    pub fours: Option<i32>,
    pub sixes: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BowlingStatInput {
    pub player_id: Option<Uuid>,
    pub wickets: Option<i32>,
    pub runs_conceded: Option<i32>,
    pub overs: Option<f64>,
}

/// Body shared by POST /matches and PUT /matches/{id}: match metadata plus
/// the full set of stat rows.
#[derive(Debug, Deserialize)]
pub struct MatchUpsertRequest {
    pub match_date: Option<NaiveDate>,
    pub match_name: Option<String>,
    #[serde(default)]
    pub batting_stats: Vec<BattingStatInput>,
    #[serde(default)]
    pub bowling_stats: Vec<BowlingStatInput>,
}

/// Batting row of one match joined with the player it belongs to.
#[derive(Debug, FromRow, Serialize)]
pub struct MatchBattingRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub runs: i32,
    pub balls_faced: i32,
    pub fours: i32,
    pub sixes: i32,
    pub points: i32,
    pub player_name: String,
    pub image_path: Option<String>,
}

#[derive(Debug, FromRow, Serialize)]
pub struct MatchBowlingRow {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub wickets: i32,
    pub runs_conceded: i32,
    pub overs: f64,
    pub points: i32,
    pub player_name: String,
    pub image_path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchStatsResponse {
    #[serde(rename = "match")]
    pub match_info: Match,
    pub batting: Vec<MatchBattingRow>,
    pub bowling: Vec<MatchBowlingRow>,
}
