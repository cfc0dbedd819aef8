use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: Option<String>,
}

/// One leaderboard line for batting. Aggregates in Postgres come back as
/// BIGINT, hence the i64 totals.
#[derive(Debug, FromRow, Serialize)]
pub struct BattingLeaderboardEntry {
    pub id: Uuid,
    pub name: String,
    pub image_path: Option<String>,
    pub total_points: i64,
    pub total_runs: i64,
    pub total_fours: i64,
    pub total_sixes: i64,
    pub matches_played: i64,
}

#[derive(Debug, FromRow, Serialize)]
pub struct BowlingLeaderboardEntry {
    pub id: Uuid,
    pub name: String,
    pub image_path: Option<String>,
    pub total_points: i64,
    pub total_wickets: i64,
    pub total_runs_conceded: i64,
    pub total_overs: f64,
    pub matches_played: i64,
}

/// A player's batting row in one match, joined with the match it belongs to.
#[derive(Debug, FromRow, Serialize)]
pub struct BattingInnings {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub runs: i32,
    pub balls_faced: i32,
    pub fours: i32,
    pub sixes: i32,
    pub points: i32,
    pub match_date: NaiveDate,
    pub match_name: Option<String>,
}

#[derive(Debug, FromRow, Serialize)]
pub struct BowlingSpell {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub wickets: i32,
    pub runs_conceded: i32,
    pub overs: f64,
    pub points: i32,
    pub match_date: NaiveDate,
    pub match_name: Option<String>,
}

#[derive(Debug, FromRow, Serialize)]
pub struct BattingTotals {
    pub total_runs: i64,
    pub total_balls: i64,
    pub total_fours: i64,
    pub total_sixes: i64,
    pub total_points: i64,
    pub matches_played: i64,
}

#[derive(Debug, FromRow, Serialize)]
pub struct BowlingTotals {
    pub total_wickets: i64,
    pub total_runs_conceded: i64,
    pub total_overs: f64,
    pub total_points: i64,
    pub matches_played: i64,
}

#[derive(Debug, Serialize)]
pub struct BattingSummary {
    pub history: Vec<BattingInnings>,
    pub totals: BattingTotals,
}

#[derive(Debug, Serialize)]
pub struct BowlingSummary {
    pub history: Vec<BowlingSpell>,
    pub totals: BowlingTotals,
}

/// Full player view: identity plus per-discipline history and totals.
#[derive(Debug, Serialize)]
pub struct PlayerWithStats {
    pub id: Uuid,
    pub name: String,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub batting: BattingSummary,
    pub bowling: BowlingSummary,
}
