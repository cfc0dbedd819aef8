//! Per-match stat rows: upsert keyed on (match_id, player_id), bulk delete,
//! and the joined per-match read used by GET /matches/{id}/stats.
//!
//! Points are recomputed from the raw figures on every write; a second
//! submission for the same (match, player) pair replaces the row in place.

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::matches::{MatchBattingRow, MatchBowlingRow};
use crate::scoring;

pub async fn upsert_batting_stat(
    executor: impl PgExecutor<'_>,
    match_id: Uuid,
    player_id: Uuid,
    runs: i32,
    balls_faced: i32,
    fours: i32,
    sixes: i32,
) -> Result<(), sqlx::Error> {
    let points = scoring::batting_points(runs, fours, sixes);
    sqlx::query(
        r#"
        INSERT INTO batting_stats (id, match_id, player_id, runs, balls_faced, fours, sixes, points)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (match_id, player_id) DO UPDATE SET
            runs = EXCLUDED.runs,
            balls_faced = EXCLUDED.balls_faced,
            fours = EXCLUDED.fours,
            sixes = EXCLUDED.sixes,
            points = EXCLUDED.points
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(match_id)
    .bind(player_id)
    .bind(runs)
    .bind(balls_faced)
    .bind(fours)
    .bind(sixes)
    .bind(points)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn upsert_bowling_stat(
    executor: impl PgExecutor<'_>,
    match_id: Uuid,
    player_id: Uuid,
    wickets: i32,
    runs_conceded: i32,
    overs: f64,
) -> Result<(), sqlx::Error> {
    let points = scoring::bowling_points(wickets, runs_conceded, overs);
    sqlx::query(
        r#"
        INSERT INTO bowling_stats (id, match_id, player_id, wickets, runs_conceded, overs, points)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (match_id, player_id) DO UPDATE SET
            wickets = EXCLUDED.wickets,
            runs_conceded = EXCLUDED.runs_conceded,
            overs = EXCLUDED.overs,
            points = EXCLUDED.points
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(match_id)
    .bind(player_id)
    .bind(wickets)
    .bind(runs_conceded)
    .bind(overs)
    .bind(points)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_batting_stats_by_match(
    executor: impl PgExecutor<'_>,
    match_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM batting_stats WHERE match_id = $1")
        .bind(match_id)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn delete_bowling_stats_by_match(
    executor: impl PgExecutor<'_>,
    match_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM bowling_stats WHERE match_id = $1")
        .bind(match_id)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn get_batting_stats_by_match(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Vec<MatchBattingRow>, sqlx::Error> {
    sqlx::query_as::<_, MatchBattingRow>(
        r#"
        SELECT bs.id, bs.match_id, bs.player_id,
               bs.runs, bs.balls_faced, bs.fours, bs.sixes, bs.points,
               p.name AS player_name, p.image_path
        FROM batting_stats bs
        JOIN players p ON bs.player_id = p.id
        WHERE bs.match_id = $1
        ORDER BY bs.points DESC
        "#,
    )
    .bind(match_id)
    .fetch_all(pool)
    .await
}

pub async fn get_bowling_stats_by_match(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Vec<MatchBowlingRow>, sqlx::Error> {
    sqlx::query_as::<_, MatchBowlingRow>(
        r#"
        SELECT bs.id, bs.match_id, bs.player_id,
               bs.wickets, bs.runs_conceded, bs.overs, bs.points,
               p.name AS player_name, p.image_path
        FROM bowling_stats bs
        JOIN players p ON bs.player_id = p.id
        WHERE bs.match_id = $1
        ORDER BY bs.points DESC
        "#,
    )
    .bind(match_id)
    .fetch_all(pool)
    .await
}
