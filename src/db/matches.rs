//! Match storage and the coordinator treating "one match plus its full set of
//! stat rows" as a single logical write.
//!
//! Every multi-row write runs inside one transaction: a half-written match
//! with some but not all player stats would corrupt leaderboard totals, so
//! any failure rolls the whole thing back.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::db::stats;
use crate::models::matches::{BattingStatInput, BowlingStatInput, Match};

pub async fn get_all_matches(pool: &PgPool) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        "SELECT id, match_date, match_name, created_at FROM matches ORDER BY match_date DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_match_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        "SELECT id, match_date, match_name, created_at FROM matches WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Create a match and all its stat rows atomically. Returns the new match id.
///
/// Rows missing a player id or the discipline's required value (runs for
/// batting, wickets for bowling) are silently skipped; everything else is
/// upserted with points computed at write time.
#[tracing::instrument(
    name = "Create match with stats",
    skip(pool, batting_rows, bowling_rows),
    fields(
        batting_rows = batting_rows.len(),
        bowling_rows = bowling_rows.len()
    )
)]
pub async fn create_match_with_stats(
    pool: &PgPool,
    match_date: NaiveDate,
    match_name: Option<&str>,
    batting_rows: &[BattingStatInput],
    bowling_rows: &[BowlingStatInput],
) -> Result<Uuid, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let match_id = Uuid::new_v4();

    sqlx::query("INSERT INTO matches (id, match_date, match_name) VALUES ($1, $2, $3)")
        .bind(match_id)
        .bind(match_date)
        .bind(match_name)
        .execute(&mut *tx)
        .await?;

    insert_stat_rows(&mut *tx, match_id, batting_rows, bowling_rows).await?;

    tx.commit().await?;
    tracing::info!("Created match {} on {}", match_id, match_date);
    Ok(match_id)
}

/// Update match metadata and fully replace its stat rows, atomically.
///
/// Full replace, not a diff: a row omitted from the new lists is removed even
/// if it existed before. The caller is responsible for the existence check.
#[tracing::instrument(
    name = "Replace match stats",
    skip(pool, batting_rows, bowling_rows)
)]
pub async fn replace_match_stats(
    pool: &PgPool,
    match_id: Uuid,
    match_date: NaiveDate,
    match_name: Option<&str>,
    batting_rows: &[BattingStatInput],
    bowling_rows: &[BowlingStatInput],
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE matches SET match_date = $1, match_name = $2 WHERE id = $3")
        .bind(match_date)
        .bind(match_name)
        .bind(match_id)
        .execute(&mut *tx)
        .await?;

    stats::delete_batting_stats_by_match(&mut *tx, match_id).await?;
    stats::delete_bowling_stats_by_match(&mut *tx, match_id).await?;

    insert_stat_rows(&mut *tx, match_id, batting_rows, bowling_rows).await?;

    tx.commit().await?;
    Ok(())
}

/// Delete a match; its batting and bowling rows go with it via the
/// foreign-key cascade.
pub async fn delete_match(pool: &PgPool, match_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(match_id)
        .execute(pool)
        .await?;
    Ok(())
}

async fn insert_stat_rows(
    conn: &mut PgConnection,
    match_id: Uuid,
    batting_rows: &[BattingStatInput],
    bowling_rows: &[BowlingStatInput],
) -> Result<(), sqlx::Error> {
    for row in batting_rows {
        if let (Some(player_id), Some(runs)) = (row.player_id, row.runs) {
            stats::upsert_batting_stat(
                &mut *conn,
                match_id,
                player_id,
                runs,
                row.balls_faced.unwrap_or(0),
                row.fours.unwrap_or(0),
                row.sixes.unwrap_or(0),
            )
            .await?;
        }
    }
    for row in bowling_rows {
        if let (Some(player_id), Some(wickets)) = (row.player_id, row.wickets) {
            stats::upsert_bowling_stat(
                &mut *conn,
                match_id,
                player_id,
                wickets,
                row.runs_conceded.unwrap_or(0),
                row.overs.unwrap_or(0.0),
            )
            .await?;
        }
    }
    Ok(())
}
