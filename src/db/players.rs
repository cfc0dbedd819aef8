//! Player storage and the read-side aggregates: leaderboards and the
//! per-player history/totals view.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::player::{
    BattingInnings, BattingLeaderboardEntry, BattingSummary, BattingTotals, BowlingLeaderboardEntry,
    BowlingSpell, BowlingSummary, BowlingTotals, Player, PlayerWithStats,
};

pub async fn get_all_players(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        "SELECT id, name, image_path, created_at FROM players ORDER BY name",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_player_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        "SELECT id, name, image_path, created_at FROM players WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Insert new player", skip(pool))]
pub async fn insert_player(pool: &PgPool, name: &str) -> Result<Uuid, sqlx::Error> {
    let player_id = Uuid::new_v4();
    sqlx::query("INSERT INTO players (id, name) VALUES ($1, $2)")
        .bind(player_id)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(player_id)
}

/// Replace the player's photo reference. Idempotent; any prior path is
/// overwritten.
pub async fn update_player_image(
    pool: &PgPool,
    id: Uuid,
    image_path: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE players SET image_path = $1 WHERE id = $2")
        .bind(image_path)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Season-long batting leaderboard.
///
/// LEFT JOIN keeps players with no appearances visible (zero totals). The
/// HAVING clause hides anyone who appeared but summed to zero points; that
/// rule is deliberate and mirrors the product's observed behavior.
pub async fn get_batting_leaderboard(
    pool: &PgPool,
) -> Result<Vec<BattingLeaderboardEntry>, sqlx::Error> {
    sqlx::query_as::<_, BattingLeaderboardEntry>(
        r#"
        SELECT
            p.id,
            p.name,
            p.image_path,
            COALESCE(SUM(bs.points), 0)::BIGINT AS total_points,
            COALESCE(SUM(bs.runs), 0)::BIGINT AS total_runs,
            COALESCE(SUM(bs.fours), 0)::BIGINT AS total_fours,
            COALESCE(SUM(bs.sixes), 0)::BIGINT AS total_sixes,
            COUNT(DISTINCT bs.match_id)::BIGINT AS matches_played
        FROM players p
        LEFT JOIN batting_stats bs ON p.id = bs.player_id
        GROUP BY p.id, p.name, p.image_path
        HAVING COALESCE(SUM(bs.points), 0) > 0 OR COUNT(DISTINCT bs.match_id) = 0
        ORDER BY total_points DESC, total_runs DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Season-long bowling leaderboard; same visibility rule as batting,
/// tie-broken by total wickets.
pub async fn get_bowling_leaderboard(
    pool: &PgPool,
) -> Result<Vec<BowlingLeaderboardEntry>, sqlx::Error> {
    sqlx::query_as::<_, BowlingLeaderboardEntry>(
        r#"
        SELECT
            p.id,
            p.name,
            p.image_path,
            COALESCE(SUM(bws.points), 0)::BIGINT AS total_points,
            COALESCE(SUM(bws.wickets), 0)::BIGINT AS total_wickets,
            COALESCE(SUM(bws.runs_conceded), 0)::BIGINT AS total_runs_conceded,
            COALESCE(SUM(bws.overs), 0)::DOUBLE PRECISION AS total_overs,
            COUNT(DISTINCT bws.match_id)::BIGINT AS matches_played
        FROM players p
        LEFT JOIN bowling_stats bws ON p.id = bws.player_id
        GROUP BY p.id, p.name, p.image_path
        HAVING COALESCE(SUM(bws.points), 0) > 0 OR COUNT(DISTINCT bws.match_id) = 0
        ORDER BY total_points DESC, total_wickets DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Player identity plus full chronological history and totals per discipline.
/// `None` when the player does not exist; that is an expected outcome, not a
/// failure.
#[tracing::instrument(name = "Fetch player with stats", skip(pool))]
pub async fn get_player_with_stats(
    pool: &PgPool,
    player_id: Uuid,
) -> Result<Option<PlayerWithStats>, sqlx::Error> {
    let Some(player) = get_player_by_id(pool, player_id).await? else {
        return Ok(None);
    };

    let batting_history = sqlx::query_as::<_, BattingInnings>(
        r#"
        SELECT bs.id, bs.match_id, bs.player_id,
               bs.runs, bs.balls_faced, bs.fours, bs.sixes, bs.points,
               m.match_date, m.match_name
        FROM batting_stats bs
        JOIN matches m ON bs.match_id = m.id
        WHERE bs.player_id = $1
        ORDER BY m.match_date DESC
        "#,
    )
    .bind(player_id)
    .fetch_all(pool)
    .await?;

    let bowling_history = sqlx::query_as::<_, BowlingSpell>(
        r#"
        SELECT bs.id, bs.match_id, bs.player_id,
               bs.wickets, bs.runs_conceded, bs.overs, bs.points,
               m.match_date, m.match_name
        FROM bowling_stats bs
        JOIN matches m ON bs.match_id = m.id
        WHERE bs.player_id = $1
        ORDER BY m.match_date DESC
        "#,
    )
    .bind(player_id)
    .fetch_all(pool)
    .await?;

    let batting_totals = sqlx::query_as::<_, BattingTotals>(
        r#"
        SELECT
            COALESCE(SUM(runs), 0)::BIGINT AS total_runs,
            COALESCE(SUM(balls_faced), 0)::BIGINT AS total_balls,
            COALESCE(SUM(fours), 0)::BIGINT AS total_fours,
            COALESCE(SUM(sixes), 0)::BIGINT AS total_sixes,
            COALESCE(SUM(points), 0)::BIGINT AS total_points,
            COUNT(*)::BIGINT AS matches_played
        FROM batting_stats
        WHERE player_id = $1
        "#,
    )
    .bind(player_id)
    .fetch_one(pool)
    .await?;

    let bowling_totals = sqlx::query_as::<_, BowlingTotals>(
        r#"
        SELECT
            COALESCE(SUM(wickets), 0)::BIGINT AS total_wickets,
            COALESCE(SUM(runs_conceded), 0)::BIGINT AS total_runs_conceded,
            COALESCE(SUM(overs), 0)::DOUBLE PRECISION AS total_overs,
            COALESCE(SUM(points), 0)::BIGINT AS total_points,
            COUNT(*)::BIGINT AS matches_played
        FROM bowling_stats
        WHERE player_id = $1
        "#,
    )
    .bind(player_id)
    .fetch_one(pool)
    .await?;

    Ok(Some(PlayerWithStats {
        id: player.id,
        name: player.name,
        image_path: player.image_path,
        created_at: player.created_at,
        batting: BattingSummary {
            history: batting_history,
            totals: batting_totals,
        },
        bowling: BowlingSummary {
            history: bowling_history,
            totals: bowling_totals,
        },
    }))
}
