use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::db::helpers::db_result;
use crate::models::player::CreatePlayerRequest;
use crate::ok_or_return;

pub async fn get_all_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let players = ok_or_return!(db_result(db::players::get_all_players(pool.get_ref()).await));
    Ok(HttpResponse::Ok().json(players))
}

pub async fn get_batting_leaderboard(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let leaderboard = ok_or_return!(db_result(
        db::players::get_batting_leaderboard(pool.get_ref()).await
    ));
    Ok(HttpResponse::Ok().json(leaderboard))
}

pub async fn get_bowling_leaderboard(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let leaderboard = ok_or_return!(db_result(
        db::players::get_bowling_leaderboard(pool.get_ref()).await
    ));
    Ok(HttpResponse::Ok().json(leaderboard))
}

pub async fn get_player(player_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match db::players::get_player_with_stats(pool.get_ref(), player_id).await {
        Ok(Some(player)) => Ok(HttpResponse::Ok().json(player)),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "error": "Player not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to fetch player {}: {}", player_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": e.to_string()
            })))
        }
    }
}

#[tracing::instrument(name = "Create new player", skip(request, pool))]
pub async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let name = request.name.as_deref().unwrap_or("").trim();
    if name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Player name is required"
        })));
    }

    let player_id = ok_or_return!(db_result(
        db::players::insert_player(pool.get_ref(), name).await
    ));
    Ok(HttpResponse::Created().json(json!({
        "id": player_id,
        "name": name
    })))
}
