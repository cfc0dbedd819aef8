use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::UploadSettings;
use crate::handlers::players::{image_handler, player_handler};
use crate::models::player::CreatePlayerRequest;

/// List all players, name-sorted
#[get("")]
async fn list_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    player_handler::get_all_players(pool).await
}

/// Season batting leaderboard
#[get("/leaderboard/batting")]
async fn batting_leaderboard(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    player_handler::get_batting_leaderboard(pool).await
}

/// Season bowling leaderboard
#[get("/leaderboard/bowling")]
async fn bowling_leaderboard(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    player_handler::get_bowling_leaderboard(pool).await
}

/// Register a new player
#[post("")]
async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    player_handler::create_player(request, pool).await
}

/// Attach or replace a player's photo
#[post("/{player_id}/image")]
async fn upload_player_image(
    path: web::Path<Uuid>,
    payload: Multipart,
    pool: web::Data<PgPool>,
    uploads: web::Data<UploadSettings>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();
    image_handler::upload_player_image(player_id, payload, pool, uploads).await
}

/// Get a player with full history and totals
#[get("/{player_id}")]
async fn get_player(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let player_id = path.into_inner();
    player_handler::get_player(player_id, pool).await
}
