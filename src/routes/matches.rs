use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::matches::match_handler;
use crate::models::matches::MatchUpsertRequest;

/// List all matches, most recent first
#[get("")]
async fn list_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::get_all_matches(pool).await
}

/// Create a match together with its stat rows
#[post("")]
async fn create_match(
    request: web::Json<MatchUpsertRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::create_match(request, pool).await
}

/// Get a match with its batting and bowling cards
#[get("/{match_id}/stats")]
async fn get_match_stats(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::get_match_stats(match_id, pool).await
}

/// Get a single match
#[get("/{match_id}")]
async fn get_match(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::get_match(match_id, pool).await
}

/// Update match metadata and fully replace its stat rows
#[put("/{match_id}")]
async fn update_match(
    path: web::Path<Uuid>,
    request: web::Json<MatchUpsertRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::update_match(match_id, request, pool).await
}

/// Delete a match and, transitively, all its stat rows
#[delete("/{match_id}")]
async fn delete_match(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::delete_match(match_id, pool).await
}
