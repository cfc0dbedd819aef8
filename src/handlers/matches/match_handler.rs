use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::db::helpers::{db_result, require_record};
use crate::models::matches::{MatchStatsResponse, MatchUpsertRequest};
use crate::ok_or_return;

pub async fn get_all_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let matches = ok_or_return!(db_result(db::matches::get_all_matches(pool.get_ref()).await));
    Ok(HttpResponse::Ok().json(matches))
}

pub async fn get_match(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_info = ok_or_return!(require_record(
        db::matches::get_match_by_id(pool.get_ref(), match_id).await,
        "Match not found"
    ));
    Ok(HttpResponse::Ok().json(match_info))
}

pub async fn get_match_stats(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_info = ok_or_return!(require_record(
        db::matches::get_match_by_id(pool.get_ref(), match_id).await,
        "Match not found"
    ));
    let batting = ok_or_return!(db_result(
        db::stats::get_batting_stats_by_match(pool.get_ref(), match_id).await
    ));
    let bowling = ok_or_return!(db_result(
        db::stats::get_bowling_stats_by_match(pool.get_ref(), match_id).await
    ));
    Ok(HttpResponse::Ok().json(MatchStatsResponse {
        match_info,
        batting,
        bowling,
    }))
}

#[tracing::instrument(name = "Create match", skip(request, pool))]
pub async fn create_match(
    request: web::Json<MatchUpsertRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let Some(match_date) = request.match_date else {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Match date is required"
        })));
    };

    let match_id = ok_or_return!(db_result(
        db::matches::create_match_with_stats(
            pool.get_ref(),
            match_date,
            request.match_name.as_deref(),
            &request.batting_stats,
            &request.bowling_stats,
        )
        .await
    ));
    Ok(HttpResponse::Created().json(json!({
        "id": match_id,
        "message": "Match created successfully"
    })))
}

#[tracing::instrument(name = "Update match", skip(request, pool))]
pub async fn update_match(
    match_id: Uuid,
    request: web::Json<MatchUpsertRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    ok_or_return!(require_record(
        db::matches::get_match_by_id(pool.get_ref(), match_id).await,
        "Match not found"
    ));

    let Some(match_date) = request.match_date else {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "Match date is required"
        })));
    };

    ok_or_return!(db_result(
        db::matches::replace_match_stats(
            pool.get_ref(),
            match_id,
            match_date,
            request.match_name.as_deref(),
            &request.batting_stats,
            &request.bowling_stats,
        )
        .await
    ));
    Ok(HttpResponse::Ok().json(json!({
        "message": "Match updated successfully"
    })))
}

#[tracing::instrument(name = "Delete match", skip(pool))]
pub async fn delete_match(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    ok_or_return!(require_record(
        db::matches::get_match_by_id(pool.get_ref(), match_id).await,
        "Match not found"
    ));

    ok_or_return!(db_result(
        db::matches::delete_match(pool.get_ref(), match_id).await
    ));
    Ok(HttpResponse::Ok().json(json!({
        "message": "Match deleted successfully"
    })))
}
