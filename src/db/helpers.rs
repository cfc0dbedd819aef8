//! Query helpers shared by the handlers.
//!
//! Handlers return `Result<HttpResponse>`; these helpers collapse the common
//! error cases (missing record → 404, storage failure → 500) into ready-made
//! responses so the happy path stays readable.

use actix_web::HttpResponse;
use serde_json::json;

/// Postgres error code for a foreign-key violation. A stat row referencing an
/// unknown match or player fails with this code.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Result type for database operations that return an HttpResponse on error.
pub type DbResult<T> = Result<T, HttpResponse>;

/// Macro for handlers returning `Result<HttpResponse>`.
/// Converts a `DbResult<T>` to return `Ok(error_response)` on error.
#[macro_export]
macro_rules! ok_or_return {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(response) => return Ok(response),
        }
    };
}

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    not_found_message: &str,
) -> DbResult<T> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(HttpResponse::NotFound().json(json!({
            "error": not_found_message
        }))),
        Err(e) => Err(storage_error(e)),
    }
}

/// Unwrap a database result, returning InternalServerError on error.
pub fn db_result<T>(result: Result<T, sqlx::Error>) -> DbResult<T> {
    result.map_err(storage_error)
}

/// Map a storage failure to a 500 response, logging referential-integrity
/// violations distinctly from everything else.
fn storage_error(e: sqlx::Error) -> HttpResponse {
    if is_foreign_key_violation(&e) {
        tracing::error!("Referential integrity violation: {}", e);
    } else {
        tracing::error!("Database error: {}", e);
    }
    HttpResponse::InternalServerError().json(json!({
        "error": e.to_string()
    }))
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
    )
}
