//! Player photo upload: multipart field `image`, stored on disk under the
//! configured uploads directory and referenced as `/uploads/<file>`.
//!
//! The file is buffered in memory (capped at 5MB) before anything touches
//! disk or the database, so a rejected upload leaves no stray files behind.

use actix_multipart::{Multipart, MultipartError};
use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use futures_util::StreamExt;
use rand::Rng;
use serde_json::json;
use sqlx::PgPool;
use std::path::Path;
use uuid::Uuid;

use crate::config::settings::UploadSettings;
use crate::db;
use crate::db::helpers::require_record;
use crate::ok_or_return;

const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];
const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024; // 5MB

#[derive(Debug, thiserror::Error)]
enum UploadError {
    #[error("No image file provided")]
    MissingFile,
    #[error("Only image files are allowed")]
    InvalidFileType,
    #[error("Image too large. Maximum size is 5MB")]
    TooLarge,
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

#[tracing::instrument(name = "Upload player image", skip(payload, pool, uploads))]
pub async fn upload_player_image(
    player_id: Uuid,
    payload: Multipart,
    pool: web::Data<PgPool>,
    uploads: web::Data<UploadSettings>,
) -> Result<HttpResponse> {
    let (extension, contents) = match read_image_field(payload).await {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("Rejected image upload for player {}: {}", player_id, e);
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": e.to_string()
            })));
        }
    };

    let player = ok_or_return!(require_record(
        db::players::get_player_by_id(pool.get_ref(), player_id).await,
        "Player not found"
    ));

    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    let filename = format!(
        "player-{}-{}-{}.{}",
        player_id,
        Utc::now().timestamp_millis(),
        suffix,
        extension
    );
    let destination = uploads.root.join(&filename);
    let old_image = player
        .image_path
        .as_deref()
        .and_then(|p| Path::new(p).file_name())
        .map(|name| uploads.root.join(name));

    let write_result = web::block(move || {
        if let Some(old_path) = old_image {
            // Replacing a photo drops the previous file; losing it is harmless
            let _ = std::fs::remove_file(old_path);
        }
        std::fs::write(&destination, &contents).map(|_| destination)
    })
    .await?;

    let written_path = match write_result {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("Failed to store image for player {}: {}", player_id, e);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "error": e.to_string()
            })));
        }
    };

    let image_path = format!("/uploads/{}", filename);
    if let Err(e) = db::players::update_player_image(pool.get_ref(), player_id, &image_path).await {
        tracing::error!("Failed to record image path for player {}: {}", player_id, e);
        let _ = std::fs::remove_file(written_path);
        return Ok(HttpResponse::InternalServerError().json(json!({
            "error": e.to_string()
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "image_path": image_path
    })))
}

/// Pull the `image` field out of the multipart body, enforcing the extension
/// whitelist and the size cap while streaming.
async fn read_image_field(mut payload: Multipart) -> std::result::Result<(String, Vec<u8>), UploadError> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        if field.name() != "image" {
            continue;
        }

        let filename = field
            .content_disposition()
            .get_filename()
            .unwrap_or_default()
            .to_string();
        let extension = file_extension(&filename).to_lowercase();
        if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(UploadError::InvalidFileType);
        }

        let mut contents = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if contents.len() + chunk.len() > MAX_IMAGE_SIZE {
                return Err(UploadError::TooLarge);
            }
            contents.extend_from_slice(&chunk);
        }
        return Ok((extension, contents));
    }
    Err(UploadError::MissingFile)
}

fn file_extension(filename: &str) -> &str {
    filename
        .rfind('.')
        .map(|pos| &filename[pos + 1..])
        .unwrap_or("")
}
