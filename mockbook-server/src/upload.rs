//! Multipart image upload. Files land in the uploads directory under a
//! fresh name and are served back statically at `/uploads/...`.

use std::path::Path as FilePath;

use axum::extract::multipart::{Field, Multipart};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use mockbook_common::{MultiUploadResponse, UploadResponse};

use crate::error::{AppError, Result};
use crate::state::State;

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
pub const MAX_IMAGES_PER_REQUEST: usize = 10;

const ALLOWED_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "gif", "webp"];

pub async fn upload_image(
    Extension(state): Extension<State>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    while let Some(field) = next_field(&mut multipart).await? {
        if field.name() == Some("image") {
            let saved = save_image(&state, field).await?;
            return Ok(Json(saved));
        }
    }
    Err(AppError::BadRequest(String::from("No file uploaded")))
}

pub async fn upload_images(
    Extension(state): Extension<State>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut urls = Vec::new();
    while let Some(field) = next_field(&mut multipart).await? {
        if field.name() != Some("images") {
            continue;
        }
        urls.push(save_image(&state, field).await?);
        if urls.len() == MAX_IMAGES_PER_REQUEST {
            break;
        }
    }
    if urls.is_empty() {
        return Err(AppError::BadRequest(String::from("No files uploaded")));
    }
    Ok(Json(MultiUploadResponse { urls }))
}

async fn next_field<'a>(multipart: &'a mut Multipart) -> Result<Option<Field<'a>>> {
    multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

async fn save_image(state: &State, field: Field<'_>) -> Result<UploadResponse> {
    let original = field.file_name().unwrap_or_default().to_string();
    let extension = FilePath::new(&original)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    let content_type = field.content_type().unwrap_or_default().to_string();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) || !content_type.starts_with("image/") {
        return Err(AppError::BadRequest(String::from(
            "Only image files are allowed!",
        )));
    }

    let bytes = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(AppError::BadRequest(String::from(
            "Image exceeds the 10MB limit",
        )));
    }

    let filename = format!("{}.{extension}", Uuid::new_v4());
    let uploads_dir = &state.config.uploads_dir;
    fs::create_dir_all(uploads_dir)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    fs::write(uploads_dir.join(&filename), &bytes)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    info!("stored upload {original} as {filename} ({} bytes)", bytes.len());

    Ok(UploadResponse {
        url: format!("http://localhost:{}/uploads/{filename}", state.config.port),
        filename,
    })
}
