// src/handlers/image.rs
use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{info, instrument};

use crate::dtos::image::{ImageEntry, UploadResponse};
use crate::error::AppError;
use crate::images;
use crate::state::AppState;

// GET /images-list - Enumerate uploaded images
#[instrument(skip(state))]
pub async fn list_images(
    State(state): State<AppState>,
) -> Result<Json<Vec<ImageEntry>>, AppError> {
    let images = images::list_images(&state.images_dir).await?;
    Ok(Json(images))
}

// POST /uploadimage - Save the first file part under a generated name
#[instrument(skip(state, multipart))]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let field = multipart
        .next_field()
        .await?
        .ok_or_else(|| AppError::bad_request("No file uploaded."))?;

    // Field name is not validated; the first part is taken as the file.
    let original_name = field.file_name().unwrap_or_default().to_string();
    let bytes = field.bytes().await?;

    let saved = images::save_upload(&state.images_dir, &bytes, &original_name).await?;
    info!(file_name = %saved.file_name, size = saved.size, "Image uploaded");

    Ok(Json(saved))
}
