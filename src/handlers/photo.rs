//! Photo handlers: index, show, store, update. Every lookup is scoped to the requesting user.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::{CurrentUser, JsonObject};
use crate::models::{NewPhoto, Photo, PhotoChanges};
use crate::response::success;
use crate::service::{rules, RequestValidator};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Serialize;

pub const PHOTO_NOT_FOUND: &str = "Photo could not be found";
pub const PHOTO_TO_UPDATE_NOT_FOUND: &str = "Photo to update could not be found";

#[derive(Serialize)]
struct PhotoList {
    photos: Vec<Photo>,
}

/// `show` keys the single photo as `photos`.
#[derive(Serialize)]
struct PhotoShown {
    photos: Photo,
}

#[derive(Serialize)]
struct PhotoSaved {
    photo: Photo,
}

async fn find_owned(state: &AppState, user: i64, raw_id: &str) -> Result<Photo, AppError> {
    match parse_id(raw_id) {
        Some(id) => owned_by_id(state, user, id).await,
        None => Err(AppError::NotFound(PHOTO_NOT_FOUND)),
    }
}

pub(crate) async fn owned_by_id(state: &AppState, user: i64, id: i64) -> Result<Photo, AppError> {
    state
        .store
        .owned_photo(user, id)
        .await
        .map_err(AppError::persistence("Exception thrown in database when fetching a photo."))?
        .ok_or(AppError::NotFound(PHOTO_NOT_FOUND))
}

/// GET /photos
pub async fn index(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let photos = state
        .store
        .photos_for_user(user)
        .await
        .map_err(AppError::persistence("Exception thrown in database when fetching photos."))?;
    Ok(success(PhotoList { photos }))
}

/// GET /photos/:photo_id
pub async fn show(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(photo_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let photo = find_owned(&state, user, &photo_id).await?;
    Ok(success(PhotoShown { photos: photo }))
}

/// POST /photos
pub async fn store(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let fields = RequestValidator::validate(&body, &rules::photo_create())?;
    let new_photo: NewPhoto = fields.with("user_id", user).into_model()?;
    let photo = state
        .store
        .insert_photo(&new_photo)
        .await
        .map_err(AppError::persistence("Exception thrown in database when creating a new photo."))?;
    tracing::debug!(photo_id = photo.id, user_id = user, "created new photo");
    Ok(success(PhotoSaved { photo }))
}

/// PUT /photos/:photo_id
pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(photo_id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let photo = find_owned(&state, user, &photo_id).await.map_err(|e| match e {
        AppError::NotFound(_) => {
            tracing::debug!(photo_id = %photo_id, user_id = user, "photo to update could not be found");
            AppError::NotFoundData(PHOTO_TO_UPDATE_NOT_FOUND)
        }
        other => other,
    })?;
    let fields = RequestValidator::validate(&body, &rules::photo_update())?;
    if fields.is_empty() {
        return Ok(success(PhotoSaved { photo }));
    }
    let changes: PhotoChanges = fields.into_model()?;
    let photo = state
        .store
        .update_photo(user, photo.id, &changes)
        .await
        .map_err(AppError::persistence("Exception thrown in database when updating a new photo."))?
        .ok_or(AppError::NotFoundData(PHOTO_TO_UPDATE_NOT_FOUND))?;
    tracing::debug!(photo_id = photo.id, user_id = user, "updated photo");
    Ok(success(PhotoSaved { photo }))
}
