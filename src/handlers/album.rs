//! Album handlers: index, show, store, update, and relating a photo to an album.

use super::parse_id;
use super::photo::{owned_by_id as owned_photo, PHOTO_NOT_FOUND};
use crate::error::AppError;
use crate::extractors::{CurrentUser, JsonObject};
use crate::models::{Album, AlbumChanges, AlbumWithPhotos, NewAlbum};
use crate::response::success;
use crate::service::{rules, RequestValidator};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Serialize;

pub const ALBUM_NOT_FOUND: &str = "Album could not be found";

#[derive(Serialize)]
struct AlbumList {
    albums: Vec<Album>,
}

#[derive(Serialize)]
struct AlbumData<T> {
    album: T,
}

async fn find_owned(state: &AppState, user: i64, raw_id: &str) -> Result<Album, AppError> {
    let Some(id) = parse_id(raw_id) else {
        return Err(AppError::NotFound(ALBUM_NOT_FOUND));
    };
    state
        .store
        .owned_album(user, id)
        .await
        .map_err(AppError::persistence("Exception thrown in database when fetching an album."))?
        .ok_or(AppError::NotFound(ALBUM_NOT_FOUND))
}

async fn with_photos(state: &AppState, album: Album) -> Result<AlbumWithPhotos, AppError> {
    let photos = state
        .store
        .album_photos(album.id)
        .await
        .map_err(AppError::persistence("Exception thrown in database when fetching album photos."))?;
    Ok(AlbumWithPhotos { album, photos })
}

/// GET /albums
pub async fn index(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let albums = state
        .store
        .albums_for_user(user)
        .await
        .map_err(AppError::persistence("Exception thrown in database when fetching albums."))?;
    Ok(success(AlbumList { albums }))
}

/// GET /albums/:album_id
pub async fn show(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(album_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let album = find_owned(&state, user, &album_id).await?;
    let album = with_photos(&state, album).await?;
    Ok(success(AlbumData { album }))
}

/// POST /albums
pub async fn store(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let fields = RequestValidator::validate(&body, &rules::album_create())?;
    let new_album: NewAlbum = fields.with("user_id", user).into_model()?;
    let album = state
        .store
        .insert_album(&new_album)
        .await
        .map_err(AppError::persistence("Exception thrown in database when creating a new album."))?;
    tracing::debug!(album_id = album.id, user_id = user, "created new album");
    Ok(success(AlbumData { album }))
}

/// PUT /albums/:album_id
pub async fn update(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(album_id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let album = find_owned(&state, user, &album_id).await?;
    let fields = RequestValidator::validate(&body, &rules::album_update())?;
    if fields.is_empty() {
        return Ok(success(AlbumData { album }));
    }
    let changes: AlbumChanges = fields.into_model()?;
    let album = state
        .store
        .update_album(user, album.id, &changes)
        .await
        .map_err(AppError::persistence("Exception thrown in database when updating an album."))?
        .ok_or(AppError::NotFound(ALBUM_NOT_FOUND))?;
    tracing::debug!(album_id = album.id, user_id = user, "updated album");
    Ok(success(AlbumData { album }))
}

/// POST /albums/:album_id/photos
pub async fn add_photo(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(album_id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let album = find_owned(&state, user, &album_id).await?;
    let fields = RequestValidator::validate(&body, &rules::album_add_photo())?;
    let photo_id = fields
        .get("photo_id")
        .and_then(|v| v.as_i64())
        .ok_or(AppError::NotFound(PHOTO_NOT_FOUND))?;
    let photo = owned_photo(&state, user, photo_id).await?;
    state
        .store
        .attach_photo(album.id, photo.id)
        .await
        .map_err(AppError::persistence("Exception thrown in database when adding a photo to an album."))?;
    tracing::debug!(album_id = album.id, photo_id = photo.id, user_id = user, "added photo to album");
    let album = with_photos(&state, album).await?;
    Ok(success(AlbumData { album }))
}
