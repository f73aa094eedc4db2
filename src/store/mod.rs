//! Data access for photos and albums.
//!
//! Every lookup that serves a request is filtered by owner: a row belonging to another
//! user is indistinguishable from a missing one.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::models::{Album, AlbumChanges, NewAlbum, NewPhoto, Photo, PhotoChanges};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store unavailable")]
    Unavailable,
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Cheap round trip used by `GET /ready`.
    async fn ping(&self) -> Result<(), StoreError>;

    /// All photos owned by `user_id`, ordered by id.
    async fn photos_for_user(&self, user_id: i64) -> Result<Vec<Photo>, StoreError>;

    /// Photo `id` if and only if it is owned by `user_id`.
    async fn owned_photo(&self, user_id: i64, id: i64) -> Result<Option<Photo>, StoreError>;

    async fn insert_photo(&self, photo: &NewPhoto) -> Result<Photo, StoreError>;

    /// Applies `changes` to photo `id` owned by `user_id`. `None` if no such row.
    async fn update_photo(
        &self,
        user_id: i64,
        id: i64,
        changes: &PhotoChanges,
    ) -> Result<Option<Photo>, StoreError>;

    /// All albums owned by `user_id`, ordered by id.
    async fn albums_for_user(&self, user_id: i64) -> Result<Vec<Album>, StoreError>;

    /// Album by primary key, without an owner filter.
    async fn fetch_album_by_id(&self, id: i64) -> Result<Option<Album>, StoreError>;

    /// Album `id` if and only if it is owned by `user_id`.
    async fn owned_album(&self, user_id: i64, id: i64) -> Result<Option<Album>, StoreError> {
        Ok(self
            .fetch_album_by_id(id)
            .await?
            .filter(|album| album.user_id == user_id))
    }

    /// Photos related to album `album_id` through the join table, ordered by photo id.
    async fn album_photos(&self, album_id: i64) -> Result<Vec<Photo>, StoreError>;

    async fn insert_album(&self, album: &NewAlbum) -> Result<Album, StoreError>;

    async fn update_album(
        &self,
        user_id: i64,
        id: i64,
        changes: &AlbumChanges,
    ) -> Result<Option<Album>, StoreError>;

    /// Relates `photo_id` to `album_id`. Attaching an existing pair is a no-op.
    async fn attach_photo(&self, album_id: i64, photo_id: i64) -> Result<(), StoreError>;
}
