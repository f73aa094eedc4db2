//! PostgreSQL-backed store. Tables (`photos`, `albums`, `albums_photos`) are managed outside this crate.

use super::{MediaStore, StoreError};
use crate::models::{Album, AlbumChanges, NewAlbum, NewPhoto, Photo, PhotoChanges};
use async_trait::async_trait;
use sqlx::PgPool;

const PHOTO_COLUMNS: &str = "id, title, url, comment, user_id";
const ALBUM_COLUMNS: &str = "id, title, user_id";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl MediaStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn photos_for_user(&self, user_id: i64) -> Result<Vec<Photo>, StoreError> {
        let sql = format!("SELECT {} FROM photos WHERE user_id = $1 ORDER BY id", PHOTO_COLUMNS);
        tracing::debug!(sql = %sql, user_id, "query");
        let rows = sqlx::query_as::<_, Photo>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn owned_photo(&self, user_id: i64, id: i64) -> Result<Option<Photo>, StoreError> {
        let sql = format!(
            "SELECT {} FROM photos WHERE id = $1 AND user_id = $2",
            PHOTO_COLUMNS
        );
        tracing::debug!(sql = %sql, id, user_id, "query");
        let row = sqlx::query_as::<_, Photo>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_photo(&self, photo: &NewPhoto) -> Result<Photo, StoreError> {
        let sql = format!(
            "INSERT INTO photos (title, url, comment, user_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            PHOTO_COLUMNS
        );
        tracing::debug!(sql = %sql, user_id = photo.user_id, "query");
        let row = sqlx::query_as::<_, Photo>(&sql)
            .bind(&photo.title)
            .bind(&photo.url)
            .bind(&photo.comment)
            .bind(photo.user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_photo(
        &self,
        user_id: i64,
        id: i64,
        changes: &PhotoChanges,
    ) -> Result<Option<Photo>, StoreError> {
        let sql = format!(
            "UPDATE photos SET title = COALESCE($3, title), url = COALESCE($4, url), comment = COALESCE($5, comment) \
             WHERE id = $1 AND user_id = $2 RETURNING {}",
            PHOTO_COLUMNS
        );
        tracing::debug!(sql = %sql, id, user_id, "query");
        let row = sqlx::query_as::<_, Photo>(&sql)
            .bind(id)
            .bind(user_id)
            .bind(&changes.title)
            .bind(&changes.url)
            .bind(&changes.comment)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn albums_for_user(&self, user_id: i64) -> Result<Vec<Album>, StoreError> {
        let sql = format!("SELECT {} FROM albums WHERE user_id = $1 ORDER BY id", ALBUM_COLUMNS);
        tracing::debug!(sql = %sql, user_id, "query");
        let rows = sqlx::query_as::<_, Album>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_album_by_id(&self, id: i64) -> Result<Option<Album>, StoreError> {
        let sql = format!("SELECT {} FROM albums WHERE id = $1", ALBUM_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Album>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn owned_album(&self, user_id: i64, id: i64) -> Result<Option<Album>, StoreError> {
        let sql = format!(
            "SELECT {} FROM albums WHERE id = $1 AND user_id = $2",
            ALBUM_COLUMNS
        );
        tracing::debug!(sql = %sql, id, user_id, "query");
        let row = sqlx::query_as::<_, Album>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn album_photos(&self, album_id: i64) -> Result<Vec<Photo>, StoreError> {
        let sql = "SELECT p.id, p.title, p.url, p.comment, p.user_id FROM photos p \
                   INNER JOIN albums_photos ap ON ap.photo_id = p.id \
                   WHERE ap.album_id = $1 ORDER BY p.id";
        tracing::debug!(sql = %sql, album_id, "query");
        let rows = sqlx::query_as::<_, Photo>(sql)
            .bind(album_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_album(&self, album: &NewAlbum) -> Result<Album, StoreError> {
        let sql = format!(
            "INSERT INTO albums (title, user_id) VALUES ($1, $2) RETURNING {}",
            ALBUM_COLUMNS
        );
        tracing::debug!(sql = %sql, user_id = album.user_id, "query");
        let row = sqlx::query_as::<_, Album>(&sql)
            .bind(&album.title)
            .bind(album.user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_album(
        &self,
        user_id: i64,
        id: i64,
        changes: &AlbumChanges,
    ) -> Result<Option<Album>, StoreError> {
        let sql = format!(
            "UPDATE albums SET title = COALESCE($3, title) WHERE id = $1 AND user_id = $2 RETURNING {}",
            ALBUM_COLUMNS
        );
        tracing::debug!(sql = %sql, id, user_id, "query");
        let row = sqlx::query_as::<_, Album>(&sql)
            .bind(id)
            .bind(user_id)
            .bind(&changes.title)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn attach_photo(&self, album_id: i64, photo_id: i64) -> Result<(), StoreError> {
        let sql = "INSERT INTO albums_photos (album_id, photo_id) VALUES ($1, $2) ON CONFLICT DO NOTHING";
        tracing::debug!(sql = %sql, album_id, photo_id, "query");
        sqlx::query(sql)
            .bind(album_id)
            .bind(photo_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
