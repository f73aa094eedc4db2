//! In-process store with the same ownership semantics as [`PgStore`](super::PgStore).
//! Used by the test suite and for running the API without a database.

use super::{MediaStore, StoreError};
use crate::models::{Album, AlbumChanges, NewAlbum, NewPhoto, Photo, PhotoChanges};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    photos: BTreeMap<i64, Photo>,
    albums: BTreeMap<i64, Album>,
    /// (album_id, photo_id)
    albums_photos: BTreeSet<(i64, i64)>,
    next_photo_id: i64,
    next_album_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
    writes_failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every operation fails with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// When set, reads still succeed but every write fails with [`StoreError::Unavailable`].
    pub fn set_failing_writes(&self, failing: bool) {
        self.writes_failing.store(failing, Ordering::SeqCst);
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        self.tables.read().map_err(|_| StoreError::Unavailable)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) || self.writes_failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        self.tables.write().map_err(|_| StoreError::Unavailable)
    }
}

#[async_trait]
impl MediaStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }

    async fn photos_for_user(&self, user_id: i64) -> Result<Vec<Photo>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .photos
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn owned_photo(&self, user_id: i64, id: i64) -> Result<Option<Photo>, StoreError> {
        let tables = self.read()?;
        Ok(tables.photos.get(&id).filter(|p| p.user_id == user_id).cloned())
    }

    async fn insert_photo(&self, photo: &NewPhoto) -> Result<Photo, StoreError> {
        let mut tables = self.write()?;
        tables.next_photo_id += 1;
        let row = Photo {
            id: tables.next_photo_id,
            title: photo.title.clone(),
            url: photo.url.clone(),
            comment: photo.comment.clone(),
            user_id: photo.user_id,
        };
        tables.photos.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_photo(
        &self,
        user_id: i64,
        id: i64,
        changes: &PhotoChanges,
    ) -> Result<Option<Photo>, StoreError> {
        let mut tables = self.write()?;
        let Some(photo) = tables.photos.get_mut(&id).filter(|p| p.user_id == user_id) else {
            return Ok(None);
        };
        changes.apply(photo);
        Ok(Some(photo.clone()))
    }

    async fn albums_for_user(&self, user_id: i64) -> Result<Vec<Album>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .albums
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn fetch_album_by_id(&self, id: i64) -> Result<Option<Album>, StoreError> {
        let tables = self.read()?;
        Ok(tables.albums.get(&id).cloned())
    }

    async fn album_photos(&self, album_id: i64) -> Result<Vec<Photo>, StoreError> {
        let tables = self.read()?;
        Ok(tables
            .albums_photos
            .range((album_id, i64::MIN)..=(album_id, i64::MAX))
            .filter_map(|(_, photo_id)| tables.photos.get(photo_id).cloned())
            .collect())
    }

    async fn insert_album(&self, album: &NewAlbum) -> Result<Album, StoreError> {
        let mut tables = self.write()?;
        tables.next_album_id += 1;
        let row = Album {
            id: tables.next_album_id,
            title: album.title.clone(),
            user_id: album.user_id,
        };
        tables.albums.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_album(
        &self,
        user_id: i64,
        id: i64,
        changes: &AlbumChanges,
    ) -> Result<Option<Album>, StoreError> {
        let mut tables = self.write()?;
        let Some(album) = tables.albums.get_mut(&id).filter(|a| a.user_id == user_id) else {
            return Ok(None);
        };
        changes.apply(album);
        Ok(Some(album.clone()))
    }

    async fn attach_photo(&self, album_id: i64, photo_id: i64) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        tables.albums_photos.insert((album_id, photo_id));
        Ok(())
    }
}
