use super::Photo;
use serde::{Deserialize, Serialize};

/// An album row. Belongs to one user (`user_id`); many-to-many with photos via `albums_photos`.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub user_id: i64,
}

/// Album together with its related photos, as returned by `show`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlbumWithPhotos {
    #[serde(flatten)]
    pub album: Album,
    pub photos: Vec<Photo>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAlbum {
    pub title: String,
    pub user_id: i64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlbumChanges {
    pub title: Option<String>,
}

impl AlbumChanges {
    pub fn apply(&self, album: &mut Album) {
        if let Some(title) = &self.title {
            album.title = title.clone();
        }
    }
}
