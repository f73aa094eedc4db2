//! Row types for photos and albums, plus the insert/patch payloads built from validated fields.

pub mod album;
pub mod photo;

pub use album::{Album, AlbumChanges, AlbumWithPhotos, NewAlbum};
pub use photo::{NewPhoto, Photo, PhotoChanges};
