//! Media API: photo and album CRUD over PostgreSQL, scoped to the requesting user.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreBackend};
pub use error::{AppError, ConfigError};
pub use routes::{album_routes, app, photo_routes, status_routes};
pub use state::AppState;
pub use store::{MediaStore, MemoryStore, PgStore, StoreError};
