//! Album routes, including the album/photo relation.

use crate::handlers::album::{add_photo, index, show, store, update};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn album_routes(state: AppState) -> Router {
    Router::new()
        .route("/albums", get(index).post(store))
        .route("/albums/:album_id", get(show).put(update))
        .route("/albums/:album_id/photos", post(add_photo))
        .with_state(state)
}
