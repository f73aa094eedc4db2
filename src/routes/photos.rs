//! Photo routes.

use crate::handlers::photo::{index, show, store, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn photo_routes(state: AppState) -> Router {
    Router::new()
        .route("/photos", get(index).post(store))
        .route("/photos/:photo_id", get(show).put(update))
        .with_state(state)
}
