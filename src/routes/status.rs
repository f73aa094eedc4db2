//! Operational routes. Liveness never touches the photo store; readiness does.

use crate::response::{error_message, success};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    service: &'static str,
}

#[derive(Serialize)]
struct Readiness {
    store: &'static str,
}

#[derive(Serialize)]
struct Build {
    name: &'static str,
    version: &'static str,
}

async fn live() -> impl IntoResponse {
    success(Liveness {
        service: env!("CARGO_PKG_NAME"),
    })
}

async fn ready(State(state): State<AppState>) -> axum::response::Response {
    match state.store.ping().await {
        Ok(()) => success(Readiness { store: "reachable" }).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "photo store is not reachable");
            error_message(StatusCode::SERVICE_UNAVAILABLE, "Photo store is unavailable").into_response()
        }
    }
}

async fn build() -> impl IntoResponse {
    success(Build {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready, GET /version, all in the response envelope.
pub fn status_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build))
        .with_state(state)
}
