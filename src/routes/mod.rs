//! Router assembly.

mod albums;
mod photos;
mod status;

pub use albums::album_routes;
pub use photos::photo_routes;
pub use status::status_routes;

use crate::response::fail_message;
use crate::state::AppState;
use axum::{
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

async fn route_not_found() -> impl IntoResponse {
    fail_message(StatusCode::NOT_FOUND, "Route could not be found".to_string())
}

/// Rewrites the plain-text 405 and 413 produced by the router and the body limit
/// into the `fail` envelope. Headers such as `Allow` are kept.
async fn envelope_rejections(response: Response) -> Response {
    let message = match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::PAYLOAD_TOO_LARGE => "Request body too large",
        _ => return response,
    };
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|v| v.as_bytes().starts_with(b"application/json"));
    if is_json {
        return response;
    }
    let (mut parts, _) = response.into_parts();
    let (envelope, body) = fail_message(parts.status, message.to_string()).into_response().into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.extend(envelope.headers);
    Response::from_parts(parts, body)
}

/// Full application: status, photo and album routes with an envelope fallback,
/// tracing and a request body limit.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(status_routes(state.clone()))
        .merge(photo_routes(state.clone()))
        .merge(album_routes(state))
        .fallback(route_not_found)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::map_response(envelope_rejections)),
        )
}
