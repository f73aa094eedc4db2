//! Typed errors and HTTP mapping.

use crate::response::{error_message, fail_data, fail_message};
use crate::service::FieldError;
use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(&'static str),
    /// 404 whose text travels under `data` rather than `message`.
    #[error("{0}")]
    NotFoundData(&'static str),
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    /// Store failure surfaced to the client with a generic message; `source` goes to the log only.
    #[error("{message}")]
    Persistence {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn persistence(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Persistence { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => {
                fail_message(StatusCode::UNAUTHORIZED, "Authentication required".to_string()).into_response()
            }
            AppError::BadRequest(message) => fail_message(StatusCode::BAD_REQUEST, message).into_response(),
            AppError::NotFound(message) => fail_message(StatusCode::NOT_FOUND, message.to_string()).into_response(),
            AppError::NotFoundData(text) => fail_data(StatusCode::NOT_FOUND, text).into_response(),
            AppError::PayloadTooLarge => {
                fail_message(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large".to_string()).into_response()
            }
            AppError::Validation(errors) => fail_data(StatusCode::UNPROCESSABLE_ENTITY, errors).into_response(),
            AppError::Persistence { message, source } => {
                // The client only sees the generic message; the cause is forwarded to monitoring.
                tracing::error!(error = %source, "{}", message);
                error_message(StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
