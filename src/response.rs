//! Standard response envelope helpers.
//!
//! Every body is `{ "status": "success" | "fail" | "error", "data" | "message": ... }`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    /// Client-caused: validation, missing resource, bad input.
    Fail,
    /// Server-caused.
    Error,
}

#[derive(Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            status: Status::Success,
            data: Some(data),
            message: None,
        }),
    )
}

pub fn fail_data<T: Serialize>(code: StatusCode, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        code,
        Json(Envelope {
            status: Status::Fail,
            data: Some(data),
            message: None,
        }),
    )
}

pub fn fail_message(code: StatusCode, message: String) -> (StatusCode, Json<Envelope<()>>) {
    (
        code,
        Json(Envelope {
            status: Status::Fail,
            data: None,
            message: Some(message),
        }),
    )
}

pub fn error_message(code: StatusCode, message: &str) -> (StatusCode, Json<Envelope<()>>) {
    (
        code,
        Json(Envelope {
            status: Status::Error,
            data: None,
            message: Some(message.to_string()),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_message() {
        let (code, Json(body)) = success(json!({ "photos": [] }));
        assert_eq!(code, StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "status": "success", "data": { "photos": [] } })
        );
    }

    #[test]
    fn error_omits_data() {
        let (_, Json(body)) = error_message(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "status": "error", "message": "boom" })
        );
    }
}
