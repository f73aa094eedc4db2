//! Shared harness: the full router over an in-memory store, driven with `oneshot`.

#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use media_api::models::{NewAlbum, NewPhoto, Photo, Album};
use media_api::{app, AppState, MediaStore, MemoryStore};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const OWNER: i64 = 1;
pub const STRANGER: i64 = 2;

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState {
            store: store.clone(),
        };
        TestApp {
            store,
            router: app(state, 64 * 1024),
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        user: Option<i64>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("X-User-Id", user.to_string());
        }
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))?,
            None => builder.body(Body::empty())?,
        };
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("router call")?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        Ok((status, json))
    }

    pub async fn get(&self, uri: &str, user: i64) -> Result<(StatusCode, Value)> {
        self.request("GET", uri, Some(user), None).await
    }

    pub async fn post(&self, uri: &str, user: i64, body: Value) -> Result<(StatusCode, Value)> {
        self.request("POST", uri, Some(user), Some(body)).await
    }

    pub async fn put(&self, uri: &str, user: i64, body: Value) -> Result<(StatusCode, Value)> {
        self.request("PUT", uri, Some(user), Some(body)).await
    }

    pub async fn seed_photo(&self, user_id: i64, title: &str) -> Result<Photo> {
        let photo = self
            .store
            .insert_photo(&NewPhoto {
                title: title.to_string(),
                url: format!("https://img.example/{}.jpg", title),
                comment: None,
                user_id,
            })
            .await?;
        Ok(photo)
    }

    pub async fn seed_album(&self, user_id: i64, title: &str) -> Result<Album> {
        let album = self
            .store
            .insert_album(&NewAlbum {
                title: title.to_string(),
                user_id,
            })
            .await?;
        Ok(album)
    }
}
