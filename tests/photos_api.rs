mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{TestApp, OWNER, STRANGER};
use media_api::MediaStore;
use serde_json::json;

#[tokio::test]
async fn index_lists_only_own_photos() -> Result<()> {
    let app = TestApp::new();
    let mine = app.seed_photo(OWNER, "beach").await?;
    app.seed_photo(STRANGER, "forest").await?;

    let (status, body) = app.get("/photos", OWNER).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    let photos = body["data"]["photos"].as_array().cloned().unwrap_or_default();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0]["id"], mine.id);
    assert_eq!(photos[0]["user_id"], OWNER);
    Ok(())
}

#[tokio::test]
async fn index_of_user_without_photos_is_empty() -> Result<()> {
    let app = TestApp::new();
    let (status, body) = app.get("/photos", OWNER).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "data": { "photos": [] } }));
    Ok(())
}

#[tokio::test]
async fn show_owned_photo_five() -> Result<()> {
    let app = TestApp::new();
    for n in 0..5 {
        app.seed_photo(OWNER, &format!("photo{}", n)).await?;
    }

    let (status, body) = app.get("/photos/5", OWNER).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["photos"]["id"], 5);

    let (status, body) = app.get("/photos/5", STRANGER).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": "fail", "message": "Photo could not be found" }));
    Ok(())
}

#[tokio::test]
async fn show_is_repeatable() -> Result<()> {
    let app = TestApp::new();
    let photo = app.seed_photo(OWNER, "beach").await?;
    let uri = format!("/photos/{}", photo.id);
    let first = app.get(&uri, OWNER).await?;
    let second = app.get(&uri, OWNER).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn show_missing_or_non_numeric_id_is_404() -> Result<()> {
    let app = TestApp::new();
    app.seed_photo(OWNER, "beach").await?;
    for uri in ["/photos/999", "/photos/abc", "/photos/1.5"] {
        let (status, body) = app.get(uri, OWNER).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["message"], "Photo could not be found");
    }
    Ok(())
}

#[tokio::test]
async fn show_coerces_path_id_loosely() -> Result<()> {
    let app = TestApp::new();
    for n in 0..5 {
        app.seed_photo(OWNER, &format!("photo{}", n)).await?;
    }
    for uri in ["/photos/05", "/photos/5.0", "/photos/5e0", "/photos/0x5", "/photos/0b101", "/photos/0o5"] {
        let (status, body) = app.get(uri, OWNER).await?;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["data"]["photos"]["id"], 5, "{}", uri);
    }
    let (status, _) = app.get("/photos/0x5", STRANGER).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn read_failures_are_500_with_generic_message() -> Result<()> {
    let app = TestApp::new();
    let photo = app.seed_photo(OWNER, "beach").await?;
    app.store.set_unavailable(true);

    let (status, body) = app.get("/photos", OWNER).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "status": "error", "message": "Exception thrown in database when fetching photos." })
    );

    let (status, body) = app.get(&format!("/photos/{}", photo.id), OWNER).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "status": "error", "message": "Exception thrown in database when fetching a photo." })
    );
    Ok(())
}

#[tokio::test]
async fn store_attaches_requester_as_owner() -> Result<()> {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/photos",
            OWNER,
            json!({
                "title": "  Sunset  ",
                "url": "https://img.example/sunset.jpg",
                "comment": "Lovely evening",
                "user_id": STRANGER
            }),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    let photo = &body["data"]["photo"];
    assert_eq!(photo["user_id"], OWNER);
    assert_eq!(photo["title"], "Sunset");
    assert_eq!(photo["comment"], "Lovely evening");

    let stored = app.store.photos_for_user(OWNER).await?;
    assert_eq!(stored.len(), 1);
    assert!(app.store.photos_for_user(STRANGER).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn store_with_invalid_fields_is_422_and_persists_nothing() -> Result<()> {
    let app = TestApp::new();
    let (status, body) = app
        .post("/photos", OWNER, json!({ "title": "ab", "url": "nope", "comment": "x" }))
        .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "fail");
    let errors = body["data"].as_array().cloned().unwrap_or_default();
    let params: Vec<&str> = errors.iter().filter_map(|e| e["param"].as_str()).collect();
    assert_eq!(params, vec!["title", "url", "comment"]);
    assert!(errors.iter().all(|e| e["location"] == "body" && e["msg"].is_string()));
    assert!(app.store.photos_for_user(OWNER).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn store_with_missing_fields_reports_required() -> Result<()> {
    let app = TestApp::new();
    let (status, body) = app.post("/photos", OWNER, json!({})).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["data"][0], json!({ "msg": "title is required", "param": "title", "location": "body" }));
    assert_eq!(body["data"][1]["msg"], "url is required");
    Ok(())
}

#[tokio::test]
async fn store_with_non_object_body_is_400() -> Result<()> {
    let app = TestApp::new();
    let (status, body) = app.post("/photos", OWNER, json!(["title"])).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "body must be a JSON object");
    Ok(())
}

#[tokio::test]
async fn store_persistence_failure_is_500_with_generic_message() -> Result<()> {
    let app = TestApp::new();
    app.store.set_unavailable(true);
    let (status, body) = app
        .post("/photos", OWNER, json!({ "title": "Sunset", "url": "https://img.example/s.jpg" }))
        .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "status": "error",
            "message": "Exception thrown in database when creating a new photo."
        })
    );
    Ok(())
}

#[tokio::test]
async fn update_applies_partial_changes() -> Result<()> {
    let app = TestApp::new();
    let photo = app.seed_photo(OWNER, "beach").await?;
    let (status, body) = app
        .put(&format!("/photos/{}", photo.id), OWNER, json!({ "comment": "Windy day" }))
        .await?;
    assert_eq!(status, StatusCode::OK);
    let updated = &body["data"]["photo"];
    assert_eq!(updated["title"], "beach");
    assert_eq!(updated["comment"], "Windy day");
    assert_eq!(updated["url"], photo.url);
    Ok(())
}

#[tokio::test]
async fn update_of_foreign_photo_is_404_even_with_invalid_body() -> Result<()> {
    let app = TestApp::new();
    let photo = app.seed_photo(OWNER, "beach").await?;
    let uri = format!("/photos/{}", photo.id);

    let (status, body) = app.put(&uri, STRANGER, json!({ "title": "Mine now" })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "status": "fail", "data": "Photo to update could not be found" }));

    let (status, _) = app.put(&uri, STRANGER, json!({ "title": "x" })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.put("/photos/404", OWNER, json!({ "title": "Ghost" })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"], "Photo to update could not be found");

    let unchanged = app.store.owned_photo(OWNER, photo.id).await?;
    assert_eq!(unchanged.map(|p| p.title), Some("beach".to_string()));
    Ok(())
}

#[tokio::test]
async fn update_with_invalid_fields_is_422_and_changes_nothing() -> Result<()> {
    let app = TestApp::new();
    let photo = app.seed_photo(OWNER, "beach").await?;
    let (status, body) = app
        .put(&format!("/photos/{}", photo.id), OWNER, json!({ "title": "Ok title", "url": "ftp://x" }))
        .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["data"][0]["param"], "url");
    assert_eq!(app.store.owned_photo(OWNER, photo.id).await?, Some(photo));
    Ok(())
}

#[tokio::test]
async fn update_persistence_failure_is_500() -> Result<()> {
    let app = TestApp::new();
    let photo = app.seed_photo(OWNER, "beach").await?;
    app.store.set_failing_writes(true);
    let (status, body) = app
        .put(&format!("/photos/{}", photo.id), OWNER, json!({ "title": "Sunset" }))
        .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "status": "error",
            "message": "Exception thrown in database when updating a new photo."
        })
    );
    app.store.set_failing_writes(false);
    assert_eq!(app.store.owned_photo(OWNER, photo.id).await?, Some(photo));
    Ok(())
}

#[tokio::test]
async fn update_without_body_returns_photo_unchanged() -> Result<()> {
    let app = TestApp::new();
    let photo = app.seed_photo(OWNER, "beach").await?;
    let (status, body) = app
        .request("PUT", &format!("/photos/{}", photo.id), Some(OWNER), None)
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["photo"]["id"], photo.id);
    assert_eq!(body["data"]["photo"]["title"], "beach");
    assert_eq!(app.store.owned_photo(OWNER, photo.id).await?, Some(photo));
    Ok(())
}

#[tokio::test]
async fn store_without_body_reports_required() -> Result<()> {
    let app = TestApp::new();
    let (status, body) = app.request("POST", "/photos", Some(OWNER), None).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["data"][0]["param"], "title");
    assert!(app.store.photos_for_user(OWNER).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn requests_without_user_are_401() -> Result<()> {
    let app = TestApp::new();
    let (status, body) = app.request("GET", "/photos", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "status": "fail", "message": "Authentication required" }));
    Ok(())
}
