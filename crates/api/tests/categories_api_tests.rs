use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_create_category_returns_created() {
    let app = create_test_app(Some(SETTINGS));

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/categories", json!({ "name": "Tools" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({ "name": "Tools", "services": [] })
    );
    assert!(app.read_file().contains("Tools"));
}

#[tokio::test]
async fn test_create_category_on_missing_file_creates_it() {
    let app = create_test_app(None);

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/categories", json!({ "name": "dev" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(app.path.exists());
}

#[tokio::test]
async fn test_create_category_without_name_is_bad_request() {
    let app = create_test_app(Some(SETTINGS));

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/categories", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("name"));
    assert_eq!(app.read_file(), SETTINGS);
}

#[tokio::test]
async fn test_create_duplicate_category_is_conflict() {
    let app = create_test_app(Some(SETTINGS));

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/categories", json!({ "name": "dev" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(app.read_file(), SETTINGS);
}

#[tokio::test]
async fn test_delete_category_returns_no_content() {
    let app = create_test_app(Some(SETTINGS));

    let response = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", "/api/categories/Media"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!app.read_file().contains("Media"));
    assert!(app.read_file().contains("Gitea"));
}

#[tokio::test]
async fn test_delete_category_with_encoded_name() {
    let app = create_test_app(Some("- My Apps: []\n- dev: []\n"));

    let response = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", "/api/categories/My%20Apps"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!app.read_file().contains("My Apps"));
}

#[tokio::test]
async fn test_delete_missing_category_is_not_found_and_file_unchanged() {
    let app = create_test_app(Some(SETTINGS));

    let response = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", "/api/categories/Nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Category not found: Nope" })
    );
    assert_eq!(app.read_file(), SETTINGS);
}

#[tokio::test]
async fn test_create_category_with_empty_name_is_stored() {
    let app = create_test_app(Some(SETTINGS));

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/api/categories", json!({ "name": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({ "name": "", "services": [] })
    );
    assert_ne!(app.read_file(), SETTINGS);
}
