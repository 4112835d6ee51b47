//! Router-level tests for the DB-free surface: the greeting, required
//! parameter validation, and photo serving.
//!
//! The pool is created lazily and never connected; every route under test
//! fails fast before touching the database.

use axum::Router;
use axum::body::Body;
use chrono::FixedOffset;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use baedal_api::AppState;
use baedal_api::api;

fn test_router(photo_dir: &std::path::Path) -> Router {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://unused@localhost/unused")
        .expect("lazy pool");
    api::create_router(AppState {
        pool,
        photo_dir: photo_dir.to_path_buf(),
        tz: FixedOffset::east_opt(9 * 3600).expect("offset"),
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let res = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = res.status();
    let body = res.into_body().collect().await.expect("body").to_bytes();
    (status, body.to_vec())
}

fn error_message(body: &[u8]) -> String {
    let v: serde_json::Value = serde_json::from_slice(body).expect("json body");
    v["error"].as_str().expect("error field").to_string()
}

#[tokio::test]
async fn greeting_returns_hello_world() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, body) = get(test_router(dir.path()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Hello, World");
}

#[tokio::test]
async fn listing_without_category_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    for uri in [
        "/samecategory",
        "/mindeliverytime",
        "/mindeliverytip",
        "/highestrating",
        "/couponstores",
    ] {
        let (status, body) = get(test_router(dir.path()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(error_message(&body), "category parameter is required");
    }
}

#[tokio::test]
async fn empty_category_counts_as_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, body) = get(test_router(dir.path()), "/samecategory?category=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "category parameter is required");
}

#[tokio::test]
async fn store_routes_without_store_id_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    for uri in ["/storeinfo", "/storedetails", "/storemenus"] {
        let (status, body) = get(test_router(dir.path()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(error_message(&body), "storeId parameter is required");
    }
}

#[tokio::test]
async fn empty_store_id_counts_as_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    for uri in ["/storeinfo?storeId=", "/storedetails?storeId=", "/storemenus?storeId="] {
        let (status, body) = get(test_router(dir.path()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(error_message(&body), "storeId parameter is required");
    }
}

#[tokio::test]
async fn non_numeric_ids_get_a_structured_400() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, body) = get(test_router(dir.path()), "/storeinfo?storeId=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "storeId parameter is invalid");

    let (status, body) = get(test_router(dir.path()), "/menuinfo?menuId=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "menuId parameter is invalid");
}

#[tokio::test]
async fn empty_menu_id_counts_as_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, body) = get(test_router(dir.path()), "/menuinfo?menuId=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "menuId parameter is required");
}

#[tokio::test]
async fn menu_info_without_menu_id_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, body) = get(test_router(dir.path()), "/menuinfo").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "menuId parameter is required");
}

#[tokio::test]
async fn photo_is_served_with_content_type() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("pic.jpg"), b"jpeg-bytes").expect("fixture");

    let app = test_router(dir.path());
    let res = app
        .oneshot(
            Request::builder()
                .uri("/photo/pic.jpg")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(header::CONTENT_TYPE).expect("content type"),
        "image/jpeg"
    );
    let body = res.into_body().collect().await.expect("body").to_bytes();
    assert_eq!(&body[..], b"jpeg-bytes");
}

#[tokio::test]
async fn missing_photo_is_a_404() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, body) = get(test_router(dir.path()), "/photo/nope.jpg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "photo not found");
}

#[tokio::test]
async fn photo_requests_cannot_escape_the_root() {
    let outer = tempfile::tempdir().expect("tempdir");
    let root = outer.path().join("photos");
    std::fs::create_dir(&root).expect("photo root");
    std::fs::write(outer.path().join("secret.txt"), b"secret").expect("fixture");

    let (status, _) = get(test_router(&root), "/photo/../secret.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(test_router(&root), "/photo/a/../../secret.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
