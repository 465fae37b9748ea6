//! Integration Test: 登録 → 一覧 → 削除 → 一覧

use crate::support::{
    build_app, build_app_with_pool, delete_remove_url, get_list_urls, post_add_url,
};
use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_add_list_remove_list() {
    let test_app = build_app().await;

    let (status, _) = post_add_url(&test_app.app, r#"{"url":"https://example.com"}"#).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = get_list_urls(&test_app.app).await;
    assert_eq!(status, StatusCode::OK);
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["url"], "https://example.com");
    let id = records[0]["id"].as_str().unwrap().to_string();

    let (status, _) = delete_remove_url(&test_app.app, &id).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = get_list_urls(&test_app.app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Array(vec![]));
}

/// ファイルDBの内容は再起動（プール再作成）後も残る
#[tokio::test]
async fn test_records_survive_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("urlmon.db").display());

    {
        let pool = urlmon::db::init_db_pool(&url).await.expect("pool");
        let test_app = build_app_with_pool(pool.clone());
        let (status, _) =
            post_add_url(&test_app.app, r#"{"url":"https://persist.example.com"}"#).await;
        assert_eq!(status, StatusCode::CREATED);
        pool.close().await;
    }

    let pool = urlmon::db::init_db_pool(&url).await.expect("pool");
    let test_app = build_app_with_pool(pool);
    let (_, json) = get_list_urls(&test_app.app).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["url"], "https://persist.example.com");
}

#[tokio::test]
async fn test_health_endpoint() {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    let test_app = build_app().await;
    let response = test_app
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"ok");
}
