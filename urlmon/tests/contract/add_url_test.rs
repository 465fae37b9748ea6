//! Contract Test: POST /add-url

use crate::support::{build_app, build_unavailable_app, get_list_urls, post_add_url};
use axum::http::StatusCode;

/// POST /add-url - 正常系: 201とプレーンテキストの確認メッセージ
#[tokio::test]
async fn test_add_url_created() {
    let test_app = build_app().await;

    let (status, body) = post_add_url(&test_app.app, r#"{"url":"https://example.com"}"#).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "URL added successfully");
    assert_eq!(test_app.registry.count().await.unwrap(), 1);
}

/// 登録したURLがそのまま一覧に含まれる
#[tokio::test]
async fn test_added_url_is_listed_verbatim() {
    let test_app = build_app().await;
    let urls = [
        "https://example.com",
        "http://localhost:8080/health?verbose=1",
        "https://example.com/パス",
    ];

    for url in urls {
        let body = serde_json::json!({ "url": url }).to_string();
        let (status, _) = post_add_url(&test_app.app, &body).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = get_list_urls(&test_app.app).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["url"].as_str().unwrap())
        .collect();
    for url in urls {
        assert!(listed.contains(&url), "{} missing from {:?}", url, listed);
    }
}

/// 同じURLの重複登録は許可される
#[tokio::test]
async fn test_add_duplicate_url() {
    let test_app = build_app().await;

    for _ in 0..2 {
        let (status, _) = post_add_url(&test_app.app, r#"{"url":"https://example.com"}"#).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    assert_eq!(test_app.registry.count().await.unwrap(), 2);
}

/// url欠落・空文字列・不正なボディは400でストアを変更しない
#[tokio::test]
async fn test_add_url_bad_request_never_mutates_store() {
    let test_app = build_app().await;

    let bodies = [
        r#"{}"#,
        r#"{"url":""}"#,
        r#"{"url":"   "}"#,
        r#"{"url":null}"#,
        r#"{"url":42}"#,
        r#"{"link":"https://example.com"}"#,
        r#"not json"#,
        r#""#,
    ];

    for body in bodies {
        let (status, text) = post_add_url(&test_app.app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(text, "URL is required");
    }

    assert_eq!(test_app.registry.count().await.unwrap(), 0);
}

/// データストア障害時は500で内部詳細を返さない
#[tokio::test]
async fn test_add_url_store_unavailable() {
    let test_app = build_unavailable_app();

    let (status, body) = post_add_url(&test_app.app, r#"{"url":"https://example.com"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Datastore unavailable");
}

/// 入力検証はデータストアより先に行われる
#[tokio::test]
async fn test_add_url_validation_before_store() {
    let test_app = build_unavailable_app();

    let (status, _) = post_add_url(&test_app.app, r#"{}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// サイズ上限を超えるボディは413（400にはしない）
#[tokio::test]
async fn test_add_url_oversized_body() {
    let test_app = build_app().await;
    let body = format!(r#"{{"url":"https://example.com/{}"}}"#, "a".repeat(3 * 1024 * 1024));

    let (status, text) = post_add_url(&test_app.app, &body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(text, "Request body too large");
    assert_eq!(test_app.registry.count().await.unwrap(), 0);
}
