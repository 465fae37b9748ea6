//! Integration Test: APIで登録したURLに対するスイープ

use crate::support::{build_app, build_unavailable_app, post_add_url};
use std::time::Duration;
use urlmon::health::{ProberConfig, UrlProber};
use urlmon::shutdown::ShutdownController;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config() -> ProberConfig {
    ProberConfig {
        interval: Duration::from_millis(100),
        timeout: Duration::from_millis(500),
        concurrency: 4,
    }
}

/// N件中K件が失敗してもN件分の結果が得られる
#[tokio::test]
async fn test_sweep_reports_every_url() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/up"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&mock)
        .await;

    let test_app = build_app().await;
    let urls = [
        format!("{}/up", mock.uri()),
        "http://127.0.0.1:1/down".to_string(),
        format!("{}/up", mock.uri()),
        "http://invalid host/".to_string(),
    ];
    for url in &urls {
        let body = serde_json::json!({ "url": url }).to_string();
        post_add_url(&test_app.app, &body).await;
    }

    let prober = UrlProber::new(test_app.registry.clone(), config()).unwrap();
    let summary = prober.sweep().await.unwrap();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.reachable, 2);
    assert_eq!(summary.unreachable, 2);
}

/// 削除済みのURLは次のスイープでプローブされない
#[tokio::test]
async fn test_sweep_reads_registry_each_time() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock)
        .await;

    let test_app = build_app().await;
    let record = test_app
        .registry
        .insert(&format!("{}/once", mock.uri()))
        .await
        .unwrap();

    let prober = UrlProber::new(test_app.registry.clone(), config()).unwrap();
    assert_eq!(prober.sweep().await.unwrap().total, 1);

    test_app
        .registry
        .delete_by_id(&record.id.to_string())
        .await
        .unwrap();
    assert_eq!(prober.sweep().await.unwrap().total, 0);

    assert_eq!(mock.received_requests().await.unwrap().len(), 1);
}

/// 一覧取得に失敗してもプローバーは停止せず、シャットダウンで終了する
#[tokio::test]
async fn test_prober_survives_store_outage() {
    let test_app = build_unavailable_app();
    let prober = UrlProber::new(test_app.registry.clone(), config()).unwrap();

    assert!(prober.sweep().await.is_err());

    let shutdown = ShutdownController::default();
    let handle = prober.start(shutdown.clone());

    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(!handle.is_finished());

    shutdown.request_shutdown();
    tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("prober did not stop")
        .expect("prober task panicked");
}
