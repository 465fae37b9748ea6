//! REST APIハンドラー
//!
//! URLの登録・一覧・削除

/// エラーレスポンス
pub mod error;
/// URLレジストリのハンドラー
pub mod urls;

use crate::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// アプリケーションルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/add-url", post(urls::add_url))
        .route("/list-urls", get(urls::list_urls))
        .route("/remove-url/:id", delete(urls::remove_url))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - 死活確認（データストアには触れない）
async fn health() -> &'static str {
    "ok"
}
