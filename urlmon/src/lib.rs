//! URL monitor server
//!
//! 登録されたURLへ定期的にGETリクエストを送り、到達性をログに記録するサーバー

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// データベースアクセス
pub mod db;

/// 定期プローブ（到達性チェック）
pub mod health;

/// ロギング初期化ユーティリティ
pub mod logging;

/// URLレジストリ
pub mod registry;

/// axumサーバー起動
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// URLレジストリ
    pub registry: registry::UrlRegistry,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// レジストリから状態を構築する
    pub fn new(registry: registry::UrlRegistry) -> Self {
        Self {
            registry,
            shutdown: shutdown::ShutdownController::default(),
        }
    }
}
