//! データベースアクセス層
//!
//! SQLiteベースのデータ永続化

/// URLテーブル操作
pub mod urls;

/// Repository traitパターン（テスタビリティ向上）
pub mod traits;

use crate::common::error::{MonitorError, MonitorResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// 接続プールの最大接続数
const MAX_CONNECTIONS: u32 = 5;

/// データベース接続プールを作成し、マイグレーションを実行する
///
/// 起動時に一度だけ呼び出す。失敗した場合はサーバーを起動してはならない。
pub async fn init_db_pool(database_url: &str) -> MonitorResult<SqlitePool> {
    ensure_parent_dir(database_url)?;

    let connect_options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| MonitorError::Database(format!("Invalid database url: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(connect_options)
        .await
        .map_err(|e| MonitorError::Database(e.to_string()))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| MonitorError::Database(format!("Migration failed: {}", e)))?;

    Ok(pool)
}

/// SQLiteファイルはディレクトリが存在しないと作成できないため、先に作成しておく
fn ensure_parent_dir(database_url: &str) -> MonitorResult<()> {
    let Some(path) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    // `sqlite::memory:` のような特殊指定はスキップ
    if path.starts_with(':') {
        return Ok(());
    }

    let normalized = path.trim_start_matches("//");
    let path_without_params = normalized.split('?').next().unwrap_or(normalized);
    let db_path = std::path::Path::new(path_without_params);
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            MonitorError::Database(format!(
                "Failed to create database directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}
