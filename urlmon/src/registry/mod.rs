//! URLレジストリ
//!
//! 監視対象URLの永続化を担う唯一のコンポーネント。
//! キャッシュは持たず、各操作は毎回データストアを読み書きする。

use crate::common::error::{MonitorError, MonitorResult};
use crate::common::types::UrlRecord;
use crate::db::traits::UrlRepository;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

/// URLレジストリ
///
/// クローンはすべて同じデータストアを共有する。
#[derive(Clone)]
pub struct UrlRegistry {
    repository: Arc<dyn UrlRepository>,
}

impl UrlRegistry {
    /// 起動時に確立した接続プールからレジストリを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_repository(Arc::new(pool))
    }

    /// 任意のリポジトリ実装からレジストリを作成
    pub fn with_repository(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// URLを登録し、採番済みのレコードを返す
    pub async fn insert(&self, url: &str) -> MonitorResult<UrlRecord> {
        if url.trim().is_empty() {
            return Err(MonitorError::Validation("url must not be empty".to_string()));
        }

        let record = UrlRecord::new(url);
        self.repository.insert_url(&record).await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to insert url");
            MonitorError::from(e)
        })?;

        Ok(record)
    }

    /// 全レコードを取得（0件は空のVec）
    pub async fn list_all(&self) -> MonitorResult<Vec<UrlRecord>> {
        self.repository.list_urls().await.map_err(|e| {
            error!(error = %e, "Failed to list urls");
            MonitorError::from(e)
        })
    }

    /// IDでレコードを削除し、削除件数（0または1）を返す
    ///
    /// UUIDとして解釈できないIDは `MonitorError::InvalidId` になる。
    pub async fn delete_by_id(&self, id: &str) -> MonitorResult<u64> {
        let id = Uuid::parse_str(id).map_err(|e| MonitorError::InvalidId(format!("{}: {}", id, e)))?;

        self.repository.delete_url(id).await.map_err(|e| {
            error!(id = %id, error = %e, "Failed to delete url");
            MonitorError::from(e)
        })
    }

    /// 登録件数
    pub async fn count(&self) -> MonitorResult<usize> {
        let count = self.repository.count_urls().await?;
        Ok(count.max(0) as usize)
    }
}
