//! Repository traitパターン定義
//!
//! DB操作を抽象化し、データストア障害をテストで再現できるようにする。
//! traitの各メソッドは `db::urls` のフリー関数に対応する。

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::common::types::UrlRecord;

/// URLレコードCRUD操作のRepository trait
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// URLレコードを登録
    async fn insert_url(&self, record: &UrlRecord) -> Result<(), sqlx::Error>;
    /// 全URLレコードを取得
    async fn list_urls(&self) -> Result<Vec<UrlRecord>, sqlx::Error>;
    /// IDでURLレコードを削除し、削除件数を返す
    async fn delete_url(&self, id: Uuid) -> Result<u64, sqlx::Error>;
    /// 登録件数を取得
    async fn count_urls(&self) -> Result<i64, sqlx::Error>;
}

#[async_trait]
impl UrlRepository for SqlitePool {
    async fn insert_url(&self, record: &UrlRecord) -> Result<(), sqlx::Error> {
        super::urls::insert_url(self, record).await
    }

    async fn list_urls(&self) -> Result<Vec<UrlRecord>, sqlx::Error> {
        super::urls::list_urls(self).await
    }

    async fn delete_url(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        super::urls::delete_url(self, id).await
    }

    async fn count_urls(&self) -> Result<i64, sqlx::Error> {
        super::urls::count_urls(self).await
    }
}
