//! URLテーブル操作
//!
//! 各関数は単一のSQL文のみを実行するため、呼び出し側でのロックは不要。

use crate::common::types::UrlRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// URLレコードを登録
pub async fn insert_url(pool: &SqlitePool, record: &UrlRecord) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO urls (id, url, created_at) VALUES (?, ?, ?)")
        .bind(record.id.to_string())
        .bind(&record.url)
        .bind(record.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(pool)
        .await?;

    Ok(())
}

/// 全URLレコードを登録順で取得
///
/// `created_at` は固定幅のRFC 3339文字列で保存しているため文字列順で並べ替えられる。
pub async fn list_urls(pool: &SqlitePool) -> Result<Vec<UrlRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, UrlRow>(
        r#"
        SELECT id, url, created_at
        FROM urls
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

/// IDでURLレコードを削除し、削除件数（0または1）を返す
pub async fn delete_url(pool: &SqlitePool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM urls WHERE id = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// 登録件数を取得
pub async fn count_urls(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: String,
    url: String,
    created_at: String,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord {
            id: Uuid::parse_str(&row.id).unwrap_or_default(),
            url: row.url,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        }
    }
}
