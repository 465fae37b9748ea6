//! URLレコードとリクエスト型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 監視対象URLレコード
///
/// 一度作成されたら削除以外で変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    /// ストアが採番する一意なID
    pub id: Uuid,
    /// プローブ対象のURL（空文字列不可）
    pub url: String,
    /// 登録日時
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// 新しいIDと現在時刻でレコードを作成
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.into(),
            created_at: Utc::now(),
        }
    }
}

/// POST /add-url のリクエストボディ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddUrlRequest {
    /// 登録するURL
    #[serde(default)]
    pub url: Option<String>,
}

impl AddUrlRequest {
    /// 空白のみでないURLをそのまま返す
    pub fn validated_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }
}
