//! URLレジストリAPI
//!
//! 入力を検証してからレジストリに委譲し、結果をHTTPレスポンスに変換する。

use super::error::AppError;
use crate::common::error::MonitorError;
use crate::common::types::{AddUrlRequest, UrlRecord};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

/// POST /add-url - URL登録
///
/// `url` が無い・空文字列・JSONとして解釈できないボディはすべて400を返し、
/// データストアには触れない。サイズ上限を超えたボディは413。
pub async fn add_url(
    State(state): State<AppState>,
    payload: Result<Json<AddUrlRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            debug!(error = %rejection, "Rejected oversized add-url body");
            return Err(MonitorError::PayloadTooLarge(rejection.body_text()).into());
        }
        Err(rejection) => {
            debug!(error = %rejection, "Rejected add-url body");
            AddUrlRequest::default()
        }
    };

    let Some(url) = request.validated_url() else {
        return Err(MonitorError::Validation("url is required".to_string()).into());
    };

    let record = state.registry.insert(url).await?;
    info!(id = %record.id, url = %record.url, "URL added");

    Ok((StatusCode::CREATED, "URL added successfully"))
}

/// GET /list-urls - 登録済みURL一覧
pub async fn list_urls(State(state): State<AppState>) -> Result<Json<Vec<UrlRecord>>, AppError> {
    let records = state.registry.list_all().await?;
    Ok(Json(records))
}

/// DELETE /remove-url/:id - URL削除
///
/// 形式不正なIDは400、存在しないIDは404。
pub async fn remove_url(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.registry.delete_by_id(&id).await.map_err(|e| {
        if let MonitorError::InvalidId(_) = &e {
            debug!(id = %id, "Rejected malformed url id");
        }
        e
    })?;

    if deleted == 0 {
        return Err(MonitorError::NotFound(id).into());
    }

    info!(id = %id, "URL removed");
    Ok((StatusCode::OK, "URL removed successfully"))
}
