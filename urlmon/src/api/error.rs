//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use crate::common::error::MonitorError;
use axum::response::{IntoResponse, Response};

/// Axum用のエラーレスポンス型
///
/// ボディは `external_message()` のプレーンテキストのみで、内部詳細は含めない。
#[derive(Debug)]
pub struct AppError(pub MonitorError);

impl From<MonitorError> for AppError {
    fn from(err: MonitorError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Full error details are logged where the error is raised
        (self.0.status_code(), self.0.external_message()).into_response()
    }
}
