//! ロギング初期化
//!
//! `URLMON_LOG_LEVEL`（旧: `RUST_LOG`）でフィルタを指定し、標準出力へ出力する。
//! `URLMON_LOG_DIR` が設定されている場合は日次ローテーションのファイルにも出力する。

use crate::common::error::{MonitorError, MonitorResult};
use crate::config::get_env_with_fallback;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "urlmon.log";

/// フィルタ文字列を決定する
fn filter_directive() -> String {
    get_env_with_fallback("URLMON_LOG_LEVEL", "RUST_LOG")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// グローバルなtracingサブスクライバーを初期化する
pub fn init() -> MonitorResult<()> {
    let filter = EnvFilter::try_new(filter_directive())
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| MonitorError::Config(format!("invalid log filter: {}", e)))?;

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(true);

    let file_layer = std::env::var("URLMON_LOG_DIR")
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(|dir| {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(appender)
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| MonitorError::Internal(format!("failed to install subscriber: {}", e)))
}
