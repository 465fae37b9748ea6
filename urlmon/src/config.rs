//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to legacy variable names with warning logs, and the `MonitorConfig` that
//! the server is started from.

use crate::common::error::{MonitorError, MonitorResult};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// デフォルトの待ち受けホスト
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// デフォルトの待ち受けポート
pub const DEFAULT_PORT: u16 = 8000;
/// デフォルトのデータベースURL
pub const DEFAULT_DATABASE_URL: &str = "sqlite://urlmon.db";
/// デフォルトのスイープ間隔（秒）
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
/// デフォルトのプローブタイムアウト（秒）
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;
/// デフォルトの同時プローブ数
pub const DEFAULT_PROBE_CONCURRENCY: usize = 8;

/// Get an environment variable with fallback to a legacy name
///
/// If the new variable name is set, returns its value.
/// If only the legacy variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use urlmon::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("URLMON_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` when neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// カレントディレクトリ（または祖先）の `.env` を読み込む
///
/// 既に設定済みの環境変数は上書きしない。`.env` が無ければ `None`。
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// 指定したファイルを `.env` として読み込む
pub fn load_dotenv_from(path: &Path) -> MonitorResult<()> {
    dotenvy::from_path(path).map_err(|e| {
        MonitorError::Config(format!("failed to load {}: {}", path.display(), e))
    })
}

/// サーバー全体の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// 待ち受けホスト
    pub host: String,
    /// 待ち受けポート
    pub port: u16,
    /// データベース接続文字列
    pub database_url: String,
    /// スイープ間隔
    pub sweep_interval: Duration,
    /// 1プローブあたりのタイムアウト
    pub probe_timeout: Duration,
    /// 1スイープ内の最大同時プローブ数
    pub probe_concurrency: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            probe_concurrency: DEFAULT_PROBE_CONCURRENCY,
        }
    }
}

impl MonitorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let host = std::env::var("URLMON_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = get_env_with_fallback_parse("URLMON_PORT", "PORT", DEFAULT_PORT);
        let database_url =
            get_env_with_fallback_or("URLMON_DATABASE_URL", "DATABASE_URL", DEFAULT_DATABASE_URL);
        let sweep_interval_secs = get_env_with_fallback_parse(
            "URLMON_SWEEP_INTERVAL_SECS",
            "SWEEP_INTERVAL_SECS",
            DEFAULT_SWEEP_INTERVAL_SECS,
        );
        let probe_timeout_secs = get_env_with_fallback_parse(
            "URLMON_PROBE_TIMEOUT_SECS",
            "PROBE_TIMEOUT_SECS",
            DEFAULT_PROBE_TIMEOUT_SECS,
        );
        let probe_concurrency = get_env_with_fallback_parse(
            "URLMON_PROBE_CONCURRENCY",
            "PROBE_CONCURRENCY",
            DEFAULT_PROBE_CONCURRENCY,
        );

        Self {
            host,
            port,
            database_url,
            sweep_interval: Duration::from_secs(sweep_interval_secs),
            probe_timeout: Duration::from_secs(probe_timeout_secs),
            probe_concurrency,
        }
    }

    /// バインドアドレス（`host:port`）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 値の妥当性を検証する
    ///
    /// 間隔・タイムアウト・同時実行数はいずれも0を許可しない。
    pub fn validate(&self) -> MonitorResult<()> {
        if self.sweep_interval.is_zero() {
            return Err(MonitorError::Config(
                "sweep interval must be greater than zero".to_string(),
            ));
        }
        if self.probe_timeout.is_zero() {
            return Err(MonitorError::Config(
                "probe timeout must be greater than zero".to_string(),
            ));
        }
        if self.probe_concurrency == 0 {
            return Err(MonitorError::Config(
                "probe concurrency must be greater than zero".to_string(),
            ));
        }
        if self.database_url.trim().is_empty() {
            return Err(MonitorError::Config("database url is empty".to_string()));
        }
        Ok(())
    }
}
