//! serve サブコマンド
//!
//! URLモニターサーバーを起動します。
//! 引数が無い場合は `URLMON_*` 環境変数を読み、それも無い項目は `MonitorConfig::from_env` の値を使います。

use crate::config::MonitorConfig;
use clap::Args;
use std::time::Duration;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, env = "URLMON_PORT")]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long, env = "URLMON_HOST")]
    pub host: Option<String>,

    /// Database URL
    #[arg(long, env = "URLMON_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Seconds between sweeps
    #[arg(long, env = "URLMON_SWEEP_INTERVAL_SECS")]
    pub interval_secs: Option<u64>,

    /// Per-probe timeout in seconds
    #[arg(long, env = "URLMON_PROBE_TIMEOUT_SECS")]
    pub probe_timeout_secs: Option<u64>,

    /// Max concurrent probes per sweep
    #[arg(long, env = "URLMON_PROBE_CONCURRENCY")]
    pub probe_concurrency: Option<usize>,
}

impl ServeArgs {
    /// 指定された引数で設定を上書きする
    pub fn apply(&self, mut config: MonitorConfig) -> MonitorConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(database_url) = &self.database_url {
            config.database_url = database_url.clone();
        }
        if let Some(secs) = self.interval_secs {
            config.sweep_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = self.probe_timeout_secs {
            config.probe_timeout = Duration::from_secs(secs);
        }
        if let Some(concurrency) = self.probe_concurrency {
            config.probe_concurrency = concurrency;
        }
        config
    }
}
