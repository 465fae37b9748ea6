//! URLプローバー
//!
//! 一定間隔でレジストリを読み出し、各URLへGETを1回ずつ送信する（スイープ）。
//!
//! - 一覧取得に失敗したスイープは丸ごとスキップし、次のティックで再試行する
//! - 各プローブは独立したタイムアウトを持ち、失敗は他のURLに影響しない
//! - 同時実行数は `probe_concurrency` で制限する

use crate::common::error::{MonitorError, MonitorResult};
use crate::common::types::UrlRecord;
use crate::config::{
    MonitorConfig, DEFAULT_PROBE_CONCURRENCY, DEFAULT_PROBE_TIMEOUT_SECS,
    DEFAULT_SWEEP_INTERVAL_SECS,
};
use crate::registry::UrlRegistry;
use crate::shutdown::ShutdownController;
use futures::stream::{self, StreamExt};
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// プローバー設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProberConfig {
    /// スイープ間隔
    pub interval: Duration,
    /// 1プローブあたりのタイムアウト
    pub timeout: Duration,
    /// 最大同時プローブ数
    pub concurrency: usize,
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            concurrency: DEFAULT_PROBE_CONCURRENCY,
        }
    }
}

impl From<&MonitorConfig> for ProberConfig {
    fn from(config: &MonitorConfig) -> Self {
        Self {
            interval: config.sweep_interval,
            timeout: config.probe_timeout,
            concurrency: config.probe_concurrency,
        }
    }
}

/// 1件のプローブ結果
#[derive(Debug)]
pub struct ProbeOutcome {
    /// プローブ対象URL
    pub url: String,
    /// 応答ステータス、または失敗理由
    pub result: MonitorResult<StatusCode>,
    /// 所要時間
    pub elapsed: Duration,
}

impl ProbeOutcome {
    /// HTTPレスポンスが得られたか（ステータスは問わない）
    pub fn is_reachable(&self) -> bool {
        self.result.is_ok()
    }
}

/// 1スイープの集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// プローブしたURL数
    pub total: usize,
    /// 応答があったURL数
    pub reachable: usize,
    /// 接続失敗・タイムアウトしたURL数
    pub unreachable: usize,
}

/// URLプローバー
#[derive(Clone)]
pub struct UrlProber {
    registry: UrlRegistry,
    client: Client,
    config: ProberConfig,
}

impl UrlProber {
    /// 新しいプローバーを作成
    ///
    /// タイムアウトはHTTPクライアントに設定し、全プローブに適用する。
    pub fn new(registry: UrlRegistry, config: ProberConfig) -> MonitorResult<Self> {
        if config.interval.is_zero() || config.timeout.is_zero() || config.concurrency == 0 {
            return Err(MonitorError::Config(format!(
                "invalid prober config: {:?}",
                config
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("urlmon/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MonitorError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            registry,
            client,
            config,
        })
    }

    /// 設定値
    pub fn config(&self) -> &ProberConfig {
        &self.config
    }

    /// バックグラウンドで監視を開始
    ///
    /// 最初のスイープは即時に実行し、以降は一定間隔で実行する。
    /// `shutdown` が発火するとタイマーを解放して終了する。
    pub fn start(self, shutdown: ShutdownController) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.monitor_loop(shutdown).await;
        })
    }

    /// 監視ループ
    async fn monitor_loop(&self, shutdown: ShutdownController) {
        let mut timer = interval(self.config.interval);
        // 長いスイープの後にティックをまとめて消化しない
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            interval_secs = self.config.interval.as_secs_f64(),
            timeout_secs = self.config.timeout.as_secs_f64(),
            concurrency = self.config.concurrency,
            "URL prober started"
        );

        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                _ = timer.tick() => {}
            }

            tokio::select! {
                _ = shutdown.wait() => {
                    info!("Shutdown requested, abandoning in-flight sweep");
                    break;
                }
                _ = self.run_sweep() => {}
            }
        }

        info!("URL prober stopped");
    }

    /// スイープを実行し、失敗はログのみに留める
    async fn run_sweep(&self) {
        if let Err(e) = self.sweep().await {
            error!(error = %e, "Skipping sweep: failed to list urls");
        }
    }

    /// 1回分のスイープ
    ///
    /// 一覧取得に失敗した場合はプローブを一切行わずにエラーを返す。
    pub async fn sweep(&self) -> MonitorResult<SweepSummary> {
        let records = self.registry.list_all().await?;

        if records.is_empty() {
            debug!("No urls registered; nothing to probe");
            return Ok(SweepSummary::default());
        }

        info!(count = records.len(), "Pinging URLs...");
        let start = Instant::now();

        // spawnされたタスクから呼ばれるため、レコードはストリームへ移動する
        let outcomes: Vec<ProbeOutcome> = stream::iter(records)
            .map(|record| async move { self.probe(&record).await })
            .buffer_unordered(self.config.concurrency)
            .collect()
            .await;

        let reachable = outcomes.iter().filter(|o| o.is_reachable()).count();
        let summary = SweepSummary {
            total: outcomes.len(),
            reachable,
            unreachable: outcomes.len() - reachable,
        };

        info!(
            total = summary.total,
            reachable = summary.reachable,
            unreachable = summary.unreachable,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Sweep completed"
        );

        Ok(summary)
    }

    /// 単一URLのプローブ
    ///
    /// 応答ボディは読まずに破棄する。
    pub async fn probe(&self, record: &UrlRecord) -> ProbeOutcome {
        let start = Instant::now();
        let result = self
            .client
            .get(&record.url)
            .send()
            .await
            .map(|response| response.status())
            .map_err(MonitorError::from);
        let elapsed = start.elapsed();
        let latency_ms = elapsed.as_millis() as u64;

        match &result {
            Ok(status) if status.is_client_error() || status.is_server_error() => {
                warn!(
                    url = %record.url,
                    status = status.as_u16(),
                    latency_ms,
                    "Pinged url with error status"
                );
            }
            Ok(status) => {
                info!(
                    url = %record.url,
                    status = status.as_u16(),
                    latency_ms,
                    "Pinged url"
                );
            }
            Err(e) => {
                warn!(
                    url = %record.url,
                    error = %e,
                    latency_ms,
                    "Failed to ping url"
                );
            }
        }

        ProbeOutcome {
            url: record.url.clone(),
            result,
            elapsed,
        }
    }
}
