//! 到達性モニター
//!
//! 定期的に登録済みURLへGETリクエストを送り、結果をログに記録する。
//! 結果は永続化せず、APIの呼び出し元にも返さない。

/// URLプローバー
pub mod prober;

pub use prober::{ProbeOutcome, ProberConfig, SweepSummary, UrlProber};
