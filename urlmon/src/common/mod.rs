//! 共通型・エラー定義

/// エラー型
pub mod error;

/// データ型
pub mod types;
