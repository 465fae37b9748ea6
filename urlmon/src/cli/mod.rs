//! CLI module for urlmon
//!
//! Provides command-line interface for the URL monitor server.

/// serve サブコマンド
pub mod serve;

use clap::{Parser, Subcommand};

/// urlmon - periodically pings registered URLs and logs their reachability
#[derive(Parser, Debug)]
#[command(name = "urlmon")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    URLMON_HOST                  Bind address (default: 0.0.0.0)
    URLMON_PORT                  Listen port (default: 8000, legacy: PORT)
    URLMON_DATABASE_URL          Database URL (default: sqlite://urlmon.db, legacy: DATABASE_URL)
    URLMON_SWEEP_INTERVAL_SECS   Seconds between sweeps (default: 60)
    URLMON_PROBE_TIMEOUT_SECS    Per-probe timeout in seconds (default: 10)
    URLMON_PROBE_CONCURRENCY     Max concurrent probes per sweep (default: 8)
    URLMON_LOG_LEVEL             Log filter (default: info, legacy: RUST_LOG)
    URLMON_LOG_DIR               Directory for daily log files (optional)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the URL monitor server
    Serve(serve::ServeArgs),
}
