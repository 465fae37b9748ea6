//! URL monitor server entry point

use clap::Parser;
use tracing::{error, info};
use urlmon::cli::{Cli, Commands};
use urlmon::common::error::MonitorResult;
use urlmon::config::{load_dotenv, MonitorConfig};
use urlmon::health::{ProberConfig, UrlProber};
use urlmon::registry::UrlRegistry;
use urlmon::{db, logging, server, AppState};

#[tokio::main]
async fn main() {
    // CLI引数の環境変数フォールバックとログ設定も .env から読めるように、最初に読み込む
    let dotenv_path = load_dotenv();

    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let config = match cli.command {
        Some(Commands::Serve(args)) => args.apply(MonitorConfig::from_env()),
        None => MonitorConfig::from_env(),
    };

    if let Err(e) = run(config).await {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

/// データベース接続を確立してからスケジューラとHTTPサーバーを起動する
async fn run(config: MonitorConfig) -> MonitorResult<()> {
    config.validate()?;

    info!("URL monitor v{}", env!("CARGO_PKG_VERSION"));
    info!("Connecting to database: {}", config.database_url);

    // 接続に失敗した場合はここで終了し、リクエストやスイープを受け付けない
    let pool = db::init_db_pool(&config.database_url).await?;
    info!("Database connected successfully");

    let registry = UrlRegistry::new(pool);
    match registry.count().await {
        Ok(count) => info!(count, "Loaded url registry"),
        Err(e) => error!(error = %e, "Failed to count registered urls"),
    }

    let state = AppState::new(registry.clone());

    let prober = UrlProber::new(registry, ProberConfig::from(&config))?;
    let prober_handle = prober.start(state.shutdown.clone());

    let result = server::run(state.clone(), &config.bind_addr()).await;

    state.shutdown.request_shutdown();
    if let Err(e) = prober_handle.await {
        error!("Prober task join error: {}", e);
    }

    result
}
