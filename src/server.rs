//! Server initialization and startup logic for Nightqueue.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nightqueue_api::{AppState, HttpConfig, QueueServer};
use nightqueue_config::{Config, LoggingConfig};
use nightqueue_core::{
    FileQueueStore, Gate, KeepalivePinger, PingerSettings, QueueManager, RequestQueue,
};

/// Initialize tracing with console output and, if configured, daily-rotated log files.
///
/// `RUST_LOG` takes precedence over `logging.level`.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    let file_layer = if logging.file {
        let log_dir = logging.log_dir();
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("nightqueue")
            .filename_suffix("log")
            .max_log_files(14)
            .build(&log_dir)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the writer guard alive for the program duration
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .init();

    Ok(())
}

/// Build the queue manager from configuration.
pub(crate) async fn build_manager(
    config: &Config,
) -> Result<QueueManager, Box<dyn std::error::Error>> {
    let store = Arc::new(FileQueueStore::new(&config.storage.queue_file).await?);
    info!("Queue file: {}", store.path().display());
    let queue = RequestQueue::load(store).await;

    let settings = PingerSettings::new(config.keepalive.url.clone())
        .with_interval(Duration::from_secs(config.keepalive.interval_secs))
        .with_timeout(Duration::from_secs(config.keepalive.timeout_secs))
        .with_enabled(config.keepalive.enabled);
    let gate = Gate::new(KeepalivePinger::new(settings)?);

    Ok(QueueManager::new(queue, gate))
}

/// Run the server in foreground.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Nightqueue v{}", env!("CARGO_PKG_VERSION"));

    let manager = build_manager(&config).await?;
    let state = Arc::new(AppState::new(manager));

    let http_config = HttpConfig::new(config.server.host.clone(), config.server.port);
    QueueServer::new(http_config, state).run().await
}
