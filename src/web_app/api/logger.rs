// web_app/api/logger.rs - Server logging setup
//
// `.env` is loaded before the filter is built so RUST_LOG can live there.

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info";

/// Load `.env` (or `env_file`), then read RUST_LOG
pub fn env_filter(env_file: Option<&Path>) -> EnvFilter {
    match env_file {
        Some(path) => {
            dotenv::from_path(path).ok();
        }
        None => {
            dotenv::dotenv().ok();
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_server_logger() {
    tracing_subscriber::registry()
        .with(env_filter(None))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}
