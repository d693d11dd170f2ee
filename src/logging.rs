//! Tracing setup for the command line binary

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::APP_NAME;

const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber writing daily-rotated log files into `log_dir`
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Log lines are
/// flushed in the background until the returned guard is dropped.
pub fn init(log_dir: &Path, json: bool) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::daily(log_dir, format!("{APP_NAME}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()?;
    }

    Ok(guard)
}
