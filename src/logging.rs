//! Log setup.
//!
//! The terminal belongs to the UI, so logs only go to a daily-rotated file
//! under the configured directory.  `RUST_LOG` overrides the configured
//! level.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::LoggingConfig;

const LOG_FILE_PREFIX: &str = "photofeed.log";

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes and stops the background writer.
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.dir)
        .with_context(|| format!("failed to create log directory {}", config.dir))?;

    let file_appender = tracing_appender::rolling::daily(&config.dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter_layer = build_filter(env.as_deref(), &config.level)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(guard)
}

/// A valid `RUST_LOG` is used as given.  Otherwise the configured level
/// applies, with the HTTP stack's chatter turned down.
fn build_filter(env: Option<&str>, level: &str) -> Result<EnvFilter> {
    if let Some(filter) = env.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }

    Ok(EnvFilter::try_new(level)
        .with_context(|| format!("invalid log level {level:?}"))?
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("reqwest=info".parse()?))
}
