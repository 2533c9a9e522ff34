//! Tracing setup for the trolix binary.
//!
//! Logs always go to stderr. When a log directory is configured they are also
//! written to a daily rolling file through a non-blocking writer.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{utils::SERVER_LOG_PREFIX, TrolixError, TrolixResult};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the `verbose` default of `debug` / `info`.
/// The returned guard must be held for as long as file logging should flush.
pub fn init_tracing(verbose: bool, log_dir: Option<&Path>) -> TrolixResult<Option<WorkerGuard>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(TrolixError::custom)?;
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, SERVER_LOG_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .try_init()
        .map_err(TrolixError::custom)?;

    tracing::debug!("writing logs to {}", log_dir.display());
    Ok(Some(guard))
}
