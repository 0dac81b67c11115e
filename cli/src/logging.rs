use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "railway";

/// Initializes logging for the process.
///
/// Sets up up to two logging outputs:
/// - Console: one JSON object per line on stdout
/// - File: the same JSON records in `log_dir`, rotated daily, when a directory is given
///
/// Default log level is "info", but can be overridden with RUST_LOG:
/// - RUST_LOG=debug api_probe
/// - RUST_LOG=http_fetcher=debug,service=info api_probe
///
/// Returns a guard that must be kept alive for the duration of the program
/// when file logging is enabled. Dropping this guard stops file logging.
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .json()
        .with_current_span(false);

    let (file_layer, guard) = match log_dir.map(file_writer) {
        Some(Ok((writer, guard))) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .json()
                .with_file(true)
                .with_line_number(true);
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            eprintln!("Warning: Failed to set up file logging: {}", e);
            eprintln!("Logs will only be written to stdout.");
            (None, None)
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// RUST_LOG when set and valid, otherwise `DEFAULT_FILTER`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Creates `log_dir` if needed and opens a daily rotated appender in it.
pub fn file_writer(
    log_dir: &Path,
) -> Result<(NonBlocking, WorkerGuard), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)?;

    Ok(tracing_appender::non_blocking(file_appender))
}
