//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout only carries command output. With a log file
//! the events are written there through a non-blocking appender instead.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// The returned guard flushes the file appender on drop and must be held
/// until the program exits.
pub fn init_logging(log_file: Option<&Path>, json: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (writer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {:?}", dir))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path {:?}", path))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_file.is_none());

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(guard)
}
