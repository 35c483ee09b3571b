//! File and stdout logging for hosts that don't install Bevy's `LogPlugin`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

use crate::config::EditorConfigData;
use crate::constants::DEFAULT_LOG_FILTER;

const LOG_FILE_NAME: &str = "actionforge.log";

/// Install a global subscriber writing to `logs_dir/actionforge.log` and stdout.
///
/// `filter` overrides the default directive when `RUST_LOG` is unset. Returns the
/// appender guard, which must be kept alive for the file writer to flush. Returns
/// `None` if the directory can't be created or a global subscriber already exists.
pub fn setup_logging(logs_dir: &Path, filter: Option<&str>) -> Option<WorkerGuard> {
    if std::fs::create_dir_all(logs_dir).is_err() {
        eprintln!("Failed to create logs directory {:?}", logs_dir);
        return None;
    }

    write_session_separator(&logs_dir.join(LOG_FILE_NAME));

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // No ANSI colors in the file
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(filter.unwrap_or(DEFAULT_LOG_FILTER))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .ok()?;

    Some(guard)
}

/// [`setup_logging`] with the filter saved in the editor config.
pub fn setup_logging_from_config(
    logs_dir: &Path,
    config: &EditorConfigData,
) -> Option<WorkerGuard> {
    setup_logging(logs_dir, config.log_filter.as_deref())
}

/// Append a timestamped separator so sessions are easy to tell apart.
fn write_session_separator(log_file_path: &Path) {
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }
}
