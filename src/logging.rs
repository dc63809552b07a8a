//! File logging bootstrap.
//!
//! Logs go to size-rotated files under `<home>/logs/`. Initialization
//! happens at most once per process; later calls are no-ops.

use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

use crate::error::TodoError;

const LOG_FILE_BASENAME: &str = "todo";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Start file logging at `level` into `log_dir`.
///
/// # Errors
///
/// Returns `TodoError::Config` for an unknown level or when the log
/// directory or backend cannot be set up.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), TodoError> {
    let level = normalize_level(level)?;

    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, TodoError> {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            TodoError::Config(format!(
                "Failed to create log directory {}: {e}",
                log_dir.display()
            ))
        })?;

        let handle = Logger::try_with_str(level)
            .map_err(|e| TodoError::Config(format!("Invalid log level `{level}`: {e}")))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME)
                    .suppress_timestamp(),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::Direct)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|e| TodoError::Config(format!("Failed to start logger: {e}")))?;

        info!(
            "event=app_start version={} level={level} log_dir={}",
            env!("CARGO_PKG_VERSION"),
            log_dir.display()
        );
        Ok(handle)
    })?;

    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, TodoError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Ok("error"),
        "warn" | "warning" => Ok("warn"),
        "info" => Ok("info"),
        "debug" => Ok("debug"),
        "trace" => Ok("trace"),
        "off" => Ok("off"),
        other => Err(TodoError::Config(format!("Unsupported log level `{other}`"))),
    }
}
