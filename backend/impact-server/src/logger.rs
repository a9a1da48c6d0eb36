use crate::error::{Result as ServerErrorResult, ServerError};

use impact_config::LogLevel;
use impact_config::logger::{LogTarget, dispatch};

use std::path::PathBuf;

use log::info;

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = *log_level;

    dispatch(level_filter, log_file.as_deref(), colored, LogTarget::Stdout)?
        .apply()
        .map_err(|e| ServerError::logger(e.to_string()))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}
