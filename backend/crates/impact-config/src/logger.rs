//! fern dispatch shared by the server and the CLI.
//!
//! Every line reads `[<rfc3339> - <LEVEL>] message [file:line]`, whether it
//! goes to a console stream or a log file.

use crate::{ConfigError, ConfigErrorResult};

use std::fmt::Display;
use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Console stream used when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stdout,
    Stderr,
}

/// Format one log line
pub fn format_line(
    level: impl Display,
    message: impl Display,
    file: Option<&str>,
    line: Option<u32>,
) -> String {
    format!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = file.unwrap_or("unknown"),
        line = line.unwrap_or(0),
    )
}

/// Build the dispatcher without installing it.
///
/// A log file wins over the console and is never colored; its parent
/// directory is created if missing.
pub fn dispatch(
    level: LevelFilter,
    log_file: Option<&Path>,
    colored: bool,
    target: LogTarget,
) -> ConfigErrorResult<Dispatch> {
    let base_dispatch = Dispatch::new()
        .level(level)
        .level_for("hyper", LevelFilter::Warn);

    if let Some(log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
        let file = fern::log_file(log_path).map_err(|e| ConfigError::io(log_path, e))?;

        return Ok(base_dispatch
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{}",
                    format_line(record.level(), message, record.file(), record.line())
                ))
            })
            .chain(file));
    }

    let console = if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        base_dispatch.format(move |out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(
                    colors.color(record.level()),
                    message,
                    record.file(),
                    record.line()
                )
            ))
        })
    } else {
        base_dispatch.format(|out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(record.level(), message, record.file(), record.line())
            ))
        })
    };

    Ok(match target {
        LogTarget::Stdout => console.chain(std::io::stdout()),
        LogTarget::Stderr => console.chain(std::io::stderr()),
    })
}
