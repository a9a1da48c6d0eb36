mod client_config;
mod config;
mod error;
mod log_level;
pub mod logger;
mod logging_config;
mod server_config;


pub use client_config::ClientConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_NOTICE_DISMISS_MS: u64 = 3000;
const MAX_NOTICE_DISMISS_MS: u64 = 60_000;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

/// Environment variable naming an explicit config directory
pub const CONFIG_DIR_ENV: &str = "IMPACT_CONFIG_DIR";
/// Config directory used when `IMPACT_CONFIG_DIR` is unset, relative to cwd
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".impact";
