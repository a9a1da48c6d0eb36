use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_NOTICE_DISMISS_MS,
    MAX_NOTICE_DISMISS_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Settings for the project tracker client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the projects API, without the `/projects` suffix
    pub api_base_url: String,
    /// How long a success notice stays visible
    pub notice_dismiss_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            notice_dismiss_ms: DEFAULT_NOTICE_DISMISS_MS,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::client(format!(
                "client.api_base_url must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }

        if self.notice_dismiss_ms > MAX_NOTICE_DISMISS_MS {
            return Err(ConfigError::client(format!(
                "client.notice_dismiss_ms must be <= {}, got {}",
                MAX_NOTICE_DISMISS_MS, self.notice_dismiss_ms
            )));
        }

        Ok(())
    }

    pub fn notice_dismiss(&self) -> Duration {
        Duration::from_millis(self.notice_dismiss_ms)
    }
}
