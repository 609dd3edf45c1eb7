use crate::bridge::DEFAULT_TIMEOUT;
use crate::error::TerminalError;
use crate::theme::Theme;
use folio_domain::config::LoggingConfig;
use serde::Deserialize;
use std::time::Duration;

/// Environment prefix of the terminal client (`FOLIO_SHELL__API_URL`, ...).
pub const CLIENT_ENV_PREFIX: &str = "FOLIO_SHELL";

/// Terminal client configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout_ms: u64,
    /// Report dispatched commands to the analytics endpoint.
    pub telemetry: bool,
    pub theme: Theme,
    pub logging: LoggingConfig,
}

impl ClientConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Rejects values that would make every request fail.
    ///
    /// # Errors
    /// Returns an error for a zero timeout or an empty API URL.
    pub fn validate(&self) -> Result<(), TerminalError> {
        if self.timeout_ms == 0 {
            return Err("timeout_ms must be greater than zero".into());
        }
        if self.api_url.trim().is_empty() {
            return Err("api_url must not be empty".into());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_owned(),
            timeout_ms: u64::try_from(DEFAULT_TIMEOUT.as_millis()).unwrap_or(u64::MAX),
            telemetry: true,
            theme: Theme::default(),
            logging: LoggingConfig { level: "warn".to_owned(), ..LoggingConfig::default() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_values_keep_defaults() {
        let config: ClientConfig =
            serde_json::from_value(serde_json::json!({ "theme": "red", "timeout_ms": 250 })).unwrap();

        assert_eq!(config.theme, Theme::Red);
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.logging.level, "warn");
        assert!(config.telemetry);
    }

    #[test]
    fn defaults_use_the_bridge_timeout_and_validate() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeouts_and_blank_urls_are_rejected() {
        let zero = ClientConfig { timeout_ms: 0, ..ClientConfig::default() };
        assert!(zero.validate().unwrap_err().to_string().contains("timeout_ms"));

        let blank = ClientConfig { api_url: "  ".to_owned(), ..ClientConfig::default() };
        assert!(blank.validate().is_err());
    }
}
