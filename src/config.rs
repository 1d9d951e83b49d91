//! Console API configuration.
//!
//! Points the HTTP transport at the compliance API and says where the signed-in
//! session lives. Defaults target a local API; override via environment variables
//! or explicit construction for staging and tests.

use std::path::PathBuf;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Base URL every API path is appended to. A path component (e.g. `/api`) is kept.
    pub api_url: Url,
    /// JSON file holding `userProfile` and `jwtToken`. Without one the console runs
    /// unauthenticated.
    pub session_file: Option<PathBuf>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CONSOLE_API_URL` (default: `http://localhost:8080`)
    /// - `CONSOLE_SESSION_FILE` (optional)
    /// - `CONSOLE_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: env_url("CONSOLE_API_URL", DEFAULT_API_URL)?,
            session_file: std::env::var_os("CONSOLE_SESSION_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            timeout_secs: std::env::var("CONSOLE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Create a configuration pointing to a local mock server (for testing).
    pub fn local_mock(port: u16) -> Result<Self, ConfigError> {
        let raw = format!("http://127.0.0.1:{port}");
        Ok(Self {
            api_url: Url::parse(&raw)
                .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?,
            session_file: None,
            timeout_secs: 5,
        })
    }

    /// Same configuration against another base URL.
    pub fn with_api_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_url =
            Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;
        Ok(self)
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_mock_builds_valid_config() {
        let cfg = ConsoleConfig::local_mock(9000).unwrap();
        assert_eq!(cfg.api_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.session_file, None);
    }

    #[test]
    fn test_env_url_uses_default_when_var_absent() {
        let url = env_url("CONSOLE_NONEXISTENT_VAR_4711", DEFAULT_API_URL).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_env_url_rejects_invalid_url() {
        std::env::set_var("CONSOLE_TEST_BAD_URL", "not a url");
        let result = env_url("CONSOLE_TEST_BAD_URL", DEFAULT_API_URL);
        std::env::remove_var("CONSOLE_TEST_BAD_URL");
        assert!(matches!(result, Err(ConfigError::InvalidUrl(var, _)) if var == "CONSOLE_TEST_BAD_URL"));
    }

    #[test]
    fn test_with_api_url_keeps_other_settings() {
        let cfg = ConsoleConfig::local_mock(9000)
            .unwrap()
            .with_api_url("https://api.example.com/v1")
            .unwrap();
        assert_eq!(cfg.api_url.path(), "/v1");
        assert_eq!(cfg.timeout_secs, 5);
        assert!(ConsoleConfig::local_mock(9000)
            .unwrap()
            .with_api_url("::")
            .is_err());
    }
}
