//! Bot configuration
//!
//! Three secrets are required; everything else has a default. Values come
//! from the process environment, optionally seeded from a `.env` file.

use std::path::PathBuf;
use std::time::Duration;

use homework_client::telegram::DEFAULT_API_URL;

/// Default homework status endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default pause between poll cycles, in seconds
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Environment variable naming an optional log file
pub const LOG_FILE_VAR: &str = "BOT_LOG_FILE";

const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the status endpoint
    pub practicum_token: String,

    /// Bot API token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Status endpoint URL
    pub endpoint: String,

    /// Bot API server URL
    pub telegram_api_url: String,

    /// Pause between poll cycles
    pub retry_period: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: the public endpoint)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup
    ///
    /// Empty values count as missing. Every missing secret is named in the error.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            anyhow::bail!(
                "Missing required environment variables: {}",
                missing.join(", ")
            );
        }

        let required = |key: &str| {
            get(key).ok_or_else(|| anyhow::anyhow!("{} environment variable not set", key))
        };

        let retry_period = get("RETRY_PERIOD")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS));

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            retry_period,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.retry_period.is_zero() {
            anyhow::bail!("retry_period must be greater than 0");
        }

        Ok(())
    }
}

/// Reads the optional log file path
pub fn log_file_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn secrets() -> Vec<(&'static str, &'static str)> {
        vec![
            ("PRACTICUM_TOKEN", "practicum-secret"),
            ("TELEGRAM_TOKEN", "telegram-secret"),
            ("TELEGRAM_CHAT_ID", "123456"),
        ]
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&secrets())).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_secrets_missing() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("PRACTICUM_TOKEN"));
        assert!(message.contains("TELEGRAM_TOKEN"));
        assert!(message.contains("TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn test_one_secret_missing_or_empty() {
        let mut vars = secrets();
        vars.retain(|(key, _)| *key != "TELEGRAM_CHAT_ID");
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_CHAT_ID"));
        assert!(!err.to_string().contains("PRACTICUM_TOKEN"));

        let mut vars = secrets();
        vars[0] = ("PRACTICUM_TOKEN", "  ");
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(err.to_string().contains("PRACTICUM_TOKEN"));
    }

    #[test]
    fn test_overrides() {
        let mut vars = secrets();
        vars.push(("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/"));
        vars.push(("TELEGRAM_API_URL", "http://localhost:8081"));
        vars.push(("RETRY_PERIOD", "30"));

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.telegram_api_url, "http://localhost:8081");
        assert_eq!(config.retry_period, Duration::from_secs(30));
    }

    #[test]
    fn test_unparsable_retry_period_falls_back() {
        let mut vars = secrets();
        vars.push(("RETRY_PERIOD", "ten minutes"));
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.retry_period, Duration::from_secs(600));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_lookup(lookup_from(&secrets())).unwrap();

        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.endpoint = DEFAULT_ENDPOINT.to_string();

        config.retry_period = Duration::ZERO;
        assert!(config.validate().is_err());
        config.retry_period = Duration::from_secs(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::from_lookup(lookup_from(&secrets())).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("practicum-secret"));
        assert!(!debug.contains("telegram-secret"));
        assert!(!debug.contains("123456"));
    }
}
