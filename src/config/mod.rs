//! Configuration module for the course admin client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Log output format for the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the course registry backend, without trailing slash
    pub api_url: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Per-request timeout; `None` keeps the HTTP client default
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("COURSE_ADMIN_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());

        let log_level = env::var("COURSE_ADMIN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("COURSE_ADMIN_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let request_timeout = env::var("COURSE_ADMIN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            api_url: normalize_base_url(&api_url),
            log_level,
            log_format,
            request_timeout,
        }
    }

    /// Replace the API URL, e.g. from a command line flag.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = normalize_base_url(api_url);
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "COURSE_ADMIN_API_URL",
        "COURSE_ADMIN_LOG_LEVEL",
        "COURSE_ADMIN_LOG_FORMAT",
        "COURSE_ADMIN_TIMEOUT_SECS",
    ];

    static ENV_LOCK: once_cell::sync::Lazy<std::sync::Mutex<()>> =
        once_cell::sync::Lazy::new(|| std::sync::Mutex::new(()));

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_config_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("COURSE_ADMIN_API_URL", "http://registry.local:8000/");
        env::set_var("COURSE_ADMIN_LOG_FORMAT", "json");
        env::set_var("COURSE_ADMIN_TIMEOUT_SECS", "15");

        let config = Config::from_env();
        clear_env();

        assert_eq!(config.api_url, "http://registry.local:8000");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_unparsable_timeout_means_none() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("COURSE_ADMIN_TIMEOUT_SECS", "soon");

        let config = Config::from_env();
        clear_env();

        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_api_url_override() {
        let config = Config {
            api_url: "http://a".into(),
            log_level: "info".into(),
            log_format: LogFormat::Text,
            request_timeout: None,
        }
        .with_api_url(" http://b:9000// ");
        assert_eq!(config.api_url, "http://b:9000");
    }
}
