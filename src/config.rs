//! Process settings, read once at startup.
//!
//! Values come from the environment after an optional `.env` file has been
//! loaded. Empty variables are treated as unset.

use std::env;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },

    #[error("PATH_PREFIX must be empty or start with '/', got {0:?}")]
    InvalidPathPrefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub env: String,
    pub path_prefix: String,
    pub app_host: String,
    pub app_port: u16,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub request_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let path_prefix = normalize_path_prefix(get("PATH_PREFIX").unwrap_or_default())?;

        Ok(Self {
            env: get("ENV").unwrap_or_else(|| "local".to_string()),
            path_prefix,
            app_host: get("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            app_port: parse_number("APP_PORT", get("APP_PORT"), 8000)?,
            upstream_url: get("API_URL").unwrap_or_else(|| "http://localhost".to_string()),
            upstream_timeout: Duration::from_secs(parse_number(
                "UPSTREAM_TIMEOUT_SECS",
                get("UPSTREAM_TIMEOUT_SECS"),
                10,
            )?),
            request_timeout: Duration::from_secs(parse_number(
                "REQUEST_TIMEOUT_SECS",
                get("REQUEST_TIMEOUT_SECS"),
                10,
            )?),
        })
    }

    pub fn is_local(&self) -> bool {
        self.env.eq_ignore_ascii_case("local")
    }

    /// Default log directive when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.is_local() {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotANumber { name, value }),
        None => Ok(default),
    }
}

fn normalize_path_prefix(prefix: String) -> Result<String, ConfigError> {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidPathPrefix(prefix));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.env, "local");
        assert_eq!(settings.path_prefix, "");
        assert_eq!(settings.app_host, "127.0.0.1");
        assert_eq!(settings.app_port, 8000);
        assert_eq!(settings.upstream_url, "http://localhost");
        assert_eq!(settings.upstream_timeout, Duration::from_secs(10));
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
        assert_eq!(settings.default_log_filter(), "debug");
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("ENV", "production"),
            ("PATH_PREFIX", "/api/v1/"),
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "9000"),
            ("API_URL", "http://schedule.internal/data"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("REQUEST_TIMEOUT_SECS", "30"),
        ])
        .unwrap();

        assert_eq!(settings.path_prefix, "/api/v1");
        assert_eq!(settings.app_host, "0.0.0.0");
        assert_eq!(settings.app_port, 9000);
        assert_eq!(settings.upstream_url, "http://schedule.internal/data");
        assert_eq!(settings.upstream_timeout, Duration::from_secs(3));
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert!(!settings.is_local());
        assert_eq!(settings.default_log_filter(), "info");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let settings = settings_from(&[("APP_PORT", ""), ("API_URL", "  ")]).unwrap();
        assert_eq!(settings.app_port, 8000);
        assert_eq!(settings.upstream_url, "http://localhost");
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            settings_from(&[("APP_PORT", "eighty")]),
            Err(ConfigError::NotANumber {
                name: "APP_PORT",
                value: "eighty".to_string()
            })
        );
        assert!(matches!(
            settings_from(&[("APP_PORT", "70000")]),
            Err(ConfigError::NotANumber { name: "APP_PORT", .. })
        ));
        assert_eq!(
            settings_from(&[("PATH_PREFIX", "api")]),
            Err(ConfigError::InvalidPathPrefix("api".to_string()))
        );
    }

    #[test]
    fn test_root_prefix_means_no_prefix() {
        let settings = settings_from(&[("PATH_PREFIX", "/")]).unwrap();
        assert_eq!(settings.path_prefix, "");
    }
}
