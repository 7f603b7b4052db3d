use anyhow::{Context, Result, anyhow};

const DEFAULT_LOCALE: &str = "en";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_OTEL_ENDPOINT: &str = "http://otel-collector:4317";

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub is_dev: bool,
    pub enable_file: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub locale: String,
    pub request_timeout_secs: u64,
    pub otel_endpoint: String,
    pub log: LogConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("PRODUCT_API_URL")
            .context("Missing environment variable: PRODUCT_API_URL")?;

        let api_url = api_url.trim().trim_end_matches('/').to_string();
        if api_url.is_empty() {
            return Err(anyhow!("PRODUCT_API_URL must not be empty"));
        }

        let locale = lookup("APP_LOCALE")
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a valid u64 integer")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let otel_endpoint =
            lookup("OTEL_ENDPOINT").unwrap_or_else(|| DEFAULT_OTEL_ENDPOINT.to_string());

        let is_dev = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let enable_file = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            api_url,
            locale,
            request_timeout_secs,
            otel_endpoint,
            log: LogConfig {
                is_dev,
                enable_file,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_url_is_set() {
        let config =
            Config::from_lookup(lookup_from(&[("PRODUCT_API_URL", "http://api/")])).unwrap();

        assert_eq!(config.api_url, "http://api");
        assert_eq!(config.locale, "en");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.otel_endpoint, "http://otel-collector:4317");
        assert!(!config.log.is_dev);
        assert!(!config.log.enable_file);
    }

    #[test]
    fn missing_url_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("PRODUCT_API_URL"));
    }

    #[test]
    fn invalid_timeout_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("PRODUCT_API_URL", "http://api"),
            ("REQUEST_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("REQUEST_TIMEOUT_SECS"));
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("PRODUCT_API_URL", "http://api"),
            ("APP_LOCALE", "AR"),
            ("REQUEST_TIMEOUT_SECS", "3"),
            ("DEV_MODE", "1"),
            ("ENABLE_FILE_LOG", "true"),
        ]))
        .unwrap();

        assert_eq!(config.locale, "ar");
        assert_eq!(config.request_timeout_secs, 3);
        assert!(config.log.is_dev);
        assert!(config.log.enable_file);
    }
}
