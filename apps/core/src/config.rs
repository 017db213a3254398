//! Runtime configuration for the chat assistant.
//!
//! Everything is read from the environment (a `.env` file is loaded by the
//! binary before this runs). Unset variables fall back to the defaults below.

use std::env;
use std::time::Duration;

use url::Url;
use validator::Validate;

use crate::error::AppError;

pub const ENV_API_URL: &str = "PORTFOLIO_API_URL";
pub const ENV_MODE: &str = "PORTFOLIO_MODE";
pub const ENV_CACHE_TTL_SECS: &str = "PORTFOLIO_CACHE_TTL_SECS";
pub const ENV_RESPONSE_DELAY_MS: &str = "PORTFOLIO_RESPONSE_DELAY_MS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "PORTFOLIO_REQUEST_TIMEOUT_SECS";

pub const DEVELOPMENT_API_URL: &str = "http://localhost:5000";
pub const PRODUCTION_API_URL: &str = "https://ahib-portfolio-backend.onrender.com";

const DEFAULT_CACHE_TTL_SECS: u64 = 5 * 60;
const DEFAULT_RESPONSE_DELAY_MS: u64 = 1000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings shared by the HTTP client, the response cache and the session.
#[derive(Debug, Clone, Validate)]
pub struct ChatConfig {
    /// Base URL of the portfolio backend; endpoint paths are joined onto it.
    pub api_base_url: Url,
    /// How long fetched reference data stays fresh.
    #[validate(range(min = 1, max = 86_400))]
    pub cache_ttl_secs: u64,
    /// Simulated "thinking" delay before a panel reply is shown.
    #[validate(range(max = 60_000))]
    pub response_delay_ms: u64,
    #[validate(range(min = 1, max = 600))]
    pub request_timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        // NOTE: expect() is acceptable here, the URL is a compile-time constant.
        Self {
            api_base_url: Url::parse(PRODUCTION_API_URL).expect("Invalid production URL constant"),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ChatConfig {
    /// Builds a config pointing at `base_url` with every other setting at its default.
    pub fn with_base_url(base_url: &str) -> Result<Self, AppError> {
        let config = Self {
            api_base_url: Url::parse(base_url)?,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from environment variables.
    ///
    /// The base URL is resolved in this order: `PORTFOLIO_API_URL` if set,
    /// the local development server when `PORTFOLIO_MODE=development`,
    /// otherwise the production backend.
    pub fn from_env() -> Result<Self, AppError> {
        let config = Self {
            api_base_url: Url::parse(&resolve_base_url())?,
            cache_ttl_secs: read_u64(ENV_CACHE_TTL_SECS, DEFAULT_CACHE_TTL_SECS)?,
            response_delay_ms: read_u64(ENV_RESPONSE_DELAY_MS, DEFAULT_RESPONSE_DELAY_MS)?,
            request_timeout_secs: read_u64(ENV_REQUEST_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolves an endpoint path such as `/api/ai/chat` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        Ok(self.api_base_url.join(path)?)
    }
}

fn resolve_base_url() -> String {
    match env::var(ENV_API_URL) {
        Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => match env::var(ENV_MODE).as_deref() {
            Ok("development") => DEVELOPMENT_API_URL.to_string(),
            _ => PRODUCTION_API_URL.to_string(),
        },
    }
}

fn read_u64(name: &str, default: u64) -> Result<u64, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} must be an integer: {}", name, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 5] = [
        ENV_API_URL,
        ENV_MODE,
        ENV_CACHE_TTL_SECS,
        ENV_RESPONSE_DELAY_MS,
        ENV_REQUEST_TIMEOUT_SECS,
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS.iter().map(|name| (*name, None)).collect()
    }

    #[test]
    fn test_defaults_point_at_production() {
        temp_env::with_vars(unset_all(), || {
            let config = ChatConfig::from_env().unwrap();
            assert_eq!(config.api_base_url.as_str(), "https://ahib-portfolio-backend.onrender.com/");
            assert_eq!(config.cache_ttl(), Duration::from_secs(300));
            assert_eq!(config.response_delay(), Duration::from_millis(1000));
        });
    }

    #[test]
    fn test_development_mode_uses_localhost() {
        let mut vars = unset_all();
        vars.push((ENV_MODE, Some("development")));
        temp_env::with_vars(vars, || {
            let config = ChatConfig::from_env().unwrap();
            assert_eq!(config.api_base_url.as_str(), "http://localhost:5000/");
        });
    }

    #[test]
    fn test_explicit_url_wins_over_mode() {
        let mut vars = unset_all();
        vars.push((ENV_MODE, Some("development")));
        vars.push((ENV_API_URL, Some("https://api.example.com")));
        temp_env::with_vars(vars, || {
            let config = ChatConfig::from_env().unwrap();
            assert_eq!(config.api_base_url.host_str(), Some("api.example.com"));
        });
    }

    #[test]
    fn test_invalid_numbers_are_config_errors() {
        let mut vars = unset_all();
        vars.push((ENV_CACHE_TTL_SECS, Some("five minutes")));
        temp_env::with_vars(vars, || {
            let err = ChatConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        });
    }

    #[test]
    fn test_zero_ttl_fails_validation() {
        let mut vars = unset_all();
        vars.push((ENV_CACHE_TTL_SECS, Some("0")));
        temp_env::with_vars(vars, || {
            assert!(ChatConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_default_is_valid() {
        let config = ChatConfig::default();
        assert_eq!(config.api_base_url.as_str(), "https://ahib-portfolio-backend.onrender.com/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_join() {
        let config = ChatConfig::with_base_url("http://localhost:5000").unwrap();
        let url = config.endpoint("/api/data/projects").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/data/projects");
    }
}
