use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

const DEFAULT_ORIGIN: &str = "http://127.0.0.1:5000";
const DEFAULT_CASE: &str = "basic";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MINIAPP_ORIGIN must be an http:// or https:// URL, got '{0}'")]
    InvalidOrigin(String),
    #[error("MINIAPP_CASE must not be empty")]
    EmptyCase,
    #[error("MINIAPP_TIMEOUT_SECS must be a positive integer, got '{0}'")]
    InvalidTimeout(String),
}

/// Runtime settings for the mini-app client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Page origin the `/api/*` paths are resolved against
    pub origin: String,
    /// Case opened by the open button
    pub case: String,
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Load settings from the process environment (call `dotenv` first)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_origin = lookup("MINIAPP_ORIGIN").unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let origin = parse_origin(&raw_origin)?;

        let case = lookup("MINIAPP_CASE").unwrap_or_else(|| DEFAULT_CASE.to_string());
        let case = case.trim().to_string();
        if case.is_empty() {
            return Err(ConfigError::EmptyCase);
        }

        let request_timeout = match lookup("MINIAPP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => None,
        };

        Ok(Config {
            origin,
            case,
            request_timeout,
        })
    }
}

/// Reduce a URL to `scheme://host[:port]`; `/api/*` paths are resolved against it
fn parse_origin(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidOrigin(raw.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidOrigin(raw.to_string()));
    }

    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(ConfigError::InvalidOrigin(raw.to_string()));
    }
    Ok(origin.ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_local_backend() {
        let config = load(&[]).unwrap();
        assert_eq!(config.origin, "http://127.0.0.1:5000");
        assert_eq!(config.case, "basic");
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("MINIAPP_ORIGIN", "https://rake-case.vercel.app"),
            ("MINIAPP_CASE", "premium"),
            ("MINIAPP_TIMEOUT_SECS", "15"),
        ])
        .unwrap();
        assert_eq!(config.origin, "https://rake-case.vercel.app");
        assert_eq!(config.case, "premium");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn origin_drops_path_and_query() {
        let config = load(&[("MINIAPP_ORIGIN", "https://rake-case.vercel.app/app/index.html?x=1")]).unwrap();
        assert_eq!(config.origin, "https://rake-case.vercel.app");

        let config = load(&[("MINIAPP_ORIGIN", "http://localhost:8080/")]).unwrap();
        assert_eq!(config.origin, "http://localhost:8080");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[("MINIAPP_ORIGIN", "ftp://rake-case.vercel.app")]),
            Err(ConfigError::InvalidOrigin(_))
        ));
        assert!(matches!(
            load(&[("MINIAPP_ORIGIN", "rake-case.vercel.app")]),
            Err(ConfigError::InvalidOrigin(_))
        ));
        assert_eq!(load(&[("MINIAPP_CASE", "  ")]), Err(ConfigError::EmptyCase));
        assert_eq!(
            load(&[("MINIAPP_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );
    }
}
