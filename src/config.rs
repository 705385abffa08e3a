use std::env;
use std::time::Duration;
use url::Url;

use crate::errors::AppError;

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "http://localhost:8112/";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8111";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, read once at startup and handed to whoever needs them.
#[derive(Debug, Clone)]
pub struct Config {
    pub upstream_base_url: Url,
    pub bind_address: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(upstream_base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            upstream_base_url: parse_base_url(upstream_base_url)?,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("UPSTREAM_BASE_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());
        let mut config = Self::new(&base_url)?;

        if let Some(bind_address) = lookup("BIND_ADDRESS") {
            config.bind_address = bind_address;
        }

        if let Some(raw) = lookup("UPSTREAM_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                AppError::Configuration(format!("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds, got '{}'", raw))
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

// Relative joins drop the last path segment unless the base ends with '/'.
fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(AppError::Configuration(format!("'{}' cannot be used as a base URL", raw)));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.upstream_base_url.as_str(), DEFAULT_UPSTREAM_BASE_URL);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = Config::new("http://mock:9000/prefix").unwrap();
        assert_eq!(config.upstream_base_url.as_str(), "http://mock:9000/prefix/");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("UPSTREAM_BASE_URL", "http://upstream:8112/"),
            ("BIND_ADDRESS", "0.0.0.0:9000"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.upstream_base_url.host_str(), Some("upstream"));
        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(Config::new("not a url"), Err(AppError::Configuration(_))));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[("UPSTREAM_TIMEOUT_SECS", "soon")])),
            Err(AppError::Configuration(_))
        ));
    }
}
