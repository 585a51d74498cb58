//! Process configuration, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | `8080` (also when set but empty) |
//! | `POSTS_UPSTREAM_URL` | `https://jsonplaceholder.typicode.com` |
//! | `POSTS_UPSTREAM_TIMEOUT_SECS` | `5` |

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

const ENV_PORT: &str = "PORT";
const ENV_UPSTREAM_URL: &str = "POSTS_UPSTREAM_URL";
const ENV_UPSTREAM_TIMEOUT: &str = "POSTS_UPSTREAM_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got `{value}`")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got `{value}`")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_url: DEFAULT_UPSTREAM_URL.to_owned(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }
}

impl Config {
    /// Reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to something unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] over an arbitrary lookup. Empty values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ENV_PORT) {
            let port = value.trim().parse::<u16>().ok();
            config.port = port.ok_or(ConfigError::InvalidPort { var: ENV_PORT, value })?;
        }

        if let Some(url) = get(ENV_UPSTREAM_URL) {
            config.upstream_url = url.trim().trim_end_matches('/').to_owned();
        }

        if let Some(value) = get(ENV_UPSTREAM_TIMEOUT) {
            let secs = value.trim().parse::<u64>().ok().filter(|s| *s > 0);
            config.upstream_timeout = secs.map(Duration::from_secs).ok_or(
                ConfigError::InvalidTimeout { var: ENV_UPSTREAM_TIMEOUT, value },
            )?;
        }

        Ok(config)
    }

    /// Listen on all interfaces.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), Ok(Config::default()));
        assert_eq!(Config::default().listen_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        assert_eq!(config(&[("PORT", "")]).map(|c| c.port), Ok(8080));
    }

    #[test]
    fn reads_port_and_upstream() {
        let c = config(&[
            ("PORT", "3000"),
            ("POSTS_UPSTREAM_URL", "http://127.0.0.1:9000/"),
            ("POSTS_UPSTREAM_TIMEOUT_SECS", "2"),
        ])
        .unwrap();

        assert_eq!(c.port, 3000);
        assert_eq!(c.upstream_url, "http://127.0.0.1:9000");
        assert_eq!(c.upstream_timeout, Duration::from_secs(2));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            config(&[("PORT", "eighty")]),
            Err(ConfigError::InvalidPort { .. })
        ));
        assert!(matches!(
            config(&[("POSTS_UPSTREAM_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }
}
