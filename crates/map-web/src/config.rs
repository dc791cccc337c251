//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Default country-boundary GeoJSON resource.
pub const DEFAULT_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/python-visualization/folium/master/examples/data/world-countries.json";

/// Map web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Country-boundary GeoJSON URL.
    pub boundaries_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `MAP_ADDR` | Server bind address | `127.0.0.1:8888` |
    /// | `BOUNDARIES_URL` | Country-boundary GeoJSON URL | folium world-countries |
    ///
    /// The gov.uk index URL is read separately by
    /// [`govuk_client::GovUkConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("MAP_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8888".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let boundaries_url =
            env::var("BOUNDARIES_URL").unwrap_or_else(|_| DEFAULT_BOUNDARIES_URL.to_string());

        Ok(Self {
            addr,
            boundaries_url,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid MAP_ADDR format")]
    InvalidAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_vars() {
            std::env::remove_var("MAP_ADDR");
            std::env::remove_var("BOUNDARIES_URL");
        }

        // Scenario 1: defaults
        clear_vars();
        let config = Config::from_env().unwrap();
        assert_eq!(config.addr, "127.0.0.1:8888".parse().unwrap());
        assert_eq!(config.boundaries_url, DEFAULT_BOUNDARIES_URL);

        // Scenario 2: overrides
        std::env::set_var("MAP_ADDR", "0.0.0.0:888");
        std::env::set_var("BOUNDARIES_URL", "https://example.org/countries.json");
        let config = Config::from_env().unwrap();
        assert_eq!(config.addr, "0.0.0.0:888".parse().unwrap());
        assert_eq!(config.boundaries_url, "https://example.org/countries.json");

        // Scenario 3: invalid address
        std::env::set_var("MAP_ADDR", "not-an-address");
        assert!(matches!(Config::from_env(), Err(ConfigError::InvalidAddr)));

        // Cleanup
        clear_vars();
    }
}
