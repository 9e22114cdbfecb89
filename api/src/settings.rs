use config::{Config as ConfigBuilder, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Process settings, read from environment variables over built-in defaults.
///
/// Variables are matched case-insensitively by field name: `HOST`, `PORT`,
/// `DATABASE_URL`, `SEED_URL`, `SEED_TIMEOUT_SECS`, `LOG_LEVEL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// DuckDB database path; `:memory:` keeps everything in process.
    pub database_url: String,
    pub seed_url: String,
    pub seed_timeout_secs: u64,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: sales_stats::config::IN_MEMORY.to_string(),
            seed_url: sales_stats::config::SEED_URL.to_string(),
            seed_timeout_secs: sales_stats::config::DEFAULT_TIMEOUT.as_secs(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(Environment::default().try_parsing(true))
    }

    /// Load from an explicit variable map instead of the process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::build(Environment::default().try_parsing(true).source(Some(vars)))
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        ConfigBuilder::builder()
            .add_source(ConfigBuilder::try_from(&Settings::default())?)
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn seed_timeout(&self) -> Duration {
        Duration::from_secs(self.seed_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::from_vars(HashMap::new()).unwrap();
        assert_eq!(settings.addr(), "0.0.0.0:3000");
        assert_eq!(settings.database_url, ":memory:");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.seed_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars = HashMap::from([
            ("PORT".to_string(), "8080".to_string()),
            ("DATABASE_URL".to_string(), "/tmp/sales.duckdb".to_string()),
            ("LOG_LEVEL".to_string(), "debug".to_string()),
        ]);

        let settings = Settings::from_vars(vars).unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.database_url, "/tmp/sales.duckdb");
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.host, "0.0.0.0");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let vars = HashMap::from([("PORT".to_string(), "not-a-port".to_string())]);
        assert!(Settings::from_vars(vars).is_err());
    }
}
