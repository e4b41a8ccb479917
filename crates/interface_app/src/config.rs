//! Application configuration

use serde::Deserialize;

/// Environment variable prefix for every setting
pub const ENV_PREFIX: &str = "CLAIMS";

/// Console configuration
///
/// Missing settings fall back to [`AppConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level or filter directive
    pub log_level: String,
    /// Identity recorded on submitted claims until authentication exists
    pub lecturer_name: String,
    /// Whether to load the demonstration claims on start
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            lecturer_name: "Current User".to_string(),
            seed_sample_data: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `CLAIMS_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Loads configuration from any `config` source
    pub fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> config::Environment {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(vars))
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_source(env(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.lecturer_name, "Current User");
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = AppConfig::from_source(env(&[
            ("CLAIMS_LOG_LEVEL", "debug"),
            ("CLAIMS_LECTURER_NAME", "Dr. Smith"),
            ("CLAIMS_SEED_SAMPLE_DATA", "false"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.lecturer_name, "Dr. Smith");
        assert!(!config.seed_sample_data);
    }
}
