//! Directions service configuration.

use std::fmt;

use serde::Deserialize;

use crate::error::DirectionsError;

/// Prefix for environment variables, e.g. `DIRECTIONS_API_KEY`.
pub const ENV_PREFIX: &str = "DIRECTIONS_";

#[derive(Clone, Deserialize)]
pub struct DirectionsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Travel mode: driving, walking, bicycling or transit.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Ask the service for alternative routes.
    #[serde(default)]
    pub alternatives: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/directions/json".to_string()
}

fn default_mode() -> String {
    "driving".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            mode: default_mode(),
            alternatives: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DirectionsConfig {
    /// Loads `.env` if present, then reads `DIRECTIONS_*` variables.
    pub fn from_env() -> Result<Self, DirectionsError> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Builds a config from `(name, value)` pairs using the `DIRECTIONS_` prefix.
    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, DirectionsError> {
        let config: Self = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DirectionsError> {
        if self.api_key.trim().is_empty() {
            return Err(DirectionsError::Config(format!(
                "{}API_KEY must be set",
                ENV_PREFIX
            )));
        }
        if self.timeout_secs == 0 {
            return Err(DirectionsError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for DirectionsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("mode", &self.mode)
            .field("alternatives", &self.alternatives)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = DirectionsConfig::from_vars(vars(&[("DIRECTIONS_API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.mode, "driving");
        assert!(!config.alternatives);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = DirectionsConfig::from_vars(vars(&[
            ("DIRECTIONS_API_KEY", "secret"),
            ("DIRECTIONS_BASE_URL", "http://127.0.0.1:8080/directions"),
            ("DIRECTIONS_MODE", "walking"),
            ("DIRECTIONS_ALTERNATIVES", "true"),
            ("DIRECTIONS_TIMEOUT_SECS", "3"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080/directions");
        assert_eq!(config.mode, "walking");
        assert!(config.alternatives);
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_missing_api_key() {
        let result = DirectionsConfig::from_vars(vars(&[]));
        assert!(matches!(result, Err(DirectionsError::Config(_))));
    }

    #[test]
    fn test_invalid_timeout() {
        let result = DirectionsConfig::from_vars(vars(&[
            ("DIRECTIONS_API_KEY", "secret"),
            ("DIRECTIONS_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(result, Err(DirectionsError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = DirectionsConfig {
            api_key: "secret".to_string(),
            ..DirectionsConfig::default()
        };
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("secret"));
        assert!(debug_str.contains("<redacted>"));
    }
}
