//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `homerelay.toml` in the working directory. Every field has a
//! default so the file is optional, except the Antares access key which must
//! come from the file or, preferably, `HOMERELAY_ANTARES_ORIGIN`.
//! Environment variables take precedence over file values.

use serde::Deserialize;

use homerelay_adapter_antares::{AntaresConfig, AntaresError};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Antares platform settings.
    pub antares: AntaresConfig,
    /// Control endpoint behaviour.
    pub control: ControlConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Control endpoint configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Answer `{ error, status }` instead of `{ success, res }` when the
    /// platform rejects a relay command.
    pub strict_status: bool,
}

impl Config {
    /// Load configuration from `homerelay.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homerelay.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HOMERELAY_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("HOMERELAY_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        let bind = var("HOMERELAY_BIND");
        if let Some((host, port)) = bind.as_deref().and_then(|val| val.rsplit_once(':')) {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("HOMERELAY_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("HOMERELAY_ANTARES_URL") {
            self.antares.base_url = val;
        }
        if let Some(val) = var("HOMERELAY_ANTARES_ORIGIN") {
            self.antares.origin = val;
        }
        if let Some(val) = var("HOMERELAY_ANTARES_APPLICATION") {
            self.antares.application_path = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.antares.validate()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homerelayd=info,homerelay=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// Antares settings cannot produce working requests.
    #[error("invalid Antares configuration")]
    Antares(#[from] AntaresError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn valid() -> Config {
        let mut config = Config::default();
        config.antares.origin = "key:secret".to_string();
        config
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.antares.base_url, "https://platform.antares.id:8443");
        assert!(!config.control.strict_status);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [antares]
            base_url = 'http://localhost:8443'
            origin = 'key:secret'
            application_path = '/~/cse/id/garage'
            control_container = 'door'
            monitor_container = 'sensor'
            monitor_resource = 'la'
            timeout_secs = 10

            [control]
            strict_status = true
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.antares.origin, "key:secret");
        assert_eq!(config.antares.control_container, "door");
        assert_eq!(config.antares.timeout_secs, Some(10));
        assert!(config.control.strict_status);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = valid();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_missing_origin() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Antares(AntaresError::MissingOrigin))
        ));
    }

    #[test]
    fn should_reject_zero_timeout() {
        let mut config = valid();
        config.antares.timeout_secs = Some(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Antares(AntaresError::ZeroTimeout))
        ));
    }

    #[test]
    fn should_accept_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn should_apply_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("HOMERELAY_BIND", "127.0.0.1:8080"),
            ("HOMERELAY_ANTARES_ORIGIN", "env-key:env-secret"),
            ("HOMERELAY_ANTARES_URL", "http://antares.local"),
            ("RUST_LOG", "trace"),
        ]);
        let mut config = Config::default();

        config.apply_overrides(|key| vars.get(key).map(ToString::to_string));

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.antares.origin, "env-key:env-secret");
        assert_eq!(config.antares.base_url, "http://antares.local");
        assert_eq!(config.logging.filter, "trace");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_prefer_rust_log_over_homerelay_log() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("HOMERELAY_LOG", "warn"), ("RUST_LOG", "debug")]);
        let mut config = Config::default();

        config.apply_overrides(|key| vars.get(key).map(ToString::to_string));

        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_ignore_unparseable_port_override() {
        let vars: HashMap<&str, &str> = HashMap::from([("HOMERELAY_PORT", "http")]);
        let mut config = Config::default();

        config.apply_overrides(|key| vars.get(key).map(ToString::to_string));

        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
