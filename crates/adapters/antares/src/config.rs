//! Antares platform configuration.

use std::fmt;

use serde::Deserialize;

use crate::error::AntaresError;

/// Configuration for the Antares platform adapter.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AntaresConfig {
    /// Scheme, host and port of the platform (e.g. `https://platform.antares.id:8443`).
    pub base_url: String,
    /// Access key sent as `X-M2M-Origin`.
    pub origin: String,
    /// Path of the oneM2M application entity, starting with `/~/`.
    pub application_path: String,
    /// Container receiving relay commands.
    pub control_container: String,
    /// Container the device reports its state into.
    pub monitor_container: String,
    /// Virtual child resource read from the monitor container (`ol` or `la`).
    pub monitor_resource: String,
    /// Per-request timeout in seconds. `None` keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for AntaresConfig {
    fn default() -> Self {
        Self {
            base_url: "https://platform.antares.id:8443".to_string(),
            origin: String::new(),
            application_path: "/~/antares-cse/antares-id/smart-home-sajidan".to_string(),
            control_container: "home-control".to_string(),
            monitor_container: "home-monitor".to_string(),
            monitor_resource: "ol".to_string(),
            timeout_secs: None,
        }
    }
}

impl AntaresConfig {
    /// URL of the control container.
    #[must_use]
    pub fn control_url(&self) -> String {
        format!("{}/{}", self.application_url(), self.control_container)
    }

    /// URL of the monitor container's virtual resource.
    #[must_use]
    pub fn monitor_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.application_url(),
            self.monitor_container,
            self.monitor_resource
        )
    }

    fn application_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.application_path.trim_end_matches('/')
        )
    }

    /// Check that the configuration can produce working requests.
    ///
    /// # Errors
    ///
    /// Returns [`AntaresError::MissingOrigin`] when no access key is set,
    /// [`AntaresError::ZeroTimeout`] when `timeout_secs` is `0`, or
    /// [`AntaresError::InvalidUrl`] when a resource URL does not parse.
    pub fn validate(&self) -> Result<(), AntaresError> {
        if self.origin.trim().is_empty() {
            return Err(AntaresError::MissingOrigin);
        }
        if self.timeout_secs == Some(0) {
            return Err(AntaresError::ZeroTimeout);
        }
        for url in [self.control_url(), self.monitor_url()] {
            if reqwest::Url::parse(&url).is_err() {
                return Err(AntaresError::InvalidUrl(url));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for AntaresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AntaresConfig")
            .field("base_url", &self.base_url)
            .field("origin", &"<redacted>")
            .field("application_path", &self.application_path)
            .field("control_container", &self.control_container)
            .field("monitor_container", &self.monitor_container)
            .field("monitor_resource", &self.monitor_resource)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
