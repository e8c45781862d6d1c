//! Antares adapter error types.

use homerelay_domain::error::HomeRelayError;

/// Errors specific to the Antares adapter.
#[derive(Debug, thiserror::Error)]
pub enum AntaresError {
    /// No access key configured for `X-M2M-Origin`.
    #[error("Antares origin (access key) is not configured")]
    MissingOrigin,

    /// The access key cannot be sent as an HTTP header value.
    #[error("Antares origin contains characters not allowed in a header")]
    InvalidOrigin,

    /// A resource URL built from the configuration does not parse.
    #[error("invalid Antares URL {0}")]
    InvalidUrl(String),

    /// A zero timeout would fail every request before it is sent.
    #[error("Antares timeout_secs must be greater than zero")]
    ZeroTimeout,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// The request could not be sent or its reply could not be read.
    #[error("request to Antares failed")]
    Transport(#[source] reqwest::Error),

    /// A content instance could not be serialized.
    #[error("failed to encode content instance")]
    Encode(#[source] serde_json::Error),
}

impl AntaresError {
    /// Convert into a [`HomeRelayError`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> HomeRelayError {
        match self {
            Self::Encode(err) => HomeRelayError::Encode(err),
            other => HomeRelayError::Upstream(Box::new(other)),
        }
    }
}

impl From<AntaresError> for HomeRelayError {
    fn from(err: AntaresError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_missing_origin_error() {
        let err = AntaresError::MissingOrigin;
        assert_eq!(err.to_string(), "Antares origin (access key) is not configured");
    }

    #[test]
    fn should_display_invalid_url_error() {
        let err = AntaresError::InvalidUrl("nope/home-control".to_string());
        assert_eq!(err.to_string(), "invalid Antares URL nope/home-control");
    }

    #[test]
    fn should_convert_config_errors_to_upstream_error() {
        let err: HomeRelayError = AntaresError::InvalidOrigin.into();
        assert!(matches!(err, HomeRelayError::Upstream(_)));
    }

    #[test]
    fn should_convert_encode_error_back_to_domain() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err: HomeRelayError = AntaresError::Encode(json_err).into();
        assert!(matches!(err, HomeRelayError::Encode(_)));
    }
}
