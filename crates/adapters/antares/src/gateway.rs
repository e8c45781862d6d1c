//! HTTP gateway to the Antares oneM2M CSE.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Url};

use homerelay_app::ports::PlatformGateway;
use homerelay_domain::content_instance::{CREATE_CONTENT_TYPE, ContentInstanceEnvelope};
use homerelay_domain::error::HomeRelayError;
use homerelay_domain::reply::UpstreamReply;

use crate::config::AntaresConfig;
use crate::error::AntaresError;

/// oneM2M header identifying the calling application.
pub const ORIGIN_HEADER: &str = "X-M2M-Origin";

const ACCEPT_JSON: &str = "application/json";

/// [`PlatformGateway`] backed by a pooled `reqwest` client.
///
/// Cloning is cheap: clones share the connection pool.
#[derive(Clone)]
pub struct AntaresGateway {
    client: Client,
    origin: HeaderValue,
    control_url: Url,
    monitor_url: Url,
}

impl AntaresGateway {
    /// Build a gateway from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an [`AntaresError`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: &AntaresConfig) -> Result<Self, AntaresError> {
        config.validate()?;

        let mut origin =
            HeaderValue::from_str(config.origin.trim()).map_err(|_| AntaresError::InvalidOrigin)?;
        origin.set_sensitive(true);

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(AntaresError::ClientBuild)?;

        Ok(Self {
            client,
            origin,
            control_url: parse_url(config.control_url())?,
            monitor_url: parse_url(config.monitor_url())?,
        })
    }

    async fn send(
        &self,
        method: Method,
        url: &Url,
        payload: Option<Vec<u8>>,
    ) -> Result<UpstreamReply, AntaresError> {
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(ORIGIN_HEADER, self.origin.clone())
            .header(ACCEPT, ACCEPT_JSON);
        if let Some(payload) = payload {
            request = request.header(CONTENT_TYPE, CREATE_CONTENT_TYPE).body(payload);
        }

        let response = request.send().await.map_err(AntaresError::Transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(AntaresError::Transport)?;

        if status.is_success() {
            tracing::debug!(%method, %url, status = status.as_u16(), "antares replied");
        } else {
            tracing::warn!(%method, %url, status = status.as_u16(), "antares replied with an error status");
        }

        Ok(UpstreamReply::new(status.as_u16(), body.to_vec()))
    }
}

impl PlatformGateway for AntaresGateway {
    async fn create_content_instance(
        &self,
        envelope: ContentInstanceEnvelope,
    ) -> Result<UpstreamReply, HomeRelayError> {
        let payload = serde_json::to_vec(&envelope).map_err(AntaresError::Encode)?;
        Ok(self
            .send(Method::POST, &self.control_url, Some(payload))
            .await?)
    }

    async fn retrieve_monitor_instance(&self) -> Result<UpstreamReply, HomeRelayError> {
        Ok(self.send(Method::GET, &self.monitor_url, None).await?)
    }
}

fn parse_url(url: String) -> Result<Url, AntaresError> {
    Url::parse(&url).map_err(|_| AntaresError::InvalidUrl(url))
}
