//! Platform port: access to the oneM2M containers backing the relay device.

use std::future::Future;

use homerelay_domain::content_instance::ContentInstanceEnvelope;
use homerelay_domain::error::HomeRelayError;
use homerelay_domain::reply::UpstreamReply;

/// Gateway to the IoT platform.
///
/// Implementations return the platform's reply as-is, whatever its status:
/// interpreting non-success codes is left to the services. Only failures to
/// obtain a reply at all are reported as errors.
pub trait PlatformGateway: Send + Sync {
    /// Create a content instance in the control container.
    fn create_content_instance(
        &self,
        envelope: ContentInstanceEnvelope,
    ) -> impl Future<Output = Result<UpstreamReply, HomeRelayError>> + Send;

    /// Retrieve the observed content instance of the monitor container.
    fn retrieve_monitor_instance(
        &self,
    ) -> impl Future<Output = Result<UpstreamReply, HomeRelayError>> + Send;
}
