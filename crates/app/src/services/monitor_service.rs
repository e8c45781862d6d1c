//! Monitor service: use-case for reading the relay device's reported state.

use serde_json::Value;

use homerelay_domain::error::HomeRelayError;

use crate::ports::PlatformGateway;

/// Result of reading the monitor container.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorOutcome {
    /// The platform's JSON body, untouched.
    Observed(Value),
    /// The platform replied with a non-success status; the body was not read.
    Failed { status: u16 },
}

/// Application service reading the monitor container.
pub struct MonitorService<G> {
    gateway: G,
}

impl<G: PlatformGateway> MonitorService<G> {
    /// Create a new service backed by the given gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Fetch the monitored content instance.
    ///
    /// # Errors
    ///
    /// Returns [`HomeRelayError::Upstream`] if the platform cannot be
    /// reached, or [`HomeRelayError::Decode`] if a successful reply does not
    /// carry JSON.
    #[tracing::instrument(skip(self))]
    pub async fn observe(&self) -> Result<MonitorOutcome, HomeRelayError> {
        let reply = self.gateway.retrieve_monitor_instance().await?;

        if !reply.is_success() {
            tracing::warn!(status = reply.status, "platform refused monitor read");
            return Ok(MonitorOutcome::Failed {
                status: reply.status,
            });
        }

        Ok(MonitorOutcome::Observed(reply.json()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homerelay_domain::content_instance::ContentInstanceEnvelope;
    use homerelay_domain::reply::UpstreamReply;
    use serde_json::json;

    struct StubGateway(u16, &'static str);

    impl PlatformGateway for StubGateway {
        async fn create_content_instance(
            &self,
            _envelope: ContentInstanceEnvelope,
        ) -> Result<UpstreamReply, HomeRelayError> {
            unreachable!("monitor service never writes")
        }

        async fn retrieve_monitor_instance(&self) -> Result<UpstreamReply, HomeRelayError> {
            Ok(UpstreamReply::new(self.0, self.1))
        }
    }

    struct UnreachableGateway;

    impl PlatformGateway for UnreachableGateway {
        async fn create_content_instance(
            &self,
            _envelope: ContentInstanceEnvelope,
        ) -> Result<UpstreamReply, HomeRelayError> {
            unreachable!()
        }

        async fn retrieve_monitor_instance(&self) -> Result<UpstreamReply, HomeRelayError> {
            Err(HomeRelayError::Upstream(Box::new(std::io::Error::other(
                "dns failure",
            ))))
        }
    }

    #[tokio::test]
    async fn should_return_platform_body_unmodified() {
        let service = MonitorService::new(StubGateway(200, r#"{"m2m:cin":{"con":"25"}}"#));

        let outcome = service.observe().await.unwrap();

        assert_eq!(
            outcome,
            MonitorOutcome::Observed(json!({ "m2m:cin": { "con": "25" } }))
        );
    }

    #[tokio::test]
    async fn should_keep_member_order_of_platform_body() {
        let body = r#"{"m2m:cin":{"rn":"cin_1","ty":4,"ri":"/antares-cse/cin-1","con":"25"}}"#;
        let service = MonitorService::new(StubGateway(200, body));

        let MonitorOutcome::Observed(value) = service.observe().await.unwrap() else {
            panic!("expected an observed value");
        };

        assert_eq!(serde_json::to_string(&value).unwrap(), body);
    }

    #[tokio::test]
    async fn should_report_status_when_platform_fails() {
        let service = MonitorService::new(StubGateway(404, "<html>not found</html>"));

        let outcome = service.observe().await.unwrap();

        assert_eq!(outcome, MonitorOutcome::Failed { status: 404 });
    }

    #[tokio::test]
    async fn should_fail_to_decode_non_json_success() {
        let service = MonitorService::new(StubGateway(200, "OK"));

        let result = service.observe().await;

        assert!(matches!(result, Err(HomeRelayError::Decode(_))));
    }

    #[tokio::test]
    async fn should_propagate_transport_failure() {
        let service = MonitorService::new(UnreachableGateway);

        let result = service.observe().await;

        assert!(matches!(result, Err(HomeRelayError::Upstream(_))));
    }
}
