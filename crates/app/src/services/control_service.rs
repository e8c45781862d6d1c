//! Control service: use-case for switching the relays.

use serde_json::Value;

use homerelay_domain::error::HomeRelayError;
use homerelay_domain::relay::RelayCommand;

use crate::ports::PlatformGateway;

/// Result of forwarding a relay command.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlOutcome {
    /// The platform replied; `res` is its body.
    Accepted { res: Value },
    /// The platform replied with a non-success status (strict mode only).
    Rejected { status: u16 },
}

/// Application service forwarding relay commands to the control container.
pub struct ControlService<G> {
    gateway: G,
    strict_status: bool,
}

impl<G: PlatformGateway> ControlService<G> {
    /// Create a new service backed by the given gateway.
    ///
    /// By default every reply the platform sends back is reported as
    /// accepted, whatever its status.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            strict_status: false,
        }
    }

    /// Report non-success platform statuses as [`ControlOutcome::Rejected`].
    #[must_use]
    pub fn with_strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    /// Wrap `command` in a content instance and send it to the platform.
    ///
    /// # Errors
    ///
    /// Returns [`HomeRelayError::Encode`] if the command cannot be
    /// serialized, or [`HomeRelayError::Upstream`] if the platform cannot be
    /// reached.
    #[tracing::instrument(skip(self, command))]
    pub async fn send_command(
        &self,
        command: RelayCommand,
    ) -> Result<ControlOutcome, HomeRelayError> {
        let envelope = command.to_envelope()?;
        tracing::debug!(con = envelope.content(), "forwarding relay command");

        let reply = self.gateway.create_content_instance(envelope).await?;

        if !reply.is_success() {
            if self.strict_status {
                tracing::warn!(status = reply.status, "platform rejected relay command");
                return Ok(ControlOutcome::Rejected {
                    status: reply.status,
                });
            }
            tracing::debug!(status = reply.status, "ignoring platform status");
        }

        Ok(ControlOutcome::Accepted {
            res: reply.json_lenient(),
        })
    }
}
