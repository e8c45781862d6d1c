//! Shared application state for axum handlers.

use std::sync::Arc;

use homerelay_app::ports::PlatformGateway;
use homerelay_app::services::control_service::ControlService;
use homerelay_app::services::monitor_service::MonitorService;

/// Application state shared across all axum handlers.
///
/// Generic over the platform gateway to avoid dynamic dispatch.
/// `Clone` is implemented manually so the gateway itself does not need to be
/// `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<G> {
    /// Relay command forwarding.
    pub control_service: Arc<ControlService<G>>,
    /// Monitor container reads.
    pub monitor_service: Arc<MonitorService<G>>,
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            control_service: Arc::clone(&self.control_service),
            monitor_service: Arc::clone(&self.monitor_service),
        }
    }
}

impl<G> AppState<G>
where
    G: PlatformGateway + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(control_service: ControlService<G>, monitor_service: MonitorService<G>) -> Self {
        Self {
            control_service: Arc::new(control_service),
            monitor_service: Arc::new(monitor_service),
        }
    }
}
