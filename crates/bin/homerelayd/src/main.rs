//! # homerelayd: homerelay daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`homerelay.toml`, env vars)
//! - Initialise `tracing` from the configured filter
//! - Construct the Antares gateway (adapter)
//! - Construct application services, injecting the gateway via the port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use homerelay_adapter_antares::AntaresGateway;
use homerelay_adapter_http_axum::router;
use homerelay_adapter_http_axum::state::AppState;
use homerelay_app::services::control_service::ControlService;
use homerelay_app::services::monitor_service::MonitorService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Platform
    let gateway = AntaresGateway::new(&config.antares)?;
    tracing::info!(
        control_url = %config.antares.control_url(),
        monitor_url = %config.antares.monitor_url(),
        strict_control_status = config.control.strict_status,
        "antares gateway ready"
    );

    // Services
    let control_service =
        ControlService::new(gateway.clone()).with_strict_status(config.control.strict_status);
    let monitor_service = MonitorService::new(gateway);

    // HTTP
    let state = AppState::new(control_service, monitor_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "homerelayd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("homerelayd stopped");
    Ok(())
}

/// Resolve on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
