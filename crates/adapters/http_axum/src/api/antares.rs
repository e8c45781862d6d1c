//! JSON handlers relaying to the Antares platform.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use homerelay_app::ports::PlatformGateway;
use homerelay_app::services::control_service::ControlOutcome;
use homerelay_app::services::monitor_service::MonitorOutcome;
use homerelay_domain::relay::RelayCommand;

use crate::error::ApiError;
use crate::state::AppState;

/// Body returned once a relay command reached the platform.
#[derive(Serialize)]
struct Forwarded {
    success: bool,
    res: Value,
}

/// Body returned when the platform answered with a non-success status.
#[derive(Serialize)]
struct UpstreamStatus {
    error: bool,
    status: u16,
}

/// Possible responses from the control endpoint.
pub enum ControlResponse {
    Forwarded(Value),
    UpstreamFailed(u16),
}

impl IntoResponse for ControlResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Forwarded(res) => Json(Forwarded { success: true, res }).into_response(),
            Self::UpstreamFailed(status) => Json(UpstreamStatus {
                error: true,
                status,
            })
            .into_response(),
        }
    }
}

/// Possible responses from the monitor endpoint.
pub enum MonitorResponse {
    Ok(Json<Value>),
    UpstreamFailed(u16),
}

impl IntoResponse for MonitorResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::UpstreamFailed(status) => Json(UpstreamStatus {
                error: true,
                status,
            })
            .into_response(),
        }
    }
}

/// `POST /api/antares/control`
///
/// The body is read as raw bytes whatever its `Content-Type`, and only its
/// `relay1` and `relay2` members are kept.
pub async fn control<G>(
    State(state): State<AppState<G>>,
    body: Bytes,
) -> Result<ControlResponse, ApiError>
where
    G: PlatformGateway + 'static,
{
    let command = RelayCommand::from_body(&body);
    let outcome = state.control_service.send_command(command).await?;
    Ok(match outcome {
        ControlOutcome::Accepted { res } => ControlResponse::Forwarded(res),
        ControlOutcome::Rejected { status } => ControlResponse::UpstreamFailed(status),
    })
}

/// `GET /api/antares/ol`
pub async fn observe<G>(State(state): State<AppState<G>>) -> Result<MonitorResponse, ApiError>
where
    G: PlatformGateway + 'static,
{
    let outcome = state.monitor_service.observe().await?;
    Ok(match outcome {
        MonitorOutcome::Observed(value) => MonitorResponse::Ok(Json(value)),
        MonitorOutcome::Failed { status } => MonitorResponse::UpstreamFailed(status),
    })
}
