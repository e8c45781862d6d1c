//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod antares;

use axum::Router;
use axum::routing::{get, post};

use homerelay_app::ports::PlatformGateway;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<G>() -> Router<AppState<G>>
where
    G: PlatformGateway + 'static,
{
    Router::new()
        .route("/antares/control", post(antares::control::<G>))
        .route("/antares/ol", get(antares::observe::<G>))
}
