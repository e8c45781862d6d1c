//! # homerelay-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** consumed by the smart-home front-end
//!   (`/api/antares/control`, `/api/antares/ol`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into JSON responses, keeping the response
//!   shapes the front-end relies on (`{ success, res }`, `{ error, status }`)
//! - Expose `/health` for liveness probes
//!
//! ## Dependency rule
//! Depends on `homerelay-app` (for port traits and services) and
//! `homerelay-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
