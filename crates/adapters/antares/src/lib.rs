//! # homerelay-adapter-antares
//!
//! Outbound adapter for the [Antares](https://antares.id) IoT platform, a
//! oneM2M CSE reachable over HTTPS.
//!
//! ## Responsibilities
//! - Build the control and monitor resource URLs from [`AntaresConfig`]
//! - Create content instances (`POST …/{control_container}`, `ty=4`)
//! - Retrieve the monitor container's virtual resource (`GET …/{monitor_container}/ol`)
//! - Authenticate every request with the `X-M2M-Origin` header
//!
//! Replies are handed back with their status untouched; only transport
//! failures become errors.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `homerelay-app` and `homerelay-domain`.

pub mod config;
pub mod error;
mod gateway;

pub use config::AntaresConfig;
pub use error::AntaresError;
pub use gateway::{AntaresGateway, ORIGIN_HEADER};
