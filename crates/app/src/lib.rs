//! # homerelay-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PlatformGateway`: create and retrieve oneM2M content instances
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ControlService`: forward a relay command to the control container
//!   - `MonitorService`: read the monitor container
//! - Orchestrate domain objects without knowing *how* the platform is reached
//!
//! ## Dependency rule
//! Depends on `homerelay-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
