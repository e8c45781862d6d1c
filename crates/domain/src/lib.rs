//! # homerelay-domain
//!
//! Pure domain model for the homerelay smart-home bridge.
//!
//! ## Responsibilities
//! - Foundational types: error conventions shared by every layer
//! - Define the **Relay Command** (the two relay states a caller asks for)
//! - Define the oneM2M **Content Instance** envelope the platform expects
//! - Define the **Upstream Reply** (status + raw body) and how it is decoded
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod content_instance;
pub mod relay;
pub mod reply;
