//! # pothub-domain
//!
//! Pure domain model for the pothub plant-pot inventory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error taxonomy, timestamps
//! - Define **Pots** (containers with a store-assigned identity)
//! - Define **Sensors** (passive measurement points, optionally mounted in a pot)
//! - Define **Devices** (actuators with a mutable status, optionally mounted in a pot)
//! - Define **Audit records** (one immutable line per mutating action)
//! - Enforce the invariants that can be checked without IO
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod audit;
pub mod device;
pub mod pot;
pub mod sensor;
