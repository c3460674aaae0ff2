//! # pothub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SensorRepository`: create, list, list by pot, delete
//!   - `DeviceRepository`: same, plus status updates
//!   - `PotRepository`: create (store-assigned id), list, delete
//!   - `AuditLog`: append-only action log
//! - Define the **driving/inbound** use-case struct `ResourceService`, which
//!   pairs every successful mutation with a best-effort audit append and
//!   rebuilds the pot → sensor/device hierarchy on read
//!
//! ## Dependency rule
//! Depends on `pothub-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod audit;
pub mod ports;
pub mod services;
