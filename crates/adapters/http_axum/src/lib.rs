//! # pothub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST-ish JSON API** for pots, sensors, and devices
//!   (`/api/pots`, `/api/sensors`, `/api/devices`, …)
//! - Decode request bodies strictly into typed requests, turning any
//!   decoding failure into a validation error
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `pothub-app` (for port traits and services) and `pothub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
