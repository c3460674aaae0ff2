//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod pots;
#[allow(clippy::missing_errors_doc)]
pub mod sensors;

use axum::Router;
use axum::routing::{delete, get, post, put};
use serde::Serialize;

use pothub_app::ports::{AuditLog, DeviceRepository, PotRepository, SensorRepository};

use crate::state::AppState;

/// Body of a successful delete or update: `{"status": "..."}`.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

/// Build the `/api` sub-router.
pub fn routes<S, D, P, A>() -> Router<AppState<S, D, P, A>>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    Router::new()
        // Sensors
        .route(
            "/sensors",
            get(sensors::list::<S, D, P, A>).post(sensors::create::<S, D, P, A>),
        )
        .route("/sensors/{id}", delete(sensors::delete::<S, D, P, A>))
        // Devices
        .route(
            "/devices",
            get(devices::list::<S, D, P, A>).post(devices::create::<S, D, P, A>),
        )
        .route("/devices/{id}", delete(devices::delete::<S, D, P, A>))
        .route(
            "/devices/{id}/status",
            put(devices::update_status::<S, D, P, A>),
        )
        // Pots
        .route(
            "/pots",
            get(pots::list::<S, D, P, A>).post(pots::create::<S, D, P, A>),
        )
        .route("/pots/{id}", delete(pots::delete::<S, D, P, A>))
}

/// Build the root-level sensor routes kept for clients of the first API.
pub fn legacy_routes<S, D, P, A>() -> Router<AppState<S, D, P, A>>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    Router::new()
        .route("/sensors", get(sensors::list::<S, D, P, A>))
        .route("/sensors/add", post(sensors::add::<S, D, P, A>))
        .route(
            "/sensors/delete/{id}",
            delete(sensors::delete::<S, D, P, A>),
        )
}
