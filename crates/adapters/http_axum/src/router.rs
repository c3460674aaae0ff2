//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use pothub_app::ports::{AuditLog, DeviceRepository, PotRepository, SensorRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and mounts the original sensor paths at the
/// root. Includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S, D, P, A>(state: AppState<S, D, P, A>) -> Router
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::api::legacy_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
