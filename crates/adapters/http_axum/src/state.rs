//! Shared application state for axum handlers.

use std::sync::Arc;

use pothub_app::ports::{AuditLog, DeviceRepository, PotRepository, SensorRepository};
use pothub_app::services::resource_service::ResourceService;

/// Application state shared across all axum handlers.
///
/// Generic over the three repositories and the audit log to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<S, D, P, A> {
    /// Pot, sensor, and device use-cases.
    pub resource_service: Arc<ResourceService<S, D, P, A>>,
}

impl<S, D, P, A> Clone for AppState<S, D, P, A> {
    fn clone(&self) -> Self {
        Self {
            resource_service: Arc::clone(&self.resource_service),
        }
    }
}

impl<S, D, P, A> AppState<S, D, P, A>
where
    S: SensorRepository + Send + Sync + 'static,
    D: DeviceRepository + Send + Sync + 'static,
    P: PotRepository + Send + Sync + 'static,
    A: AuditLog + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(resource_service: ResourceService<S, D, P, A>) -> Self {
        Self {
            resource_service: Arc::new(resource_service),
        }
    }
}
