//! # pothub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository and audit port traits defined in `pothub-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Turn primary-key collisions into [`ConflictError`](pothub_domain::error::ConflictError)s
//!
//! ## Dependency rule
//! Depends on `pothub-app` (for port traits) and `pothub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod audit_log;
mod device_repo;
mod error;
mod pool;
mod pot_repo;
mod sensor_repo;

pub use audit_log::SqliteAuditLog;
pub use device_repo::SqliteDeviceRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use pot_repo::SqlitePotRepository;
pub use sensor_repo::SqliteSensorRepository;
