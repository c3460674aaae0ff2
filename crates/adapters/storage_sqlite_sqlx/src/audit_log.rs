//! `SQLite` implementation of [`AuditLog`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pothub_app::ports::AuditLog;
use pothub_domain::audit::{AuditEntry, AuditRecord};
use pothub_domain::error::PotHubError;

use crate::error::StorageError;

struct Wrapper(AuditRecord);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let sensor_id: Option<String> = row.try_get("sensor_id")?;
        let device_id: Option<String> = row.try_get("device_id")?;
        let action: String = row.try_get("action")?;
        let created_at: String = row.try_get("created_at")?;

        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(AuditRecord {
            id,
            sensor_id,
            device_id,
            action,
            created_at,
        }))
    }
}

const INSERT_RETURNING: &str = r"
    INSERT INTO audit_log (sensor_id, device_id, action)
    VALUES (?, ?, ?)
    RETURNING id, sensor_id, device_id, action, created_at
";

/// `SQLite`-backed append-only audit log.
pub struct SqliteAuditLog {
    pool: SqlitePool,
}

impl SqliteAuditLog {
    /// Create a new audit log using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AuditLog for SqliteAuditLog {
    async fn append(&self, entry: AuditEntry) -> Result<AuditRecord, PotHubError> {
        let row: Wrapper = sqlx::query_as(INSERT_RETURNING)
            .bind(entry.sensor_id)
            .bind(entry.device_id)
            .bind(entry.action)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.0)
    }
}
