//! `SQLite` implementation of [`DeviceRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pothub_app::ports::DeviceRepository;
use pothub_domain::device::Device;
use pothub_domain::error::PotHubError;
use pothub_domain::id::{DeviceId, PotId};

use crate::error::{StorageError, insert_error};

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let kind: String = row.try_get("type")?;
        let status: String = row.try_get("status")?;
        let pot_id: Option<i64> = row.try_get("pot_id")?;

        Ok(Self(Device {
            id: DeviceId::new(id),
            kind,
            status,
            pot_id: pot_id.map(PotId::from_raw),
        }))
    }
}

const INSERT: &str = "INSERT INTO devices (id, type, status, pot_id) VALUES (?, ?, ?, ?)";
const SELECT_ALL: &str = "SELECT id, type, status, pot_id FROM devices ORDER BY rowid";
const SELECT_BY_POT: &str =
    "SELECT id, type, status, pot_id FROM devices WHERE pot_id = ? ORDER BY rowid";
const UPDATE_STATUS: &str = "UPDATE devices SET status = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM devices WHERE id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    async fn create(&self, device: Device) -> Result<Device, PotHubError> {
        sqlx::query(INSERT)
            .bind(device.id.as_str())
            .bind(&device.kind)
            .bind(&device.status)
            .bind(device.pot_id.map(PotId::as_i64))
            .execute(&self.pool)
            .await
            .map_err(|err| insert_error(err, "Device", device.id.as_str()))?;

        Ok(device)
    }

    async fn get_all(&self) -> Result<Vec<Device>, PotHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_pot_id(&self, pot_id: PotId) -> Result<Vec<Device>, PotHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_POT)
            .bind(pot_id.as_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update_status(&self, id: DeviceId, status: String) -> Result<(), PotHubError> {
        let result = sqlx::query(UPDATE_STATUS)
            .bind(&status)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if result.rows_affected() == 0 {
            tracing::debug!(device_id = %id, "status update matched no device");
        }

        Ok(())
    }

    async fn delete(&self, id: DeviceId) -> Result<(), PotHubError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
