//! `SQLite` implementation of [`SensorRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pothub_app::ports::SensorRepository;
use pothub_domain::error::PotHubError;
use pothub_domain::id::{PotId, SensorId};
use pothub_domain::sensor::Sensor;

use crate::error::{StorageError, insert_error};

/// Wrapper for converting database rows into domain [`Sensor`].
struct Wrapper(Sensor);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let kind: String = row.try_get("type")?;
        let value: f64 = row.try_get("value")?;
        let status: String = row.try_get("status")?;
        let pot_id: Option<i64> = row.try_get("pot_id")?;

        Ok(Self(Sensor {
            id: SensorId::new(id),
            kind,
            value,
            status,
            pot_id: pot_id.map(PotId::from_raw),
        }))
    }
}

const INSERT: &str = "INSERT INTO sensors (id, type, value, status, pot_id) VALUES (?, ?, ?, ?, ?)";
const SELECT_ALL: &str = "SELECT id, type, value, status, pot_id FROM sensors ORDER BY rowid";
const SELECT_BY_POT: &str =
    "SELECT id, type, value, status, pot_id FROM sensors WHERE pot_id = ? ORDER BY rowid";
const DELETE_BY_ID: &str = "DELETE FROM sensors WHERE id = ?";

/// `SQLite`-backed sensor repository.
pub struct SqliteSensorRepository {
    pool: SqlitePool,
}

impl SqliteSensorRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SensorRepository for SqliteSensorRepository {
    async fn create(&self, sensor: Sensor) -> Result<Sensor, PotHubError> {
        sqlx::query(INSERT)
            .bind(sensor.id.as_str())
            .bind(&sensor.kind)
            .bind(sensor.value)
            .bind(&sensor.status)
            .bind(sensor.pot_id.map(PotId::as_i64))
            .execute(&self.pool)
            .await
            .map_err(|err| insert_error(err, "Sensor", sensor.id.as_str()))?;

        Ok(sensor)
    }

    async fn get_all(&self) -> Result<Vec<Sensor>, PotHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_pot_id(&self, pot_id: PotId) -> Result<Vec<Sensor>, PotHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_POT)
            .bind(pot_id.as_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn delete(&self, id: SensorId) -> Result<(), PotHubError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
