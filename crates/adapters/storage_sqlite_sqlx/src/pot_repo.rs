//! `SQLite` implementation of [`PotRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use pothub_app::ports::PotRepository;
use pothub_domain::error::PotHubError;
use pothub_domain::id::PotId;
use pothub_domain::pot::{NewPot, Pot};

use crate::error::StorageError;

/// Wrapper for converting database rows into a domain [`Pot`] with empty
/// collections.
struct Wrapper(Pot);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(Pot::empty(PotId::from_raw(id), name)))
    }
}

// The id comes back from the INSERT itself, so concurrent creates can never
// read each other's id.
const INSERT_RETURNING: &str = "INSERT INTO pots (name) VALUES (?) RETURNING id, name";
const SELECT_ALL: &str = "SELECT id, name FROM pots ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM pots WHERE id = ?";

/// `SQLite`-backed pot repository.
pub struct SqlitePotRepository {
    pool: SqlitePool,
}

impl SqlitePotRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PotRepository for SqlitePotRepository {
    async fn create(&self, pot: NewPot) -> Result<Pot, PotHubError> {
        let row: Wrapper = sqlx::query_as(INSERT_RETURNING)
            .bind(&pot.name)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.0)
    }

    async fn get_all(&self) -> Result<Vec<Pot>, PotHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn delete(&self, id: PotId) -> Result<(), PotHubError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
