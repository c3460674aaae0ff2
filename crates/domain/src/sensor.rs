//! A sensor is a passive measurement point, optionally mounted in a pot.

use serde::Serialize;

use crate::error::{PotHubError, ValidationError};
use crate::id::{PotId, SensorId};

/// A measurement point with a caller-assigned identity.
///
/// Sensors are never updated in place: they are created, listed, and deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sensor {
    pub id: SensorId,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    pub status: String,
    pub pot_id: Option<PotId>,
}

impl Sensor {
    /// Create a builder for constructing a [`Sensor`].
    #[must_use]
    pub fn builder() -> SensorBuilder {
        SensorBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PotHubError::Validation`] when the id, type, or status is
    /// blank, or when the value is NaN or infinite.
    pub fn validate(&self) -> Result<(), PotHubError> {
        if self.id.is_blank() {
            return Err(ValidationError::EmptySensorId.into());
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::EmptyType.into());
        }
        if self.status.trim().is_empty() {
            return Err(ValidationError::EmptyStatus.into());
        }
        if !self.value.is_finite() {
            return Err(ValidationError::NonFiniteValue.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Sensor`].
#[derive(Debug, Default)]
pub struct SensorBuilder {
    id: Option<SensorId>,
    kind: Option<String>,
    value: f64,
    status: Option<String>,
    pot_id: Option<PotId>,
}

impl SensorBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<SensorId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn pot_id(mut self, pot_id: Option<PotId>) -> Self {
        self.pot_id = pot_id;
        self
    }

    /// Consume the builder, validate, and return a [`Sensor`].
    ///
    /// # Errors
    ///
    /// Returns [`PotHubError::Validation`] if a required field is missing or
    /// blank, or the value is not finite.
    pub fn build(self) -> Result<Sensor, PotHubError> {
        let sensor = Sensor {
            id: self.id.unwrap_or_else(|| SensorId::new("")),
            kind: self.kind.unwrap_or_default(),
            value: self.value,
            status: self.status.unwrap_or_default(),
            pot_id: self.pot_id,
        };
        sensor.validate()?;
        Ok(sensor)
    }
}
