//! A device is an actuator with a mutable status, optionally mounted in a pot.

use serde::Serialize;

use crate::error::{PotHubError, ValidationError};
use crate::id::{DeviceId, PotId};

/// An actuating device with a caller-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub pot_id: Option<PotId>,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PotHubError::Validation`] when the id, type, or status is blank.
    pub fn validate(&self) -> Result<(), PotHubError> {
        if self.id.is_blank() {
            return Err(ValidationError::EmptyDeviceId.into());
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::EmptyType.into());
        }
        validate_status(&self.status)
    }
}

/// Check a status string before it replaces a device's current status.
///
/// # Errors
///
/// Returns [`PotHubError::Validation`] when `status` is blank.
pub fn validate_status(status: &str) -> Result<(), PotHubError> {
    if status.trim().is_empty() {
        return Err(ValidationError::EmptyStatus.into());
    }
    Ok(())
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    kind: Option<String>,
    status: Option<String>,
    pot_id: Option<PotId>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
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

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`PotHubError::Validation`] if a required field is missing or blank.
    pub fn build(self) -> Result<Device, PotHubError> {
        let device = Device {
            id: self.id.unwrap_or_else(|| DeviceId::new("")),
            kind: self.kind.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            pot_id: self.pot_id,
        };
        device.validate()?;
        Ok(device)
    }
}
