//! A pot is a container that groups sensors and devices.
//!
//! A pot's identity is assigned by the store when it is created. Its
//! `sensors` and `devices` are derived: they are whatever rows currently
//! reference the pot, read fresh on every listing.

use serde::Serialize;

use crate::device::Device;
use crate::error::{PotHubError, ValidationError};
use crate::id::PotId;
use crate::sensor::Sensor;

/// A pot together with everything currently mounted in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pot {
    pub id: PotId,
    pub name: String,
    pub sensors: Vec<Sensor>,
    pub devices: Vec<Device>,
}

impl Pot {
    /// A freshly stored pot with nothing mounted yet.
    #[must_use]
    pub fn empty(id: PotId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sensors: Vec::new(),
            devices: Vec::new(),
        }
    }
}

/// The caller-supplied part of a pot, before the store numbers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPot {
    pub name: String,
}

impl NewPot {
    /// Validate and wrap a pot name.
    ///
    /// # Errors
    ///
    /// Returns [`PotHubError::Validation`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, PotHubError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyPotName.into());
        }
        Ok(Self { name })
    }
}
