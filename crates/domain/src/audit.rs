//! Audit records, one immutable line per mutating action.
//!
//! The audit table only has a sensor slot and a device slot. Pot actions are
//! written to the device slot with the pot id rendered as text. Every action
//! text is prefixed with the kind of resource (`sensor `, `device `, `pot `)
//! so pot lines can be told apart from device lines.

use crate::id::{DeviceId, PotId, SensorId};
use crate::time::Timestamp;

/// What the application asks the audit log to append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub sensor_id: Option<String>,
    pub device_id: Option<String>,
    pub action: String,
}

impl AuditEntry {
    /// An action performed on a sensor.
    #[must_use]
    pub fn sensor(id: &SensorId, action: impl Into<String>) -> Self {
        Self {
            sensor_id: Some(id.to_string()),
            device_id: None,
            action: format!("sensor {}", action.into()),
        }
    }

    /// An action performed on a device.
    #[must_use]
    pub fn device(id: &DeviceId, action: impl Into<String>) -> Self {
        Self {
            sensor_id: None,
            device_id: Some(id.to_string()),
            action: format!("device {}", action.into()),
        }
    }

    /// An action performed on a pot, logged under the device slot.
    #[must_use]
    pub fn pot(id: PotId, action: impl Into<String>) -> Self {
        Self {
            sensor_id: None,
            device_id: Some(id.to_string()),
            action: format!("pot {}", action.into()),
        }
    }
}

/// A persisted audit line, as returned by the store after appending.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    pub id: i64,
    pub sensor_id: Option<String>,
    pub device_id: Option<String>,
    pub action: String,
    pub created_at: Timestamp,
}
