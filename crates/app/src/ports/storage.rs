//! Storage port: repository traits for persistence.
//!
//! Deletes are unconditional: removing an id that does not exist succeeds.
//! Creates with a caller-supplied id that is already taken fail with
//! [`PotHubError::Conflict`]; the uniqueness check belongs to the store.

use std::future::Future;

use pothub_domain::device::Device;
use pothub_domain::error::PotHubError;
use pothub_domain::id::{DeviceId, PotId, SensorId};
use pothub_domain::pot::{NewPot, Pot};
use pothub_domain::sensor::Sensor;

/// Repository for [`Sensor`] rows.
pub trait SensorRepository {
    /// Insert a new sensor.
    fn create(&self, sensor: Sensor) -> impl Future<Output = Result<Sensor, PotHubError>> + Send;

    /// All sensors, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Sensor>, PotHubError>> + Send;

    /// Sensors whose `pot_id` equals `pot_id`. Empty when none match.
    fn find_by_pot_id(
        &self,
        pot_id: PotId,
    ) -> impl Future<Output = Result<Vec<Sensor>, PotHubError>> + Send;

    /// Remove a sensor if present.
    fn delete(&self, id: SensorId) -> impl Future<Output = Result<(), PotHubError>> + Send;
}

/// Repository for [`Device`] rows.
pub trait DeviceRepository {
    /// Insert a new device.
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, PotHubError>> + Send;

    /// All devices, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, PotHubError>> + Send;

    /// Devices whose `pot_id` equals `pot_id`. Empty when none match.
    fn find_by_pot_id(
        &self,
        pot_id: PotId,
    ) -> impl Future<Output = Result<Vec<Device>, PotHubError>> + Send;

    /// Overwrite a device's status. Matching no row is not an error.
    fn update_status(
        &self,
        id: DeviceId,
        status: String,
    ) -> impl Future<Output = Result<(), PotHubError>> + Send;

    /// Remove a device if present.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), PotHubError>> + Send;
}

/// Repository for pot rows.
///
/// Only the pot row itself lives here; sensors and devices are attached by
/// the application layer.
pub trait PotRepository {
    /// Insert a pot and return it with the store-assigned id, in one round trip.
    fn create(&self, pot: NewPot) -> impl Future<Output = Result<Pot, PotHubError>> + Send;

    /// All pot rows in storage order, with empty collections.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Pot>, PotHubError>> + Send;

    /// Remove a pot row if present. Mounted sensors and devices are left alone.
    fn delete(&self, id: PotId) -> impl Future<Output = Result<(), PotHubError>> + Send;
}
