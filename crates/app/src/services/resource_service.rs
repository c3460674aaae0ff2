//! Resource service: use-cases for pots, sensors, and devices.
//!
//! Every mutation runs the store operation first. Only when the store
//! reports success is an audit record attempted, and the outcome of that
//! attempt never changes what the caller sees.

use pothub_domain::audit::AuditEntry;
use pothub_domain::device::{self, Device};
use pothub_domain::error::PotHubError;
use pothub_domain::id::{DeviceId, PotId, SensorId};
use pothub_domain::pot::{NewPot, Pot};
use pothub_domain::sensor::Sensor;

use crate::audit::AuditTrail;
use crate::ports::{AuditLog, DeviceRepository, PotRepository, SensorRepository};

/// Application service orchestrating the three stores and the audit log.
pub struct ResourceService<S, D, P, A> {
    sensors: S,
    devices: D,
    pots: P,
    audit: AuditTrail<A>,
}

impl<S, D, P, A> ResourceService<S, D, P, A>
where
    S: SensorRepository,
    D: DeviceRepository,
    P: PotRepository,
    A: AuditLog,
{
    /// Create a new service backed by the given repositories and audit log.
    pub fn new(sensors: S, devices: D, pots: P, audit: A) -> Self {
        Self {
            sensors,
            devices,
            pots,
            audit: AuditTrail::new(audit),
        }
    }

    /// List every sensor.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sensors(&self) -> Result<Vec<Sensor>, PotHubError> {
        self.sensors.get_all().await
    }

    /// Create a sensor after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PotHubError::Validation`] if invariants fail,
    /// [`PotHubError::Conflict`] if the id is taken, or a storage error.
    #[tracing::instrument(skip(self, sensor), fields(sensor_id = %sensor.id))]
    pub async fn create_sensor(&self, sensor: Sensor) -> Result<Sensor, PotHubError> {
        sensor.validate()?;
        let created = self.sensors.create(sensor).await?;
        self.audit
            .record(AuditEntry::sensor(&created.id, "created"))
            .await;
        Ok(created)
    }

    /// Delete a sensor. Deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_sensor(&self, id: SensorId) -> Result<(), PotHubError> {
        self.sensors.delete(id.clone()).await?;
        self.audit.record(AuditEntry::sensor(&id, "deleted")).await;
        Ok(())
    }

    /// List every device.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, PotHubError> {
        self.devices.get_all().await
    }

    /// Create a device after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PotHubError::Validation`] if invariants fail,
    /// [`PotHubError::Conflict`] if the id is taken, or a storage error.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id))]
    pub async fn create_device(&self, device: Device) -> Result<Device, PotHubError> {
        device.validate()?;
        let created = self.devices.create(device).await?;
        self.audit
            .record(AuditEntry::device(&created.id, "created"))
            .await;
        Ok(created)
    }

    /// Replace a device's status.
    ///
    /// Updating an id that matches no device is treated as success, so the
    /// call can be repeated safely.
    ///
    /// # Errors
    ///
    /// Returns [`PotHubError::Validation`] if `status` is blank, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn update_device_status(
        &self,
        id: DeviceId,
        status: String,
    ) -> Result<(), PotHubError> {
        device::validate_status(&status)?;
        let action = format!("status set to {status}");
        self.devices.update_status(id.clone(), status).await?;
        self.audit.record(AuditEntry::device(&id, action)).await;
        Ok(())
    }

    /// Delete a device. Deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), PotHubError> {
        self.devices.delete(id.clone()).await?;
        self.audit.record(AuditEntry::device(&id, "deleted")).await;
        Ok(())
    }

    /// List every pot with the sensors and devices currently bound to it.
    ///
    /// Each pot is filled with one sensor query and one device query, read
    /// straight from the store.
    ///
    /// # Errors
    ///
    /// Returns a storage error from any of the underlying queries.
    pub async fn list_pots(&self) -> Result<Vec<Pot>, PotHubError> {
        let mut pots = self.pots.get_all().await?;
        for pot in &mut pots {
            pot.sensors = self.sensors.find_by_pot_id(pot.id).await?;
            pot.devices = self.devices.find_by_pot_id(pot.id).await?;
        }
        Ok(pots)
    }

    /// Create a pot. The store assigns its id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, pot), fields(pot_name = %pot.name))]
    pub async fn create_pot(&self, pot: NewPot) -> Result<Pot, PotHubError> {
        let created = self.pots.create(pot).await?;
        self.audit.record(AuditEntry::pot(created.id, "created")).await;
        Ok(created)
    }

    /// Delete a pot row. Sensors and devices bound to it keep their `pot_id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_pot(&self, id: PotId) -> Result<(), PotHubError> {
        self.pots.delete(id).await?;
        self.audit.record(AuditEntry::pot(id, "deleted")).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pothub_domain::audit::AuditRecord;
    use pothub_domain::error::{ConflictError, ValidationError};
    use pothub_domain::time::Timestamp;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    fn storage_down() -> PotHubError {
        PotHubError::Storage(Box::new(std::io::Error::other("connection refused")))
    }

    #[derive(Default)]
    struct InMemorySensorRepo {
        rows: Mutex<Vec<Sensor>>,
    }

    impl SensorRepository for InMemorySensorRepo {
        fn create(
            &self,
            sensor: Sensor,
        ) -> impl Future<Output = Result<Sensor, PotHubError>> + Send {
            let mut rows = self.rows.lock().unwrap();
            let result = if rows.iter().any(|row| row.id == sensor.id) {
                Err(ConflictError {
                    entity: "Sensor",
                    id: sensor.id.to_string(),
                }
                .into())
            } else {
                rows.push(sensor.clone());
                Ok(sensor)
            };
            async { result }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Sensor>, PotHubError>> + Send {
            let result = self.rows.lock().unwrap().clone();
            async { Ok(result) }
        }

        fn find_by_pot_id(
            &self,
            pot_id: PotId,
        ) -> impl Future<Output = Result<Vec<Sensor>, PotHubError>> + Send {
            let result: Vec<Sensor> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|row| row.pot_id == Some(pot_id))
                .cloned()
                .collect();
            async { Ok(result) }
        }

        fn delete(&self, id: SensorId) -> impl Future<Output = Result<(), PotHubError>> + Send {
            self.rows.lock().unwrap().retain(|row| row.id != id);
            async { Ok(()) }
        }
    }

    #[derive(Default)]
    struct InMemoryDeviceRepo {
        rows: Mutex<Vec<Device>>,
    }

    impl DeviceRepository for InMemoryDeviceRepo {
        fn create(
            &self,
            device: Device,
        ) -> impl Future<Output = Result<Device, PotHubError>> + Send {
            let mut rows = self.rows.lock().unwrap();
            let result = if rows.iter().any(|row| row.id == device.id) {
                Err(ConflictError {
                    entity: "Device",
                    id: device.id.to_string(),
                }
                .into())
            } else {
                rows.push(device.clone());
                Ok(device)
            };
            async { result }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, PotHubError>> + Send {
            let result = self.rows.lock().unwrap().clone();
            async { Ok(result) }
        }

        fn find_by_pot_id(
            &self,
            pot_id: PotId,
        ) -> impl Future<Output = Result<Vec<Device>, PotHubError>> + Send {
            let result: Vec<Device> = self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|row| row.pot_id == Some(pot_id))
                .cloned()
                .collect();
            async { Ok(result) }
        }

        fn update_status(
            &self,
            id: DeviceId,
            status: String,
        ) -> impl Future<Output = Result<(), PotHubError>> + Send {
            for row in self.rows.lock().unwrap().iter_mut() {
                if row.id == id {
                    row.status.clone_from(&status);
                }
            }
            async { Ok(()) }
        }

        fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), PotHubError>> + Send {
            self.rows.lock().unwrap().retain(|row| row.id != id);
            async { Ok(()) }
        }
    }

    #[derive(Default)]
    struct InMemoryPotRepo {
        rows: Mutex<(i64, Vec<Pot>)>,
    }

    impl PotRepository for InMemoryPotRepo {
        fn create(&self, pot: NewPot) -> impl Future<Output = Result<Pot, PotHubError>> + Send {
            let mut guard = self.rows.lock().unwrap();
            guard.0 += 1;
            let created = Pot::empty(PotId::from_raw(guard.0), pot.name);
            guard.1.push(created.clone());
            async { Ok(created) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Pot>, PotHubError>> + Send {
            let result = self.rows.lock().unwrap().1.clone();
            async { Ok(result) }
        }

        fn delete(&self, id: PotId) -> impl Future<Output = Result<(), PotHubError>> + Send {
            self.rows.lock().unwrap().1.retain(|row| row.id != id);
            async { Ok(()) }
        }
    }

    #[derive(Default)]
    struct InMemoryAuditLog {
        records: Mutex<Vec<AuditRecord>>,
        fail: bool,
    }

    impl InMemoryAuditLog {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn actions(&self) -> Vec<String> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .map(|rec| rec.action.clone())
                .collect()
        }
    }

    impl AuditLog for InMemoryAuditLog {
        fn append(
            &self,
            entry: AuditEntry,
        ) -> impl Future<Output = Result<AuditRecord, PotHubError>> + Send {
            let result = if self.fail {
                Err(storage_down())
            } else {
                let mut records = self.records.lock().unwrap();
                let record = AuditRecord {
                    id: i64::try_from(records.len()).unwrap() + 1,
                    sensor_id: entry.sensor_id,
                    device_id: entry.device_id,
                    action: entry.action,
                    created_at: Timestamp::default(),
                };
                records.push(record.clone());
                Ok(record)
            };
            async { result }
        }
    }

    struct UnavailableSensorRepo;

    impl SensorRepository for UnavailableSensorRepo {
        async fn create(&self, _sensor: Sensor) -> Result<Sensor, PotHubError> {
            Err(storage_down())
        }
        async fn get_all(&self) -> Result<Vec<Sensor>, PotHubError> {
            Err(storage_down())
        }
        async fn find_by_pot_id(&self, _pot_id: PotId) -> Result<Vec<Sensor>, PotHubError> {
            Err(storage_down())
        }
        async fn delete(&self, _id: SensorId) -> Result<(), PotHubError> {
            Err(storage_down())
        }
    }

    type Service<S = InMemorySensorRepo> =
        ResourceService<S, InMemoryDeviceRepo, InMemoryPotRepo, Arc<InMemoryAuditLog>>;

    fn make_service() -> (Service, Arc<InMemoryAuditLog>) {
        let audit = Arc::new(InMemoryAuditLog::default());
        let svc = ResourceService::new(
            InMemorySensorRepo::default(),
            InMemoryDeviceRepo::default(),
            InMemoryPotRepo::default(),
            Arc::clone(&audit),
        );
        (svc, audit)
    }

    fn sensor(id: &str, pot_id: Option<PotId>) -> Sensor {
        Sensor::builder()
            .id(id)
            .kind("temperature")
            .value(21.5)
            .status("ok")
            .pot_id(pot_id)
            .build()
            .unwrap()
    }

    fn device(id: &str, pot_id: Option<PotId>) -> Device {
        Device::builder()
            .id(id)
            .kind("pump")
            .status("off")
            .pot_id(pot_id)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_sensor_and_audit_once() {
        let (svc, audit) = make_service();

        let created = svc.create_sensor(sensor("temp-01", None)).await.unwrap();

        assert_eq!(created.id.as_str(), "temp-01");
        assert_eq!(svc.list_sensors().await.unwrap().len(), 1);
        assert_eq!(audit.actions(), vec!["sensor created"]);
        let records = audit.records.lock().unwrap();
        assert_eq!(records[0].sensor_id.as_deref(), Some("temp-01"));
        assert!(records[0].device_id.is_none());
    }

    #[tokio::test]
    async fn should_reject_invalid_sensor_without_touching_store() {
        let (svc, audit) = make_service();
        let mut invalid = sensor("temp-01", None);
        invalid.value = f64::INFINITY;

        let result = svc.create_sensor(invalid).await;

        assert!(matches!(
            result,
            Err(PotHubError::Validation(ValidationError::NonFiniteValue))
        ));
        assert!(svc.list_sensors().await.unwrap().is_empty());
        assert!(audit.actions().is_empty());
    }

    #[tokio::test]
    async fn should_return_conflict_and_keep_first_sensor_when_id_reused() {
        let (svc, audit) = make_service();
        svc.create_sensor(sensor("temp-01", None)).await.unwrap();

        let mut duplicate = sensor("temp-01", None);
        duplicate.value = 99.0;
        let result = svc.create_sensor(duplicate).await;

        assert!(matches!(result, Err(PotHubError::Conflict(_))));
        let all = svc.list_sensors().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!((all[0].value - 21.5).abs() < f64::EPSILON);
        assert_eq!(audit.actions().len(), 1);
    }

    #[tokio::test]
    async fn should_report_success_when_audit_append_fails() {
        let audit = Arc::new(InMemoryAuditLog::failing());
        let svc = ResourceService::new(
            InMemorySensorRepo::default(),
            InMemoryDeviceRepo::default(),
            InMemoryPotRepo::default(),
            Arc::clone(&audit),
        );

        let created = svc.create_sensor(sensor("temp-01", None)).await;

        assert!(created.is_ok());
        assert_eq!(svc.list_sensors().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_apply_every_mutation_when_audit_append_fails() {
        let audit = Arc::new(InMemoryAuditLog::failing());
        let svc = ResourceService::new(
            InMemorySensorRepo::default(),
            InMemoryDeviceRepo::default(),
            InMemoryPotRepo::default(),
            Arc::clone(&audit),
        );

        let pot = svc.create_pot(NewPot::new("greenhouse-1").unwrap()).await.unwrap();
        assert_eq!(pot.name, "greenhouse-1");

        svc.create_device(device("pump-1", Some(pot.id))).await.unwrap();
        svc.update_device_status(DeviceId::new("pump-1"), "on".to_string())
            .await
            .unwrap();
        assert_eq!(svc.list_devices().await.unwrap()[0].status, "on");

        svc.create_sensor(sensor("temp-01", Some(pot.id))).await.unwrap();
        svc.delete_sensor(SensorId::new("temp-01")).await.unwrap();
        assert!(svc.list_sensors().await.unwrap().is_empty());

        svc.delete_device(DeviceId::new("pump-1")).await.unwrap();
        assert!(svc.list_devices().await.unwrap().is_empty());

        svc.delete_pot(pot.id).await.unwrap();
        assert!(svc.list_pots().await.unwrap().is_empty());

        assert!(audit.actions().is_empty());
    }

    #[tokio::test]
    async fn should_not_audit_when_store_fails() {
        let audit = Arc::new(InMemoryAuditLog::default());
        let svc = ResourceService::new(
            UnavailableSensorRepo,
            InMemoryDeviceRepo::default(),
            InMemoryPotRepo::default(),
            Arc::clone(&audit),
        );

        let result = svc.create_sensor(sensor("temp-01", None)).await;
        assert!(matches!(result, Err(PotHubError::Storage(_))));

        let result = svc.delete_sensor(SensorId::new("temp-01")).await;
        assert!(matches!(result, Err(PotHubError::Storage(_))));

        assert!(audit.actions().is_empty());
    }

    #[tokio::test]
    async fn should_succeed_when_deleting_unknown_sensor_twice() {
        let (svc, audit) = make_service();

        svc.delete_sensor(SensorId::new("ghost")).await.unwrap();
        svc.delete_sensor(SensorId::new("ghost")).await.unwrap();

        assert_eq!(audit.actions(), vec!["sensor deleted", "sensor deleted"]);
    }

    #[tokio::test]
    async fn should_update_device_status_and_audit_new_value() {
        let (svc, audit) = make_service();
        svc.create_device(device("pump-1", None)).await.unwrap();

        svc.update_device_status(DeviceId::new("pump-1"), "on".to_string())
            .await
            .unwrap();

        let all = svc.list_devices().await.unwrap();
        assert_eq!(all[0].status, "on");
        assert_eq!(
            audit.actions(),
            vec!["device created", "device status set to on"]
        );
    }

    #[tokio::test]
    async fn should_succeed_when_updating_status_of_unknown_device() {
        let (svc, audit) = make_service();

        svc.update_device_status(DeviceId::new("ghost"), "on".to_string())
            .await
            .unwrap();

        assert!(svc.list_devices().await.unwrap().is_empty());
        assert_eq!(audit.actions(), vec!["device status set to on"]);
    }

    #[tokio::test]
    async fn should_reject_blank_device_status() {
        let (svc, audit) = make_service();

        let result = svc
            .update_device_status(DeviceId::new("pump-1"), "  ".to_string())
            .await;

        assert!(matches!(
            result,
            Err(PotHubError::Validation(ValidationError::EmptyStatus))
        ));
        assert!(audit.actions().is_empty());
    }

    #[tokio::test]
    async fn should_delete_device_idempotently() {
        let (svc, _audit) = make_service();
        svc.create_device(device("pump-1", None)).await.unwrap();

        svc.delete_device(DeviceId::new("pump-1")).await.unwrap();
        svc.delete_device(DeviceId::new("pump-1")).await.unwrap();

        assert!(svc.list_devices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_assign_distinct_increasing_ids_to_pots_with_same_name() {
        let (svc, _audit) = make_service();

        let first = svc.create_pot(NewPot::new("herbs").unwrap()).await.unwrap();
        let second = svc.create_pot(NewPot::new("herbs").unwrap()).await.unwrap();

        assert!(first.id < second.id);
        assert!(first.sensors.is_empty() && first.devices.is_empty());
    }

    #[tokio::test]
    async fn should_log_pot_actions_under_device_slot() {
        let (svc, audit) = make_service();

        let pot = svc.create_pot(NewPot::new("herbs").unwrap()).await.unwrap();
        svc.delete_pot(pot.id).await.unwrap();

        let records = audit.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].action, "pot created");
        assert_eq!(records[1].action, "pot deleted");
        for record in records.iter() {
            assert!(record.sensor_id.is_none());
            assert_eq!(record.device_id, Some(pot.id.to_string()));
        }
    }

    #[tokio::test]
    async fn should_attach_only_bound_sensors_and_devices_to_each_pot() {
        let (svc, _audit) = make_service();
        let a = svc.create_pot(NewPot::new("a").unwrap()).await.unwrap();
        let b = svc.create_pot(NewPot::new("b").unwrap()).await.unwrap();

        svc.create_sensor(sensor("s-a", Some(a.id))).await.unwrap();
        svc.create_sensor(sensor("s-b", Some(b.id))).await.unwrap();
        svc.create_sensor(sensor("s-free", None)).await.unwrap();
        svc.create_device(device("d-a", Some(a.id))).await.unwrap();

        let pots = svc.list_pots().await.unwrap();
        assert_eq!(pots.len(), 2);

        let pot_a = pots.iter().find(|pot| pot.id == a.id).unwrap();
        let sensor_ids: Vec<&str> = pot_a.sensors.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(sensor_ids, vec!["s-a"]);
        assert_eq!(pot_a.devices.len(), 1);
        assert_eq!(pot_a.devices[0].id.as_str(), "d-a");

        let pot_b = pots.iter().find(|pot| pot.id == b.id).unwrap();
        assert_eq!(pot_b.sensors.len(), 1);
        assert!(pot_b.devices.is_empty());
    }

    #[tokio::test]
    async fn should_reflect_latest_state_on_every_pot_listing() {
        let (svc, _audit) = make_service();
        let pot = svc.create_pot(NewPot::new("a").unwrap()).await.unwrap();
        svc.create_device(device("d-1", Some(pot.id))).await.unwrap();

        assert_eq!(svc.list_pots().await.unwrap()[0].devices[0].status, "off");

        svc.update_device_status(DeviceId::new("d-1"), "on".to_string())
            .await
            .unwrap();
        assert_eq!(svc.list_pots().await.unwrap()[0].devices[0].status, "on");

        svc.delete_device(DeviceId::new("d-1")).await.unwrap();
        assert!(svc.list_pots().await.unwrap()[0].devices.is_empty());
    }

    #[tokio::test]
    async fn should_orphan_sensors_when_pot_deleted() {
        let (svc, _audit) = make_service();
        let pot = svc
            .create_pot(NewPot::new("greenhouse-1").unwrap())
            .await
            .unwrap();
        svc.create_sensor(sensor("temp-01", Some(pot.id)))
            .await
            .unwrap();

        svc.delete_pot(pot.id).await.unwrap();

        assert!(svc.list_pots().await.unwrap().is_empty());
        let sensors = svc.list_sensors().await.unwrap();
        assert_eq!(sensors.len(), 1);
        assert_eq!(sensors[0].pot_id, Some(pot.id));
    }

    #[tokio::test]
    async fn should_surface_storage_error_from_pot_reconstruction() {
        let audit = Arc::new(InMemoryAuditLog::default());
        let pots = InMemoryPotRepo::default();
        pots.create(NewPot::new("a").unwrap()).await.unwrap();
        let svc: Service<UnavailableSensorRepo> = ResourceService::new(
            UnavailableSensorRepo,
            InMemoryDeviceRepo::default(),
            pots,
            audit,
        );

        let result = svc.list_pots().await;
        assert!(matches!(result, Err(PotHubError::Storage(_))));
    }
}
