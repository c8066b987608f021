//! Storage port — the repository holding sensors and statuses.

use std::collections::BTreeSet;
use std::future::Future;

use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

/// Single source of truth for the sensor set, the arming status and the
/// alarm status.
///
/// The security service never caches any of these values; every rule
/// evaluation reads them from here first.
pub trait SecurityRepository {
    /// Current arming status.
    fn get_arming_status(
        &self,
    ) -> impl Future<Output = Result<ArmingStatus, CatpointError>> + Send;

    /// Overwrite the arming status.
    fn set_arming_status(
        &self,
        status: ArmingStatus,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send;

    /// Current alarm status.
    fn get_alarm_status(&self) -> impl Future<Output = Result<AlarmStatus, CatpointError>> + Send;

    /// Overwrite the alarm status.
    fn set_alarm_status(
        &self,
        status: AlarmStatus,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send;

    /// All known sensors.
    fn get_sensors(&self) -> impl Future<Output = Result<BTreeSet<Sensor>, CatpointError>> + Send;

    /// Add a sensor. A sensor with the same identity is replaced.
    fn add_sensor(&self, sensor: Sensor) -> impl Future<Output = Result<(), CatpointError>> + Send;

    /// Remove a sensor. Removing an unknown sensor is a no-op.
    fn remove_sensor(
        &self,
        sensor: &Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send;

    /// Store the new state of an existing sensor.
    fn update_sensor(
        &self,
        sensor: Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send;
}

impl<T: SecurityRepository + Send + Sync> SecurityRepository for std::sync::Arc<T> {
    fn get_arming_status(
        &self,
    ) -> impl Future<Output = Result<ArmingStatus, CatpointError>> + Send {
        (**self).get_arming_status()
    }

    fn set_arming_status(
        &self,
        status: ArmingStatus,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        (**self).set_arming_status(status)
    }

    fn get_alarm_status(&self) -> impl Future<Output = Result<AlarmStatus, CatpointError>> + Send {
        (**self).get_alarm_status()
    }

    fn set_alarm_status(
        &self,
        status: AlarmStatus,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        (**self).set_alarm_status(status)
    }

    fn get_sensors(&self) -> impl Future<Output = Result<BTreeSet<Sensor>, CatpointError>> + Send {
        (**self).get_sensors()
    }

    fn add_sensor(&self, sensor: Sensor) -> impl Future<Output = Result<(), CatpointError>> + Send {
        (**self).add_sensor(sensor)
    }

    fn remove_sensor(
        &self,
        sensor: &Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        (**self).remove_sensor(sensor)
    }

    fn update_sensor(
        &self,
        sensor: Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        (**self).update_sensor(sensor)
    }
}
