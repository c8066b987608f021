//! Status listener port — change notifications.

use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::AlarmStatus;

/// Receives synchronous notifications from the security service.
///
/// Listeners are called in registration order, inside the service's
/// critical section, so implementations must not block.
pub trait StatusListener: Send + Sync {
    /// The alarm status was written with a new value.
    fn on_alarm_status_changed(&self, status: AlarmStatus);

    /// A sensor's activation flag was written.
    fn on_sensor_status_changed(&self, sensor: &Sensor, active: bool);
}
