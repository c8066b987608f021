//! Status event — an immutable record of an alarm or sensor change.
//!
//! Events are produced from status listener notifications and streamed to
//! subscribers (e.g. the HTTP server-sent-events endpoint).

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::sensor::Sensor;
use crate::status::AlarmStatus;
use crate::time::{Timestamp, now};

/// What changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StatusChange {
    /// The alarm status was written with a new value.
    AlarmStatusChanged { status: AlarmStatus },
    /// A sensor's activation flag was written.
    SensorStatusChanged { sensor: Sensor, active: bool },
}

/// A timestamped [`StatusChange`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEvent {
    pub id: EventId,
    #[serde(flatten)]
    pub change: StatusChange,
    pub timestamp: Timestamp,
}

impl StatusEvent {
    /// Record a change that happened now.
    #[must_use]
    pub fn new(change: StatusChange) -> Self {
        Self {
            id: EventId::new(),
            change,
            timestamp: now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::SensorType;

    #[test]
    fn should_serialize_alarm_change_with_type_tag() {
        let event = StatusEvent::new(StatusChange::AlarmStatusChanged {
            status: AlarmStatus::Alarm,
        });
        let value: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "alarm_status_changed");
        assert_eq!(value["status"], "alarm");
        assert_eq!(value["id"], event.id.to_string());
    }

    #[test]
    fn should_roundtrip_sensor_change_through_serde_json() {
        let sensor = Sensor::new("Front", SensorType::Door);
        let event = StatusEvent::new(StatusChange::SensorStatusChanged {
            sensor: sensor.clone(),
            active: true,
        });
        let json = serde_json::to_string(&event).unwrap();
        let parsed: StatusEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, event.id);
        assert_eq!(
            parsed.change,
            StatusChange::SensorStatusChanged {
                sensor,
                active: true
            }
        );
    }
}
