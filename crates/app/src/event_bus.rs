//! In-process status event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use catpoint_domain::event::{StatusChange, StatusEvent};
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::AlarmStatus;

use crate::ports::StatusListener;

/// Turns listener notifications into [`StatusEvent`]s on a tokio
/// [`broadcast`] channel.
///
/// Register it on the security service like any other listener, then hand
/// out receivers with [`subscribe`](Self::subscribe). Publishing succeeds
/// even when there are no active subscribers (the event is simply dropped).
pub struct StatusEventBus {
    sender: broadcast::Sender<StatusEvent>,
}

impl StatusEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StatusEvent> {
        self.sender.subscribe()
    }

    fn publish(&self, change: StatusChange) {
        // send fails only when there are zero receivers
        let _ = self.sender.send(StatusEvent::new(change));
    }
}

impl StatusListener for StatusEventBus {
    fn on_alarm_status_changed(&self, status: AlarmStatus) {
        self.publish(StatusChange::AlarmStatusChanged { status });
    }

    fn on_sensor_status_changed(&self, sensor: &Sensor, active: bool) {
        self.publish(StatusChange::SensorStatusChanged {
            sensor: sensor.clone(),
            active,
        });
    }
}
