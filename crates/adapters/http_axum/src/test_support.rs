//! In-memory port implementations shared by handler tests.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use catpoint_app::event_bus::StatusEventBus;
use catpoint_app::ports::{ImageClassifier, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;
use catpoint_domain::error::CatpointError;
use catpoint_domain::image::Image;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::state::AppState;

#[derive(Default)]
pub struct StubRepo {
    arming: Mutex<ArmingStatus>,
    alarm: Mutex<AlarmStatus>,
    sensors: Mutex<BTreeSet<Sensor>>,
}

impl SecurityRepository for StubRepo {
    async fn get_arming_status(&self) -> Result<ArmingStatus, CatpointError> {
        Ok(*self.arming.lock().unwrap())
    }
    async fn set_arming_status(&self, status: ArmingStatus) -> Result<(), CatpointError> {
        *self.arming.lock().unwrap() = status;
        Ok(())
    }
    async fn get_alarm_status(&self) -> Result<AlarmStatus, CatpointError> {
        Ok(*self.alarm.lock().unwrap())
    }
    async fn set_alarm_status(&self, status: AlarmStatus) -> Result<(), CatpointError> {
        *self.alarm.lock().unwrap() = status;
        Ok(())
    }
    async fn get_sensors(&self) -> Result<BTreeSet<Sensor>, CatpointError> {
        Ok(self.sensors.lock().unwrap().clone())
    }
    async fn add_sensor(&self, sensor: Sensor) -> Result<(), CatpointError> {
        self.sensors.lock().unwrap().replace(sensor);
        Ok(())
    }
    async fn remove_sensor(&self, sensor: &Sensor) -> Result<(), CatpointError> {
        self.sensors.lock().unwrap().remove(sensor);
        Ok(())
    }
    async fn update_sensor(&self, sensor: Sensor) -> Result<(), CatpointError> {
        self.sensors.lock().unwrap().replace(sensor);
        Ok(())
    }
}

pub struct StubClassifier {
    cat: bool,
}

impl ImageClassifier for StubClassifier {
    async fn image_contains_cat(
        &self,
        _image: &Image,
        _confidence_threshold: f32,
    ) -> Result<bool, CatpointError> {
        Ok(self.cat)
    }
}

/// State whose classifier always answers `cat`.
pub fn state(cat: bool) -> AppState<StubRepo, StubClassifier> {
    AppState::new(
        SecurityService::new(StubRepo::default(), StubClassifier { cat }),
        Arc::new(StatusEventBus::new(16)),
    )
}
