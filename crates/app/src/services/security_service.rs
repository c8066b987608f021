//! Security service — the alarm state machine.
//!
//! Turns sensor activations, image classifications and arming changes into
//! alarm status writes. All statuses are read from and written to the
//! [`SecurityRepository`]; the rules themselves live in
//! [`catpoint_domain::rules`].

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::Mutex;

use catpoint_domain::error::{CatpointError, NotFoundError};
use catpoint_domain::image::Image;
use catpoint_domain::rules::{self, SensorActivation};
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::ports::{ImageClassifier, SecurityRepository, StatusListener};

/// Minimum confidence, in percent, for the classifier to report a cat.
pub const CAT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// State owned by the service itself, guarded by the critical section.
#[derive(Debug, Default)]
struct Observations {
    /// Result of the most recent image classification.
    cat_detected: bool,
}

/// How a sensor update reached the service.
#[derive(Debug, Clone, Copy)]
enum SensorUpdate {
    /// An explicit activation flag.
    Set(bool),
    /// The sensor reports itself inactive, whatever its stored flag.
    ReportedInactive,
}

impl SensorUpdate {
    fn active(self) -> bool {
        matches!(self, Self::Set(true))
    }
}

/// Application service applying the alarm rules.
///
/// Every mutating operation runs its read-decide-write sequence while
/// holding one async mutex, so concurrent sensor, image and arming events
/// are applied one at a time.
pub struct SecurityService<R, C> {
    repo: R,
    classifier: C,
    listeners: RwLock<Vec<Arc<dyn StatusListener>>>,
    observations: Mutex<Observations>,
}

impl<R, C> SecurityService<R, C>
where
    R: SecurityRepository + Sync,
    C: ImageClassifier + Sync,
{
    /// Create a new service backed by the given repository and classifier.
    pub fn new(repo: R, classifier: C) -> Self {
        Self {
            repo,
            classifier,
            listeners: RwLock::new(Vec::new()),
            observations: Mutex::new(Observations::default()),
        }
    }

    /// Register a listener. Registering the same `Arc` twice has no effect.
    pub fn add_status_listener(&self, listener: Arc<dyn StatusListener>) {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if !listeners.iter().any(|known| Arc::ptr_eq(known, &listener)) {
            listeners.push(listener);
        }
    }

    /// Deregister a listener. Unknown listeners are ignored.
    pub fn remove_status_listener(&self, listener: &Arc<dyn StatusListener>) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|known| !Arc::ptr_eq(known, listener));
    }

    /// Add a sensor to the repository. No alarm side effects.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if the sensor name is empty, or
    /// a storage error propagated from the repository.
    #[tracing::instrument(skip(self, sensor), fields(sensor = %sensor))]
    pub async fn add_sensor(&self, sensor: Sensor) -> Result<Sensor, CatpointError> {
        sensor.validate()?;
        let _observations = self.observations.lock().await;
        self.repo.add_sensor(sensor.clone()).await?;
        Ok(sensor)
    }

    /// Remove a sensor from the repository. No alarm side effects.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, sensor), fields(sensor = %sensor))]
    pub async fn remove_sensor(&self, sensor: &Sensor) -> Result<(), CatpointError> {
        let _observations = self.observations.lock().await;
        self.repo.remove_sensor(sensor).await
    }

    /// All sensors known to the repository.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_sensors(&self) -> Result<BTreeSet<Sensor>, CatpointError> {
        self.repo.get_sensors().await
    }

    /// Current alarm status.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_alarm_status(&self) -> Result<AlarmStatus, CatpointError> {
        self.repo.get_alarm_status().await
    }

    /// Current arming status.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_arming_status(&self) -> Result<ArmingStatus, CatpointError> {
        self.repo.get_arming_status().await
    }

    /// Set a sensor's activation flag and apply the sensor rule table.
    ///
    /// Listeners are always told about the sensor write; they hear about
    /// the alarm status only when it changes. Returns the stored sensor.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::NotFound`] when the repository does not know
    /// the sensor, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, sensor), fields(sensor = %sensor))]
    pub async fn change_sensor_activation_status(
        &self,
        sensor: &Sensor,
        active: bool,
    ) -> Result<Sensor, CatpointError> {
        let _observations = self.observations.lock().await;
        self.apply_sensor_update(sensor, SensorUpdate::Set(active)).await
    }

    /// Report a sensor as inactive.
    ///
    /// Unlike `change_sensor_activation_status(sensor, false)`, the report
    /// counts even when the sensor is already stored as inactive: a pending
    /// alarm clears once no sensor is active.
    ///
    /// # Errors
    ///
    /// See [`change_sensor_activation_status`](Self::change_sensor_activation_status).
    #[tracing::instrument(skip(self, sensor), fields(sensor = %sensor))]
    pub async fn deactivate_sensor(&self, sensor: &Sensor) -> Result<Sensor, CatpointError> {
        let _observations = self.observations.lock().await;
        self.apply_sensor_update(sensor, SensorUpdate::ReportedInactive).await
    }

    /// Classify a camera image and apply the image rule table.
    ///
    /// The result is remembered so that a later switch to
    /// [`ArmingStatus::ArmedHome`] can raise the alarm. Returns whether a cat
    /// was detected.
    ///
    /// # Errors
    ///
    /// Returns a classifier error or a storage error propagated from the
    /// ports. A failed classification leaves the remembered result untouched.
    #[tracing::instrument(skip(self, image), fields(image_len = image.len()))]
    pub async fn process_image(&self, image: &Image) -> Result<bool, CatpointError> {
        let mut observations = self.observations.lock().await;
        let cat_detected = self
            .classifier
            .image_contains_cat(image, CAT_CONFIDENCE_THRESHOLD)
            .await?;
        observations.cat_detected = cat_detected;
        tracing::debug!(cat_detected, "image classified");

        let arming = self.repo.get_arming_status().await?;
        let alarm = self.repo.get_alarm_status().await?;
        let any_sensor_active = self.repo.get_sensors().await?.iter().any(|s| s.active);

        if let Some(next) = rules::on_image_classified(arming, cat_detected, any_sensor_active) {
            self.write_alarm_status(alarm, next).await?;
        }
        Ok(cat_detected)
    }

    /// Store a new arming status and apply the arming rules.
    ///
    /// Arming deactivates every sensor through the regular sensor update
    /// path before the alarm status is re-evaluated.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn set_arming_status(&self, status: ArmingStatus) -> Result<(), CatpointError> {
        let observations = self.observations.lock().await;
        self.repo.set_arming_status(status).await?;
        tracing::info!(%status, "arming status changed");

        if status.is_armed() {
            for sensor in self.repo.get_sensors().await? {
                self.apply_sensor_update(&sensor, SensorUpdate::Set(false)).await?;
            }
        }

        if let Some(next) = rules::on_arming_changed(status, observations.cat_detected) {
            let current = self.repo.get_alarm_status().await?;
            self.write_alarm_status(current, next).await?;
        }
        Ok(())
    }

    /// Sensor update path shared by activation changes, inactivity reports
    /// and arming resets.
    ///
    /// Callers must hold the `observations` lock.
    async fn apply_sensor_update(
        &self,
        sensor: &Sensor,
        update: SensorUpdate,
    ) -> Result<Sensor, CatpointError> {
        let active = update.active();
        let arming = self.repo.get_arming_status().await?;
        let alarm = self.repo.get_alarm_status().await?;
        let sensors = self.repo.get_sensors().await?;

        let mut stored = sensors.get(sensor).cloned().ok_or_else(|| NotFoundError {
            entity: "Sensor",
            id: sensor.to_string(),
        })?;
        let was_active = stored.active;
        stored.set_active(active);
        let any_active_after = active || sensors.iter().any(|s| *s != stored && s.active);

        self.repo.update_sensor(stored.clone()).await?;
        self.notify_sensor_status(&stored);

        let next = match update {
            SensorUpdate::Set(_) => rules::on_sensor_activation(
                arming,
                alarm,
                SensorActivation {
                    was_active,
                    active,
                    any_active_after,
                },
            ),
            SensorUpdate::ReportedInactive => {
                rules::on_sensor_reported_inactive(alarm, any_active_after)
            }
        };
        if let Some(next) = next {
            self.write_alarm_status(alarm, next).await?;
        }
        Ok(stored)
    }

    async fn write_alarm_status(
        &self,
        current: AlarmStatus,
        next: AlarmStatus,
    ) -> Result<(), CatpointError> {
        if current == next {
            tracing::debug!(status = %next, "alarm status unchanged");
            return Ok(());
        }
        self.repo.set_alarm_status(next).await?;
        tracing::info!(from = %current, to = %next, "alarm status changed");
        self.notify_alarm_status(next);
        Ok(())
    }

    fn listeners(&self) -> Vec<Arc<dyn StatusListener>> {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn notify_alarm_status(&self, status: AlarmStatus) {
        for listener in self.listeners() {
            listener.on_alarm_status_changed(status);
        }
    }

    fn notify_sensor_status(&self, sensor: &Sensor) {
        for listener in self.listeners() {
            listener.on_sensor_status_changed(sensor, sensor.active);
        }
    }
}
