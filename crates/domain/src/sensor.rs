//! Sensor — a named, typed binary-state device.
//!
//! A sensor only carries its activation flag. Arming is not a sensor
//! property, and no alarm logic lives here: the security service derives
//! the alarm status from sensor activity.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatpointError, ValidationError};

/// Kind of physical sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => f.write_str("door"),
            Self::Window => f.write_str("window"),
            Self::Motion => f.write_str("motion"),
        }
    }
}

impl FromStr for SensorType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "door" => Ok(Self::Door),
            "window" => Ok(Self::Window),
            "motion" => Ok(Self::Motion),
            _ => Err(ValidationError::UnknownSensorType(s.to_string())),
        }
    }
}

/// A door, window, or motion sensor.
///
/// Identity is the `(name, sensor_type)` pair: equality, hashing and
/// ordering ignore `active`, so a set of sensors holds at most one entry
/// per physical sensor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub name: String,
    pub sensor_type: SensorType,
    pub active: bool,
}

impl Sensor {
    /// Create an inactive sensor.
    #[must_use]
    pub fn new(name: impl Into<String>, sensor_type: SensorType) -> Self {
        Self {
            name: name.into(),
            sensor_type,
            active: false,
        }
    }

    /// Create a builder for constructing a [`Sensor`].
    #[must_use]
    pub fn builder() -> SensorBuilder {
        SensorBuilder::default()
    }

    /// Set the activation flag.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] when `name` is empty or blank.
    pub fn validate(&self) -> Result<(), CatpointError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.sensor_type == other.sensor_type
    }
}

impl Eq for Sensor {}

impl Hash for Sensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.sensor_type.hash(state);
    }
}

impl PartialOrd for Sensor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sensor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.sensor_type.cmp(&other.sensor_type))
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.sensor_type, self.name)
    }
}

/// Step-by-step builder for [`Sensor`].
#[derive(Debug, Default)]
pub struct SensorBuilder {
    name: Option<String>,
    sensor_type: Option<SensorType>,
    active: bool,
}

impl SensorBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn sensor_type(mut self, sensor_type: SensorType) -> Self {
        self.sensor_type = Some(sensor_type);
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Consume the builder, validate, and return a [`Sensor`].
    ///
    /// The sensor type defaults to [`SensorType::Door`].
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Sensor, CatpointError> {
        let sensor = Sensor {
            name: self.name.unwrap_or_default(),
            sensor_type: self.sensor_type.unwrap_or(SensorType::Door),
            active: self.active,
        };
        sensor.validate()?;
        Ok(sensor)
    }
}
