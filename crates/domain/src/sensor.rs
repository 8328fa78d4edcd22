//! Sensor — a binary intrusion detector of a fixed type.
//!
//! A sensor's identity is its `(name, sensor_type)` pair. The `active` flag is
//! state, not identity: two sensors with the same name and type are the same
//! sensor whatever their flags say, so a sensor can be looked up and replaced
//! in a set without duplicating it.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatpointError, ValidationError};

/// Kind of physical detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

impl SensorType {
    pub const ALL: [Self; 3] = [Self::Door, Self::Window, Self::Motion];

    /// Stable text form, also used for storage and URLs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Door => "DOOR",
            Self::Window => "WINDOW",
            Self::Motion => "MOTION",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::InvalidSensorType(s.to_string()))
    }
}

/// A registered door, window or motion sensor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub name: String,
    pub sensor_type: SensorType,
    pub active: bool,
}

impl Sensor {
    /// Create a builder for constructing a [`Sensor`].
    #[must_use]
    pub fn builder() -> SensorBuilder {
        SensorBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), CatpointError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptySensorName.into());
        }
        Ok(())
    }

    /// Whether this sensor has the identity `(name, sensor_type)`.
    #[must_use]
    pub fn same_identity(&self, name: &str, sensor_type: SensorType) -> bool {
        self.name == name && self.sensor_type == sensor_type
    }

    /// Copy of this sensor with the given active flag.
    #[must_use]
    pub fn with_active(&self, active: bool) -> Self {
        Self {
            active,
            ..self.clone()
        }
    }

    /// Error describing this sensor as unregistered.
    #[must_use]
    pub fn unknown(&self) -> ValidationError {
        ValidationError::UnknownSensor {
            name: self.name.clone(),
            sensor_type: self.sensor_type,
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sensor_type, self.name)
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(&other.name, other.sensor_type)
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
            .then(self.sensor_type.cmp(&other.sensor_type))
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
    /// New sensors are inactive unless [`active`](Self::active) was set.
    /// The type defaults to [`SensorType::Door`].
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
