//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CatpointError`]
//! via `From`. Adapter failures are boxed so the domain never names an IO crate.

use crate::sensor::SensorType;

/// Boxed error raised by a collaborator (storage, classifier).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error returned by every port and service.
#[derive(Debug, thiserror::Error)]
pub enum CatpointError {
    /// A caller supplied an invalid argument.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lookup by identity found nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The state repository failed.
    #[error("storage error")]
    Storage(#[source] BoxError),

    /// The image classifier failed.
    #[error("classifier error")]
    Classifier(#[source] BoxError),
}

/// Invalid input rejected before any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("sensor name must not be empty")]
    EmptySensorName,

    #[error("sensor {name} ({sensor_type}) is not registered")]
    UnknownSensor {
        name: String,
        sensor_type: SensorType,
    },

    #[error("unknown sensor type: {0}")]
    InvalidSensorType(String),

    #[error("unknown arming status: {0}")]
    InvalidArmingStatus(String),

    #[error("unknown alarm status: {0}")]
    InvalidAlarmStatus(String),
}

/// A resource looked up by identity does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
