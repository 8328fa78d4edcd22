//! Storage port: the single source of truth for the security state.
//!
//! Implementations must give each call a consistent view; callers that drive
//! the service from several tasks serialise whole operations themselves.
//!
//! Calls are not grouped into transactions. An operation that fails after a
//! sensor write (the re-check after an activation change, or the bulk reset on
//! arming) leaves the sensor writes made so far in place.

use std::collections::BTreeSet;
use std::future::Future;

use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

/// Repository holding the arming status, the alarm status and the sensor set.
pub trait SecurityRepository {
    /// Current arming status.
    fn get_arming_status(
        &self,
    ) -> impl Future<Output = Result<ArmingStatus, CatpointError>> + Send;

    /// Persist a new arming status.
    fn set_arming_status(
        &self,
        status: ArmingStatus,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send;

    /// Current alarm status.
    fn get_alarm_status(&self) -> impl Future<Output = Result<AlarmStatus, CatpointError>> + Send;

    /// Persist a new alarm status.
    fn set_alarm_status(
        &self,
        status: AlarmStatus,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send;

    /// Every registered sensor, ordered by identity.
    fn get_sensors(&self) -> impl Future<Output = Result<BTreeSet<Sensor>, CatpointError>> + Send;

    /// Register a sensor. Registering an existing identity keeps the stored entry.
    fn add_sensor(&self, sensor: Sensor) -> impl Future<Output = Result<(), CatpointError>> + Send;

    /// Overwrite the stored state of an already registered sensor.
    fn update_sensor(
        &self,
        sensor: Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send;

    /// Forget a sensor. Removing an unknown identity is a no-op.
    fn remove_sensor(
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

    fn update_sensor(
        &self,
        sensor: Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        (**self).update_sensor(sensor)
    }

    fn remove_sensor(
        &self,
        sensor: Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        (**self).remove_sensor(sensor)
    }
}
