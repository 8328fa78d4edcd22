//! Security service: the alarm state machine.
//!
//! Three kinds of input move the alarm: sensor activation changes, arming
//! changes and image classification results. Each operation reads the current
//! arming status, alarm status and sensor set from the repository, applies its
//! rule, and writes back only what changed. Nothing is cached between calls.

use std::collections::BTreeSet;

use catpoint_domain::error::CatpointError;
use catpoint_domain::event::Event;
use catpoint_domain::image::{CAT_CONFIDENCE_THRESHOLD, Image};
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::ports::{EventPublisher, ImageClassifier, SecurityRepository};

/// Application service deciding the alarm status.
pub struct SecurityService<R, C, P> {
    repo: R,
    classifier: C,
    publisher: P,
}

impl<R, C, P> SecurityService<R, C, P>
where
    R: SecurityRepository,
    C: ImageClassifier,
    P: EventPublisher,
{
    /// Create a new service from its repository, classifier and event publisher.
    pub fn new(repo: R, classifier: C, publisher: P) -> Self {
        Self {
            repo,
            classifier,
            publisher,
        }
    }

    /// Current arming status.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_arming_status(&self) -> Result<ArmingStatus, CatpointError> {
        self.repo.get_arming_status().await
    }

    /// Current alarm status.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_alarm_status(&self) -> Result<AlarmStatus, CatpointError> {
        self.repo.get_alarm_status().await
    }

    /// All registered sensors, ordered by name then type.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_sensors(&self) -> Result<BTreeSet<Sensor>, CatpointError> {
        self.repo.get_sensors().await
    }

    /// Whether at least one registered sensor is currently active.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn any_sensor_active(&self) -> Result<bool, CatpointError> {
        let sensors = self.repo.get_sensors().await?;
        Ok(sensors.iter().any(|sensor| sensor.active))
    }

    /// Register a sensor. The alarm status is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if the sensor name is empty, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, sensor), fields(sensor = %sensor))]
    pub async fn add_sensor(&self, sensor: Sensor) -> Result<(), CatpointError> {
        sensor.validate()?;
        self.repo.add_sensor(sensor).await?;
        self.publisher.publish(Event::sensors_changed()).await
    }

    /// Forget a sensor. The alarm status is never touched.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, sensor), fields(sensor = %sensor))]
    pub async fn remove_sensor(&self, sensor: Sensor) -> Result<(), CatpointError> {
        self.repo.remove_sensor(sensor).await?;
        self.publisher.publish(Event::sensors_changed()).await
    }

    /// Change the arming status.
    ///
    /// Disarming always resets the alarm to [`AlarmStatus::NoAlarm`]. Arming
    /// from [`ArmingStatus::Disarmed`] deactivates every sensor in one bulk
    /// reset, without running the activation rules per sensor. Switching
    /// between the two armed modes, or to the current mode, only persists the
    /// status.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn set_arming_status(&self, status: ArmingStatus) -> Result<(), CatpointError> {
        let previous = self.repo.get_arming_status().await?;

        match (previous, status) {
            (_, ArmingStatus::Disarmed) => {
                self.write_alarm_status(AlarmStatus::NoAlarm).await?;
            }
            (ArmingStatus::Disarmed, ArmingStatus::ArmedHome | ArmingStatus::ArmedAway) => {
                self.deactivate_all_sensors().await?;
            }
            (
                ArmingStatus::ArmedHome | ArmingStatus::ArmedAway,
                ArmingStatus::ArmedHome | ArmingStatus::ArmedAway,
            ) => {}
        }

        self.repo.set_arming_status(status).await?;
        tracing::info!(from = %previous, to = %status, "arming status changed");
        self.publisher
            .publish(Event::arming_status_changed(status))
            .await
    }

    /// Set a registered sensor's active flag and apply the alarm rules for the
    /// transition being made.
    ///
    /// - Activating while armed: `NoAlarm` becomes `PendingAlarm`, `PendingAlarm`
    ///   becomes `Alarm`. Re-activating an already active sensor only escalates
    ///   from `PendingAlarm`.
    /// - Deactivating: `PendingAlarm` falls back to `NoAlarm` once no sensor is
    ///   active any more. A sounding alarm is never silenced by a sensor.
    /// - Deactivating an inactive sensor changes nothing.
    ///
    /// Both statuses are read before the flag is written, so a failing status
    /// read leaves the sensor untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if the sensor is not registered
    /// (nothing is mutated in that case), or a storage error propagated from
    /// the repository.
    #[tracing::instrument(skip(self, sensor), fields(sensor = %sensor))]
    pub async fn change_sensor_activation(
        &self,
        sensor: &Sensor,
        active: bool,
    ) -> Result<(), CatpointError> {
        let sensors = self.repo.get_sensors().await?;
        let stored = sensors.get(sensor).ok_or_else(|| sensor.unknown())?;
        let was_active = stored.active;
        let arming = self.repo.get_arming_status().await?;
        let alarm = self.repo.get_alarm_status().await?;

        if was_active != active {
            self.repo.update_sensor(stored.with_active(active)).await?;
            self.publisher.publish(Event::sensors_changed()).await?;
        }

        let next = match (was_active, active) {
            (false, true) => Self::next_on_activation(arming, alarm, false),
            (true, true) => Self::next_on_activation(arming, alarm, true),
            (true, false) => self.next_on_deactivation(alarm).await?,
            (false, false) => None,
        };

        if let Some(status) = next {
            self.write_alarm_status(status).await?;
        }
        Ok(())
    }

    /// Classify a camera image and react to the result.
    ///
    /// A cat while [`ArmingStatus::ArmedHome`] always writes `Alarm`; a cat in
    /// any other mode is ignored. No cat writes `NoAlarm` unless a sensor is
    /// active, whatever the current alarm status (including `Alarm`).
    ///
    /// Returns whether a cat was detected.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Classifier`] from the classifier or a storage
    /// error from the repository, unmodified.
    #[tracing::instrument(skip(self, image), fields(image_bytes = image.len()))]
    pub async fn process_image(&self, image: &Image) -> Result<bool, CatpointError> {
        let detected = self
            .classifier
            .classify(image, CAT_CONFIDENCE_THRESHOLD)
            .await?;
        tracing::debug!(detected, "image classified");

        if detected {
            if self.repo.get_arming_status().await? == ArmingStatus::ArmedHome {
                self.write_alarm_status(AlarmStatus::Alarm).await?;
            }
        } else if !self.any_sensor_active().await? {
            self.write_alarm_status(AlarmStatus::NoAlarm).await?;
        }

        self.publisher.publish(Event::cat_detected(detected)).await?;
        Ok(detected)
    }

    fn next_on_activation(
        arming: ArmingStatus,
        alarm: AlarmStatus,
        already_active: bool,
    ) -> Option<AlarmStatus> {
        if !arming.is_armed() {
            return None;
        }
        match alarm {
            AlarmStatus::NoAlarm if !already_active => Some(AlarmStatus::PendingAlarm),
            AlarmStatus::PendingAlarm => Some(AlarmStatus::Alarm),
            AlarmStatus::NoAlarm | AlarmStatus::Alarm => None,
        }
    }

    async fn next_on_deactivation(
        &self,
        alarm: AlarmStatus,
    ) -> Result<Option<AlarmStatus>, CatpointError> {
        let next = match alarm {
            AlarmStatus::PendingAlarm if !self.any_sensor_active().await? => {
                Some(AlarmStatus::NoAlarm)
            }
            AlarmStatus::NoAlarm | AlarmStatus::PendingAlarm | AlarmStatus::Alarm => None,
        };
        Ok(next)
    }

    async fn deactivate_all_sensors(&self) -> Result<(), CatpointError> {
        let active: Vec<Sensor> = self
            .repo
            .get_sensors()
            .await?
            .into_iter()
            .filter(|sensor| sensor.active)
            .collect();
        if active.is_empty() {
            return Ok(());
        }

        tracing::debug!(count = active.len(), "deactivating sensors on arming");
        for sensor in active {
            self.repo.update_sensor(sensor.with_active(false)).await?;
        }
        self.publisher.publish(Event::sensors_changed()).await
    }

    async fn write_alarm_status(&self, status: AlarmStatus) -> Result<(), CatpointError> {
        self.repo.set_alarm_status(status).await?;
        tracing::info!(%status, "alarm status set");
        self.publisher
            .publish(Event::alarm_status_changed(status))
            .await
    }
}
