//! Event — an immutable record of a status change.
//!
//! The security service publishes one event per successful mutation so that
//! listeners (logs, dashboards, notifiers) can follow the alarm without
//! polling the repository.

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::status::{AlarmStatus, ArmingStatus};
use crate::time::{Timestamp, now};

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// The alarm status was written.
    AlarmStatusChanged { status: AlarmStatus },
    /// The arming status was written.
    ArmingStatusChanged { status: ArmingStatus },
    /// A sensor was added, removed, or had its active flag changed.
    SensorsChanged,
    /// An image was classified.
    CatDetected { detected: bool },
}

/// A timestamped event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: EventId::new(),
            kind,
            timestamp: now(),
        }
    }

    #[must_use]
    pub fn alarm_status_changed(status: AlarmStatus) -> Self {
        Self::new(EventKind::AlarmStatusChanged { status })
    }

    #[must_use]
    pub fn arming_status_changed(status: ArmingStatus) -> Self {
        Self::new(EventKind::ArmingStatusChanged { status })
    }

    #[must_use]
    pub fn sensors_changed() -> Self {
        Self::new(EventKind::SensorsChanged)
    }

    #[must_use]
    pub fn cat_detected(detected: bool) -> Self {
        Self::new(EventKind::CatDetected { detected })
    }
}
