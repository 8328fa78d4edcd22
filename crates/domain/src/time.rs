//! Timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp carried by every [`Event`](crate::event::Event).
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stamp_events_with_current_time() {
        let before = Utc::now();
        let event = crate::event::Event::sensors_changed();
        assert!(event.timestamp >= before);
        assert!(event.timestamp <= now());
    }
}
