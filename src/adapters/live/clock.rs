//! Live clock using the system clock.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

use crate::error::IdError;
use crate::ports::clock::Clock;

/// Live clock that returns the real current time.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> Result<DateTime<Utc>, IdError> {
        let now = SystemTime::now();
        now.duration_since(UNIX_EPOCH).map_err(|e| {
            IdError::ClockUnavailable(format!(
                "system clock is {:?} before the Unix epoch",
                e.duration()
            ))
        })?;
        Ok(DateTime::<Utc>::from(now))
    }
}
