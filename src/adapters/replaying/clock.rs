//! Replaying adapter for the Clock port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::IdError;
use crate::ports::clock::Clock;

/// Replays recorded clock values from a cassette.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a new replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> Result<DateTime<Utc>, IdError> {
        let output = next_output(&self.replayer, "clock", "now", IdError::ClockUnavailable)?;
        replay_result(&output, "clock::now", IdError::ClockUnavailable)
    }
}
