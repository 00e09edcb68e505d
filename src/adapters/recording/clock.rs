//! Recording adapter for the `Clock` port.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::IdError;
use crate::ports::Clock;

/// Records clock reads while delegating to an inner implementation.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingClock {
    /// Creates a new recording clock wrapping the given implementation.
    #[must_use]
    pub fn new(inner: Box<dyn Clock>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> Result<DateTime<Utc>, IdError> {
        let result = self.inner.now();
        record_result(&self.recorder, "clock", "now", &(), &result);
        result
    }
}
