//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

use crate::error::IdError;

/// Provides the current wall-clock time.
///
/// Abstracting time access allows deterministic replay by substituting
/// a fixed or recorded clock during tests and cassette playback.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::ClockUnavailable`] when the time cannot be read.
    fn now(&self) -> Result<DateTime<Utc>, IdError>;
}
