//! Time-ordered identifier generation.

use tracing::{trace, warn};

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::entropy::OsEntropy;
use crate::error::IdError;
use crate::id::identifier::{Identifier, RANDOM_LEN};
use crate::ports::{Clock, EntropySource, IdGenerator};

/// Generates an identifier from the given clock and entropy source.
///
/// The clock is read once and the entropy source is asked for the 10
/// payload bytes once. Nothing is retried: a failing port fails the call.
///
/// # Errors
///
/// Returns [`IdError::ClockUnavailable`] if the clock fails or reports a time
/// before the Unix epoch, and [`IdError::EntropyUnavailable`] if the entropy
/// source fails.
pub fn generate_with(clock: &dyn Clock, entropy: &dyn EntropySource) -> Result<Identifier, IdError> {
    let now = clock.now().inspect_err(|e| warn!(error = %e, "clock read failed"))?;
    let millis = u64::try_from(now.timestamp_millis()).map_err(|_| {
        warn!(%now, "clock reports a time before the Unix epoch");
        IdError::ClockUnavailable(format!("clock reports {now}, before the Unix epoch"))
    })?;

    let mut random = [0u8; RANDOM_LEN];
    entropy.fill(&mut random).inspect_err(|e| warn!(error = %e, "entropy read failed"))?;

    let id = Identifier::from_parts(millis, random);
    trace!(%id, timestamp_ms = millis, "generated identifier");
    Ok(id)
}

/// Generates an identifier from the system clock and the OS entropy source.
///
/// # Errors
///
/// See [`generate_with`].
pub fn generate() -> Result<Identifier, IdError> {
    generate_with(&LiveClock, &OsEntropy)
}

/// An [`IdGenerator`] built from an arbitrary clock and entropy source.
///
/// Holds no state between calls; the boxed ports carry whatever state they
/// need (a replay cursor, a recorder).
pub struct TimeOrderedGenerator {
    clock: Box<dyn Clock>,
    entropy: Box<dyn EntropySource>,
}

impl TimeOrderedGenerator {
    /// Creates a generator over the given ports.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, entropy: Box<dyn EntropySource>) -> Self {
        Self { clock, entropy }
    }
}

impl IdGenerator for TimeOrderedGenerator {
    fn generate(&self) -> Result<Identifier, IdError> {
        generate_with(self.clock.as_ref(), self.entropy.as_ref())
    }
}
