//! Replaying adapter for the `EntropySource` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::IdError;
use crate::ports::entropy::EntropySource;

/// Replays recorded random bytes from a cassette.
pub struct ReplayingEntropy {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEntropy {
    /// Creates a new replaying entropy source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl EntropySource for ReplayingEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), IdError> {
        let output = next_output(&self.replayer, "entropy", "fill", IdError::EntropyUnavailable)?;
        let bytes: Vec<u8> = replay_result(&output, "entropy::fill", IdError::EntropyUnavailable)?;
        if bytes.len() != dest.len() {
            return Err(IdError::EntropyUnavailable(format!(
                "cassette recorded {} bytes, {} requested",
                bytes.len(),
                dest.len()
            )));
        }
        dest.copy_from_slice(&bytes);
        Ok(())
    }
}
