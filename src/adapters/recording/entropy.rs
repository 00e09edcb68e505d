//! Recording adapter for the `EntropySource` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::IdError;
use crate::ports::EntropySource;

/// Records entropy reads while delegating to an inner implementation.
///
/// Recorded bytes are stored in the clear. Cassettes are for reproducing
/// fixtures, never for identifiers that must stay unguessable.
pub struct RecordingEntropy {
    inner: Box<dyn EntropySource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEntropy {
    /// Creates a new recording entropy source wrapping the given implementation.
    #[must_use]
    pub fn new(inner: Box<dyn EntropySource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl EntropySource for RecordingEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), IdError> {
        let result = self.inner.fill(dest).map(|()| dest.to_vec());
        record_result(&self.recorder, "entropy", "fill", &json!({ "len": dest.len() }), &result);
        result.map(|_| ())
    }
}
