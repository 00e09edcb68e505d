//! Recording adapters that capture port reads to cassettes.

pub mod clock;
pub mod entropy;

pub use clock::RecordingClock;
pub use entropy::RecordingEntropy;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::warn;

use crate::cassette::recorder::CassetteRecorder;
use crate::error::IdError;

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Mirror of `replaying::replay_result`.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"Ok": v}`
/// - `Err(e)` is serialized as `{"Err": e.message()}`, without the variant prefix
///
/// Serialization or lock failures drop the interaction with a warning; the
/// wrapped port's result is returned to the caller regardless.
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, IdError>,
) where
    T: Serialize,
    I: Serialize,
{
    let output = match result {
        Ok(v) => serde_json::to_value(v).map(|inner| serde_json::json!({ "Ok": inner })),
        Err(e) => Ok(serde_json::json!({ "Err": e.message() })),
    };
    let (input_json, output_json) = match (serde_json::to_value(input), output) {
        (Ok(i), Ok(o)) => (i, o),
        (Err(e), _) | (_, Err(e)) => {
            warn!(port, method, error = %e, "interaction not recorded");
            return;
        }
    };

    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input_json, output_json),
        Err(_) => warn!(port, method, "recorder lock poisoned; interaction not recorded"),
    }
}
