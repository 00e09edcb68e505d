//! Replaying adapters that serve recorded port reads.

pub mod clock;
pub mod entropy;

pub use clock::ReplayingClock;
pub use entropy::ReplayingEntropy;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::IdError;

/// Takes the next recorded output for `port::method`.
///
/// Exhaustion and lock poisoning are reported through `unavailable`, the
/// same error the live port would raise when it cannot answer.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
    unavailable: fn(String) -> IdError,
) -> Result<serde_json::Value, IdError> {
    let mut guard =
        replayer.lock().map_err(|_| unavailable(format!("{port} replayer lock poisoned")))?;
    let interaction = guard.next_interaction(port, method).map_err(unavailable)?;
    Ok(interaction.output.clone())
}

/// Extracts a recorded `Result` using the Ok/Err JSON convention.
///
/// Mirror of `recording::record_result`: `{"Ok": v}` deserializes `v`,
/// `{"Err": "message"}` becomes `unavailable(message)`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
    unavailable: fn(String) -> IdError,
) -> Result<T, IdError> {
    if let Some(err) = output.get("Err") {
        return Err(unavailable(err.as_str().unwrap_or("unknown error").to_string()));
    }
    let value = output.get("Ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| unavailable(format!("{context}: failed to deserialize: {e}")))
}
