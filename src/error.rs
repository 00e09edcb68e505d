//! Error taxonomy for identifier generation and decoding.

use thiserror::Error;

/// Errors produced by the identifier subsystem.
///
/// Clock and entropy failures are fatal for the call that hit them and are
/// never retried here. Decoding failures are validation errors on caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The wall clock could not be read or reported a time before the Unix epoch.
    #[error("clock unavailable: {0}")]
    ClockUnavailable(String),

    /// The cryptographic entropy source failed to produce bytes.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// Input is not a canonical 36-character identifier or not exactly 16 bytes.
    #[error("malformed identifier {input:?}: {reason}")]
    MalformedIdentifier {
        /// The offending input, rendered for display.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
}

impl IdError {
    /// The detail carried by the error, without the variant's display prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::ClockUnavailable(msg) | Self::EntropyUnavailable(msg) => msg,
            Self::MalformedIdentifier { reason, .. } => reason,
        }
    }

    pub(crate) fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedIdentifier { input: input.into(), reason: reason.into() }
    }
}
