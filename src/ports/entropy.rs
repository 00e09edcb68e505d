//! Entropy port for cryptographically strong random bytes.

use crate::error::IdError;

/// Fills buffers with cryptographically strong random bytes.
///
/// Implementations must be safe to share across threads; the generator
/// holds no lock around calls.
pub trait EntropySource: Send + Sync {
    /// Fills `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::EntropyUnavailable`] when the source cannot supply bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<(), IdError>;
}
