//! Live entropy source backed by the operating system RNG.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::IdError;
use crate::ports::entropy::EntropySource;

/// Reads random bytes from the OS (`getrandom` and friends).
///
/// Stateless; every call goes straight to the OS, which synchronizes
/// internally.
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), IdError> {
        OsRng.try_fill_bytes(dest).map_err(|e| IdError::EntropyUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_whole_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsEntropy.fill(&mut a).unwrap();
        OsEntropy.fill(&mut b).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, [0u8; 32]);
    }

    #[test]
    fn empty_buffer_is_ok() {
        assert!(OsEntropy.fill(&mut []).is_ok());
    }
}
