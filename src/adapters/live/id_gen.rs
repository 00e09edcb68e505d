//! Live adapter for the `IdGenerator` port.

use crate::error::IdError;
use crate::id::{self, Identifier};
use crate::ports::IdGenerator;

/// Live ID generator over the system clock and OS entropy.
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate(&self) -> Result<Identifier, IdError> {
        id::generate()
    }
}
