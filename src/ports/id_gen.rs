//! ID generator port for assigning primary keys.

use crate::error::IdError;
use crate::id::Identifier;

/// Assigns new time-ordered identifiers.
///
/// Record-owning layers call this exactly once per new record and keep the
/// result as the record's key for its whole lifetime.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when the clock or entropy source is unavailable.
    fn generate(&self) -> Result<Identifier, IdError>;
}
