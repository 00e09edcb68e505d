//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the identifier core and
//! something outside it (time, entropy, key assignment).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod entropy;
pub mod id_gen;

pub use clock::Clock;
pub use entropy::EntropySource;
pub use id_gen::IdGenerator;
