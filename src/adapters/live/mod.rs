//! Live adapters backed by the system clock and OS entropy.

pub mod clock;
pub mod entropy;
pub mod id_gen;
