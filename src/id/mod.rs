//! Time-ordered identifiers: layout, codecs, generation, and ordering.

pub mod compare;
pub mod generator;
pub mod identifier;

pub use compare::{
    compare, compare_encoded, is_sorted, merge_sorted, sort_identifiers, within, Encoded,
};
pub use generator::{generate, generate_with, TimeOrderedGenerator};
pub use identifier::Identifier;
