//! Unsigned big-endian ordering for identifiers.
//!
//! Splitting 128 bits into two signed 64-bit halves and comparing those
//! inverts the order whenever the top bit of a half is set. With the
//! timestamp in the high bits that happens for real values, so every sort,
//! range, or merge over identifiers goes through [`compare`].

use std::cmp::Ordering;

use crate::error::IdError;
use crate::id::identifier::Identifier;

/// Compares two identifiers as unsigned big-endian 128-bit integers.
///
/// Bytes are compared from most significant to least significant as
/// `0..=255` values; the first differing byte decides.
#[must_use]
pub fn compare(a: &Identifier, b: &Identifier) -> Ordering {
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes()) {
        match x.cmp(y) {
            Ordering::Equal => {}
            decided => return decided,
        }
    }
    Ordering::Equal
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An identifier in any of its encodings.
#[derive(Debug, Clone, Copy)]
pub enum Encoded<'a> {
    /// An already-decoded identifier.
    Id(Identifier),
    /// Canonical 36-character text.
    Text(&'a str),
    /// 16-byte binary form.
    Binary(&'a [u8]),
}

impl Encoded<'_> {
    /// Normalizes to an [`Identifier`].
    ///
    /// # Errors
    ///
    /// Returns [`IdError::MalformedIdentifier`] if the encoding is invalid.
    pub fn decode(self) -> Result<Identifier, IdError> {
        match self {
            Encoded::Id(id) => Ok(id),
            Encoded::Text(text) => Identifier::parse_str(text),
            Encoded::Binary(bytes) => Identifier::from_slice(bytes),
        }
    }
}

impl From<Identifier> for Encoded<'_> {
    fn from(id: Identifier) -> Self {
        Encoded::Id(id)
    }
}

/// Compares two identifiers given in any encoding.
///
/// # Errors
///
/// Returns [`IdError::MalformedIdentifier`] if either side fails to decode.
pub fn compare_encoded(a: Encoded<'_>, b: Encoded<'_>) -> Result<Ordering, IdError> {
    Ok(compare(&a.decode()?, &b.decode()?))
}

/// Sorts identifiers ascending by [`compare`].
pub fn sort_identifiers(ids: &mut [Identifier]) {
    ids.sort_unstable_by(compare);
}

/// Reports whether `ids` is in ascending [`compare`] order.
#[must_use]
pub fn is_sorted(ids: &[Identifier]) -> bool {
    ids.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Merges two ascending runs into one ascending vector.
#[must_use]
pub fn merge_sorted(left: &[Identifier], right: &[Identifier]) -> Vec<Identifier> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j]) == Ordering::Greater {
            merged.push(right[j]);
            j += 1;
        } else {
            merged.push(left[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Reports whether `id` lies in the inclusive range `[low, high]`.
#[must_use]
pub fn within(id: &Identifier, low: &Identifier, high: &Identifier) -> bool {
    compare(low, id) != Ordering::Greater && compare(id, high) != Ordering::Greater
}
