//! The 128-bit time-ordered identifier and its encodings.
//!
//! # Bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - `unix_ts_ms`: 48-bit big-endian milliseconds since the Unix epoch.
//! - `ver`: fixed at `0111`.
//! - `var`: fixed at `10`.
//! - `rand_a` / `rand_b`: 74 bits from a cryptographically strong source.
//!
//! Identifiers have two interchangeable encodings: the 16-byte binary form
//! (also the width of a fixed `BINARY(16)` column) and the canonical
//! 36-character hyphenated lowercase hexadecimal text form.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::IdError;

/// Length of the binary encoding in bytes.
pub const BYTE_LEN: usize = 16;

/// Length of the canonical text encoding in characters.
pub const TEXT_LEN: usize = 36;

/// Width of the timestamp field in bits.
pub const TIMESTAMP_BITS: u32 = 48;

/// Mask applied to millisecond timestamps before they are stored.
pub const TIMESTAMP_MASK: u64 = (1 << TIMESTAMP_BITS) - 1;

/// Version nibble stored in every generated identifier.
pub const VERSION: u8 = 7;

/// Variant bits (`10`) stored in the top of byte 8.
pub const VARIANT: u8 = 0b10;

/// Number of payload bytes supplied by the entropy source.
pub const RANDOM_LEN: usize = 10;

const TIMESTAMP_LEN: usize = 6;
const VERSION_BYTE: usize = 6;
const VARIANT_BYTE: usize = 8;
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// An immutable 128-bit time-ordered identifier.
///
/// Ordering (`Ord`) is unsigned big-endian magnitude, see [`crate::id::compare::compare`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier([u8; BYTE_LEN]);

impl Identifier {
    /// Assembles an identifier from a millisecond timestamp and random payload.
    ///
    /// The timestamp is masked to 48 bits. The version and variant bits
    /// overwrite the corresponding bits of `random`.
    #[must_use]
    pub fn from_parts(timestamp_ms: u64, random: [u8; RANDOM_LEN]) -> Self {
        let mut bytes = [0u8; BYTE_LEN];
        let ts = (timestamp_ms & TIMESTAMP_MASK).to_be_bytes();
        bytes[..TIMESTAMP_LEN].copy_from_slice(&ts[8 - TIMESTAMP_LEN..]);
        bytes[TIMESTAMP_LEN..].copy_from_slice(&random);
        bytes[VERSION_BYTE] = (bytes[VERSION_BYTE] & 0x0F) | (VERSION << 4);
        bytes[VARIANT_BYTE] = (bytes[VARIANT_BYTE] & 0x3F) | (VARIANT << 6);
        Self(bytes)
    }

    /// Wraps 16 raw bytes without validation.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; BYTE_LEN]) -> Self {
        Self(bytes)
    }

    /// Decodes the binary form.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::MalformedIdentifier`] unless `bytes` is exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, IdError> {
        let array: [u8; BYTE_LEN] = bytes.try_into().map_err(|_| {
            IdError::malformed(
                format!("{} bytes", bytes.len()),
                format!("expected exactly {BYTE_LEN} bytes"),
            )
        })?;
        Ok(Self(array))
    }

    /// Decodes the canonical 8-4-4-4-12 hyphenated text form.
    ///
    /// Hex digits are accepted in either case. Braced, URN, and unhyphenated
    /// forms are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::MalformedIdentifier`] when `text` is not canonical.
    pub fn parse_str(text: &str) -> Result<Self, IdError> {
        if text.len() != TEXT_LEN {
            return Err(IdError::malformed(
                text,
                format!("expected {TEXT_LEN} characters, got {}", text.len()),
            ));
        }
        for (pos, ch) in text.bytes().enumerate() {
            if HYPHEN_POSITIONS.contains(&pos) {
                if ch != b'-' {
                    return Err(IdError::malformed(text, format!("expected '-' at position {pos}")));
                }
            } else if !ch.is_ascii_hexdigit() {
                return Err(IdError::malformed(
                    text,
                    format!("invalid hex digit at position {pos}"),
                ));
            }
        }
        let uuid = Uuid::try_parse(text).map_err(|e| IdError::malformed(text, e.to_string()))?;
        Ok(Self(uuid.into_bytes()))
    }

    /// Returns the binary form.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BYTE_LEN] {
        &self.0
    }

    /// Returns the binary form by value.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; BYTE_LEN] {
        self.0
    }

    /// Returns the identifier as one unsigned big-endian integer.
    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns the canonical lowercase text form.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Returns the embedded timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_ms(&self) -> u64 {
        let mut buf = [0u8; 8];
        buf[8 - TIMESTAMP_LEN..].copy_from_slice(&self.0[..TIMESTAMP_LEN]);
        u64::from_be_bytes(buf)
    }

    /// Returns the embedded timestamp as a UTC instant.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        // 48-bit millisecond values always fit chrono's range.
        i64::try_from(self.timestamp_ms())
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .unwrap_or_default()
    }

    /// Returns the version nibble.
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.0[VERSION_BYTE] >> 4
    }

    /// Returns the two variant bits.
    #[must_use]
    pub const fn variant_bits(&self) -> u8 {
        self.0[VARIANT_BYTE] >> 6
    }

    /// Smallest 128-bit value carrying the given timestamp.
    ///
    /// Together with [`Identifier::max_for_millis`] this bounds every
    /// identifier created during one millisecond, for time-range queries.
    #[must_use]
    pub fn min_for_millis(timestamp_ms: u64) -> Self {
        Self::with_timestamp_fill(timestamp_ms, 0x00)
    }

    /// Largest 128-bit value carrying the given timestamp.
    #[must_use]
    pub fn max_for_millis(timestamp_ms: u64) -> Self {
        Self::with_timestamp_fill(timestamp_ms, 0xFF)
    }

    fn with_timestamp_fill(timestamp_ms: u64, fill: u8) -> Self {
        let mut bytes = [fill; BYTE_LEN];
        let ts = (timestamp_ms & TIMESTAMP_MASK).to_be_bytes();
        bytes[..TIMESTAMP_LEN].copy_from_slice(&ts[8 - TIMESTAMP_LEN..]);
        Self(bytes)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Uuid::from_bytes(self.0).hyphenated(), f)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({self})")
    }
}

impl FromStr for Identifier {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl TryFrom<&[u8]> for Identifier {
    type Error = IdError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl From<[u8; BYTE_LEN]> for Identifier {
    fn from(bytes: [u8; BYTE_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Identifier> for [u8; BYTE_LEN] {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl From<Uuid> for Identifier {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.into_bytes())
    }
}

impl From<Identifier> for Uuid {
    fn from(id: Identifier) -> Self {
        Uuid::from_bytes(id.0)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse_str(&text).map_err(de::Error::custom)
    }
}
