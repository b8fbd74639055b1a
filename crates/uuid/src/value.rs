//! The 128-bit UUID value type.
//!
//! [`UuidValue`] is the binary side of every conversion in this crate. It carries no opinion
//! about version or variant bits: any 16-byte pattern is accepted and round-trips exactly.

use crate::{UuidError, UuidFormat, UuidResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Number of bytes in a UUID.
pub const UUID_BYTE_LEN: usize = 16;

/// A 128-bit identifier.
///
/// Byte `i` of [`UuidValue::to_bytes`] is the `i`th byte as it appears, left to right, in the
/// standard string form. The integer pair uses the same big-endian order: the UUID
/// `2D3FB6B6-090D-4FBD-8AC2-428DC536FFE8` is `(0x2D3FB6B6090D4FBD, 0x8AC2428DC536FFE8)`.
///
/// # Construction
/// - [`UuidValue::new_v4`] generates a fresh random value.
/// - [`UuidValue::from_bytes`] / [`UuidValue::from_integer_pair`] rebuild a value from its
///   binary forms.
/// - [`UuidValue::parse_as`] or [`str::parse`] read a formatted string.
///
/// # Display format
/// `Display` renders [`UuidFormat::Standard`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UuidValue(Uuid);

impl UuidValue {
    /// Generates a new random (version 4) UUID.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero UUID.
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Builds a UUID from exactly 16 bytes in big-endian order.
    ///
    /// This is the exact inverse of [`UuidValue::to_bytes`]. No version or variant bits are
    /// checked, so any 16 bytes are accepted.
    ///
    /// # Arguments
    ///
    /// * `bytes` - Raw UUID bytes, byte 0 first as in the standard string form.
    ///
    /// # Returns
    ///
    /// Returns the [`UuidValue`] holding exactly those bytes.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidLength`] if `bytes` is not exactly [`UUID_BYTE_LEN`] long.
    pub fn from_bytes(bytes: &[u8]) -> UuidResult<Self> {
        let array: [u8; UUID_BYTE_LEN] = bytes
            .try_into()
            .map_err(|_| UuidError::InvalidLength {
                actual: bytes.len(),
            })?;
        Ok(Self::from_byte_array(array))
    }

    /// Builds a UUID from a 16-byte array. This cannot fail.
    pub const fn from_byte_array(bytes: [u8; UUID_BYTE_LEN]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Returns the 16 bytes of this UUID in big-endian order.
    pub fn to_bytes(&self) -> [u8; UUID_BYTE_LEN] {
        *self.0.as_bytes()
    }

    /// Returns this UUID as `(high, low)`, where `high` holds bytes 0..8.
    pub fn to_integer_pair(&self) -> (u64, u64) {
        self.0.as_u64_pair()
    }

    /// Inverse of [`UuidValue::to_integer_pair`].
    pub const fn from_integer_pair(high: u64, low: u64) -> Self {
        Self(Uuid::from_u64_pair(high, low))
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Renders this UUID in the given format. Always succeeds.
    pub fn format(&self, format: UuidFormat) -> String {
        format.render(self)
    }

    /// Parses `input` as exactly the given format, without detection.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Malformed`] if `input` does not match `format`.
    pub fn parse_as(input: &str, format: UuidFormat) -> UuidResult<Self> {
        format.parse(input)
    }
}

impl From<Uuid> for UuidValue {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<UuidValue> for Uuid {
    fn from(value: UuidValue) -> Self {
        value.0
    }
}

impl fmt::Display for UuidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&UuidFormat::Standard.render(self))
    }
}

impl FromStr for UuidValue {
    type Err = UuidError;

    /// Parses a string in any known format, detecting which one it is.
    ///
    /// This is equivalent to calling [`UuidFormat::parse_any`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UuidFormat::parse_any(s)
    }
}
