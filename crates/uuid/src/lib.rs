//! UUID value and textual-format utilities.
//!
//! kyuuid reads and writes UUIDs in three textual encodings and converts between them.
//!
//! This crate provides:
//! - A small value type ([`UuidValue`]) with exact conversions to and from 16 big-endian bytes
//!   and to and from a pair of `u64`s.
//! - The format engine ([`UuidFormat`]) which detects, parses, renders and converts the
//!   supported encodings.
//!
//! ## Supported formats
//! | Format | Example |
//! |---|---|
//! | `standard` | `2D3FB6B6-090D-4FBD-8AC2-428DC536FFE8` |
//! | `base64` | `LT+2tgkNT72KwkKNxTb/6A==` |
//! | `truncatedBase64` | `LT+2tgkNT72KwkKNxTb/6A` |
//!
//! Notes:
//! - `standard` is parsed case-insensitively and always rendered in upper case.
//! - `truncatedBase64` is `base64` without its two trailing `=` characters. A UUID is always
//!   16 bytes, so there are always exactly two.
//! - No version or variant bits are checked. Any 128-bit pattern is a valid [`UuidValue`].
//!
//! ## Detection
//! [`UuidFormat::detect`] tries each format in [`UuidFormat::ALL`] order and returns the first
//! whose grammar matches the whole input. Callers that already know the format should call
//! [`UuidFormat::parse`] directly rather than [`UuidFormat::parse_any`].
//!
//! ## Example
//! ```
//! use kyuuid_uuid::UuidFormat;
//!
//! let converted = UuidFormat::Standard.convert("LT+2tgkNT72KwkKNxTb/6A").unwrap();
//! assert_eq!(converted, "2D3FB6B6-090D-4FBD-8AC2-428DC536FFE8");
//! ```

mod format;
mod value;

// Re-export public types
pub use format::UuidFormat;
pub use value::{Uuid, UuidValue, UUID_BYTE_LEN};

/// Error type for UUID operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// A byte buffer was not exactly [`UUID_BYTE_LEN`] bytes long
    #[error("expected 16 bytes of UUID data, got {actual}")]
    InvalidLength { actual: usize },

    /// The input was checked against one specific format and did not match it
    #[error("input did not match the expected format: {expected}")]
    Malformed { expected: UuidFormat },

    /// The input matched none of the known formats
    #[error("could not determine the format of this input")]
    FormatNotRecognized,

    /// A format name that is not in the catalog
    #[error("unknown UUID format name: '{0}'")]
    UnknownFormatName(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
