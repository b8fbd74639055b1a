//! Textual UUID formats: detection, parsing, rendering and conversion.
//!
//! Each [`UuidFormat`] owns a grammar (a whole-string regular expression), a render function
//! and a decode function. These live in a static table that is compiled on first use and only
//! read afterwards, so it is safe to share across threads without locking.

use crate::{UuidError, UuidResult, UuidValue};
use base64::{
    alphabet,
    engine::{general_purpose, GeneralPurpose},
    Engine as _,
};
use regex::Regex;
use std::sync::LazyLock;
use std::{fmt, str::FromStr};

/// A way to write a UUID as a string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum UuidFormat {
    /// Five groups of hex digits: `2D3FB6B6-090D-4FBD-8AC2-428DC536FFE8`
    #[default]
    Standard,

    /// Base64 of the raw 16 bytes: `LT+2tgkNT72KwkKNxTb/6A==`
    Base64,

    /// `Base64` without the trailing `==`: `LT+2tgkNT72KwkKNxTb/6A`
    TruncatedBase64,
}

/// Decodes padded base64, ignoring any set bits past the 128th in the final symbol.
///
/// Every string that matches the base64 grammar decodes to some 16 bytes. Encoding still uses
/// the canonical `general_purpose::STANDARD` engine.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_allow_trailing_bits(true),
);

/// One row of the format table.
struct Grammar {
    format: UuidFormat,
    pattern: Regex,
    render: fn(&UuidValue) -> String,
    decode: fn(&str) -> Option<UuidValue>,
}

/// Indexed by `UuidFormat as usize`, in [`UuidFormat::ALL`] order.
static GRAMMARS: LazyLock<[Grammar; 3]> = LazyLock::new(|| UuidFormat::ALL.map(Grammar::new));

impl Grammar {
    fn new(format: UuidFormat) -> Self {
        match format {
            UuidFormat::Standard => Self::compile(
                format,
                r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}$",
                render_standard,
                decode_standard,
            ),
            UuidFormat::Base64 => Self::compile(
                format,
                r"^[A-Za-z0-9+/]{22}==$",
                render_base64,
                decode_base64,
            ),
            UuidFormat::TruncatedBase64 => Self::compile(
                format,
                r"^[A-Za-z0-9+/]{22}$",
                render_truncated_base64,
                decode_truncated_base64,
            ),
        }
    }

    fn compile(
        format: UuidFormat,
        pattern: &str,
        render: fn(&UuidValue) -> String,
        decode: fn(&str) -> Option<UuidValue>,
    ) -> Self {
        Self {
            format,
            pattern: Regex::new(pattern).expect("format grammar"),
            render,
            decode,
        }
    }
}

fn render_standard(value: &UuidValue) -> String {
    format!("{:X}", value.uuid().hyphenated())
}

fn render_base64(value: &UuidValue) -> String {
    general_purpose::STANDARD.encode(value.to_bytes())
}

fn render_truncated_base64(value: &UuidValue) -> String {
    // 16 bytes always encode to 22 symbols plus "=="
    render_base64(value).trim_end_matches('=').to_owned()
}

fn decode_standard(input: &str) -> Option<UuidValue> {
    ::uuid::Uuid::parse_str(input).ok().map(UuidValue::from)
}

fn decode_base64(input: &str) -> Option<UuidValue> {
    let bytes = LENIENT_BASE64.decode(input).ok()?;
    UuidValue::from_bytes(&bytes).ok()
}

fn decode_truncated_base64(input: &str) -> Option<UuidValue> {
    decode_base64(&format!("{input}=="))
}

impl UuidFormat {
    /// Every format, in detection order.
    pub const ALL: [UuidFormat; 3] = [Self::Standard, Self::Base64, Self::TruncatedBase64];

    fn grammar(self) -> &'static Grammar {
        let grammar = &GRAMMARS[self as usize];
        debug_assert_eq!(grammar.format, self);
        grammar
    }

    /// The name used on the command line and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Base64 => "base64",
            Self::TruncatedBase64 => "truncatedBase64",
        }
    }

    /// A one-line description of the format.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Standard => "the typical 5-segment hex-digit UUID string",
            Self::Base64 => "a Base64-encoded form of the raw bits of the UUID",
            Self::TruncatedBase64 => "just like `base64`, but without the trailing `==`",
        }
    }

    /// Detects which format `input` is written in.
    ///
    /// Formats are tried in [`UuidFormat::ALL`] order and the first whose grammar matches the
    /// whole of `input` wins. This only checks the grammar; it does not decode.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::FormatNotRecognized`] if no format matches.
    pub fn detect(input: &str) -> UuidResult<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.grammar().pattern.is_match(input))
            .ok_or(UuidError::FormatNotRecognized)
    }

    /// Parses `input`, which must be in this format.
    ///
    /// No other format is tried, so this is the fast path when the caller already knows how the
    /// string is written. Any string matching the grammar decodes: standard input may use either
    /// case, and base64 input may carry non-zero trailing bits in its final symbol.
    ///
    /// # Arguments
    ///
    /// * `input` - String to parse. Must match this format's grammar exactly, end to end.
    ///
    /// # Returns
    ///
    /// Returns the decoded [`UuidValue`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Malformed`] with `expected` set to this format if `input` does not
    /// match this format's grammar.
    pub fn parse(self, input: &str) -> UuidResult<UuidValue> {
        let grammar = self.grammar();
        let malformed = UuidError::Malformed { expected: self };

        if !grammar.pattern.is_match(input) {
            return Err(malformed);
        }
        (grammar.decode)(input).ok_or(malformed)
    }

    /// Parses `input` in whichever format it turns out to be.
    ///
    /// This is [`UuidFormat::detect`] followed by [`UuidFormat::parse`]. Prefer calling
    /// [`UuidFormat::parse`] directly when the format is known.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::FormatNotRecognized`] if no format matches.
    pub fn parse_any(input: &str) -> UuidResult<UuidValue> {
        Self::detect(input)?.parse(input)
    }

    /// Renders `value` in this format. Always succeeds.
    pub fn render(self, value: &UuidValue) -> String {
        (self.grammar().render)(value)
    }

    /// Converts `input` from whatever format it is in to this format.
    ///
    /// The source format is found with [`UuidFormat::detect`]. If it is already this format,
    /// `input` is returned unchanged rather than re-encoded, so a lower-case standard UUID stays
    /// lower case.
    ///
    /// # Arguments
    ///
    /// * `input` - A UUID string in any known format.
    ///
    /// # Returns
    ///
    /// Returns `input` written in this format.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Malformed`] with `expected` set to this format (the target, not the
    /// source) when `input` matches no known format.
    pub fn convert(self, input: &str) -> UuidResult<String> {
        let detected =
            Self::detect(input).map_err(|_| UuidError::Malformed { expected: self })?;

        if detected == self {
            return Ok(input.to_owned());
        }
        Ok(self.render(&detected.parse(input)?))
    }
}

impl fmt::Display for UuidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard (hex)",
            Self::Base64 => "base64",
            Self::TruncatedBase64 => "truncated base64",
        })
    }
}

impl FromStr for UuidFormat {
    type Err = UuidError;

    /// Accepts the names returned by [`UuidFormat::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| UuidError::UnknownFormatName(s.to_owned()))
    }
}
