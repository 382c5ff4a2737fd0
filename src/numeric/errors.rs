// ============================================================================
// Numeral Errors
// Error types for parsing and validating Japanese numeral text
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The category of a numeral failure.
///
/// The discriminants are stable and double as the status codes returned by
/// the C ABI in [`crate::ffi`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum ErrorKind {
    /// Input was empty or whitespace only
    EmptyInput = 1,
    /// A character the lexicon does not know, or the options forbid
    UnknownCharacter = 2,
    /// Digits or units that do not form a valid group
    MalformedGroup = 3,
    /// A small unit repeated, or appearing after a smaller one, within a group
    RepeatedUnit = 4,
    /// A large unit whose rank is not below the previous large unit
    NonMonotonicUnit = 5,
    /// Value exceeds the representable range
    Overflow = 6,
    /// A decimal point in input parsed with the integer grammar
    FractionNotAllowed = 7,
    /// Input longer than the configured maximum
    InputTooLong = 8,
    /// Parse options rejected by their own validation
    InvalidOptions = 9,
}

impl ErrorKind {
    /// Stable numeric code for host bindings.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Short lowercase name, used as the message prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty input",
            ErrorKind::UnknownCharacter => "unknown character",
            ErrorKind::MalformedGroup => "malformed group",
            ErrorKind::RepeatedUnit => "repeated unit",
            ErrorKind::NonMonotonicUnit => "non-monotonic unit",
            ErrorKind::Overflow => "overflow",
            ErrorKind::FractionNotAllowed => "fraction not allowed",
            ErrorKind::InputTooLong => "input too long",
            ErrorKind::InvalidOptions => "invalid options",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed parse: what went wrong, where, and a human-readable detail.
///
/// `position` is a character index (not a byte offset) into the caller's
/// original text, when the failure can be pinned to one character.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumeralError {
    pub kind: ErrorKind,
    pub position: Option<usize>,
    pub message: String,
}

impl NumeralError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            position: None,
            message: message.into(),
        }
    }

    pub fn at(kind: ErrorKind, position: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            position: Some(position),
            message: message.into(),
        }
    }

    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput, "no numeral text to parse")
    }

    pub fn overflow(position: Option<usize>) -> Self {
        Self {
            kind: ErrorKind::Overflow,
            position,
            message: "value exceeds the representable range".to_string(),
        }
    }

    /// Shift the recorded position, for errors raised on a trimmed slice.
    pub(crate) fn offset_by(mut self, offset: usize) -> Self {
        if let Some(pos) = self.position.as_mut() {
            *pos += offset;
        }
        self
    }
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} at position {}: {}", self.kind, pos, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
