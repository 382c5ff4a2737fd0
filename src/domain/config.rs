// ============================================================================
// Parse and Format Configuration
// Options controlling accepted input and rendered output
// ============================================================================

use crate::lexicon::{self, KANJI_DECIMAL_POINT, MINUS_WORD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default maximum input length, in characters.
pub const DEFAULT_MAX_LEN: usize = 256;

// ============================================================================
// Parse Options
// ============================================================================

/// Controls which characters and conventions the parser accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseOptions {
    /// Accept half- and full-width Arabic digits (`3千`, `１２`)
    pub allow_arabic: bool,

    /// Accept formal numerals (壱, 弐, 拾, 萬, ...)
    pub allow_daiji: bool,

    /// Accept digit grouping marks between digits (`12,345`)
    pub allow_separators: bool,

    /// Read a large unit at the start of the number as one of that unit
    /// (`万` = 10000). When false the leading group must be written out.
    pub implicit_leading_one: bool,

    /// Longest accepted input, in characters after trimming
    pub max_len: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_arabic: true,
            allow_daiji: true,
            allow_separators: true,
            implicit_leading_one: true,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everyday kanji only: no Arabic digits, no daiji, no separators, and a
    /// leading large unit needs an explicit digit (`一万`).
    pub fn strict() -> Self {
        Self {
            allow_arabic: false,
            allow_daiji: false,
            allow_separators: false,
            implicit_leading_one: false,
            max_len: DEFAULT_MAX_LEN,
        }
    }

    /// Builder method: Accept or reject Arabic digits
    pub fn with_arabic(mut self, allow: bool) -> Self {
        self.allow_arabic = allow;
        self
    }

    /// Builder method: Accept or reject formal numerals
    pub fn with_daiji(mut self, allow: bool) -> Self {
        self.allow_daiji = allow;
        self
    }

    /// Builder method: Accept or reject digit separators
    pub fn with_separators(mut self, allow: bool) -> Self {
        self.allow_separators = allow;
        self
    }

    /// Builder method: Toggle implicit one before a leading large unit
    pub fn with_implicit_leading_one(mut self, allow: bool) -> Self {
        self.implicit_leading_one = allow;
        self
    }

    /// Builder method: Set maximum input length
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_len == 0 {
            return Err("Maximum input length must be positive".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Format Style
// ============================================================================

/// How numbers are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatStyle {
    /// Everyday kanji with units, "one" omitted before 十/百/千
    /// - 12345 → 一万二千三百四十五
    #[default]
    Kanji,

    /// Formal numerals with an explicit one before every unit
    /// - 12345 → 壱萬弐千参百四拾五
    Daiji,

    /// Digit-by-digit kanji, no units
    /// - 2026 → 二〇二六
    Positional,

    /// Arabic digits per group, kanji large units
    /// - 12345678 → 1234万5678
    Mixed,
}

impl FormatStyle {
    /// Decode a host-side style code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(FormatStyle::Kanji),
            1 => Some(FormatStyle::Daiji),
            2 => Some(FormatStyle::Positional),
            3 => Some(FormatStyle::Mixed),
            _ => None,
        }
    }
}

/// Minus marker placed before negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MinusSign {
    /// `-`
    Ascii,
    /// `－`
    FullWidth,
    /// `マイナス`
    #[default]
    Word,
}

impl MinusSign {
    pub const fn as_str(self) -> &'static str {
        match self {
            MinusSign::Ascii => "-",
            MinusSign::FullWidth => "－",
            MinusSign::Word => MINUS_WORD,
        }
    }
}

// ============================================================================
// Format Options
// ============================================================================

/// Controls how the formatter renders values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    pub style: FormatStyle,
    pub minus: MinusSign,

    /// Marker between integer and fractional digits; always one the parser
    /// reads back
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_decimal_point"))]
    decimal_point: char,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            style: FormatStyle::Kanji,
            minus: MinusSign::Word,
            decimal_point: KANJI_DECIMAL_POINT,
        }
    }
}

impl FormatOptions {
    pub fn new(style: FormatStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Builder method: Set minus marker
    pub fn with_minus(mut self, minus: MinusSign) -> Self {
        self.minus = minus;
        self
    }

    /// Builder method: Set decimal point marker
    ///
    /// Refuses markers the parser would not read back (`点`).
    pub fn with_decimal_point(mut self, decimal_point: char) -> Result<Self, String> {
        check_decimal_point(decimal_point)?;
        self.decimal_point = decimal_point;
        Ok(self)
    }

    #[inline]
    pub fn decimal_point(&self) -> char {
        self.decimal_point
    }
}

fn check_decimal_point(decimal_point: char) -> Result<(), String> {
    if !lexicon::is_decimal_point(decimal_point) {
        return Err(format!(
            "Decimal point '{}' would not be read back by the parser",
            decimal_point
        ));
    }
    Ok(())
}

#[cfg(feature = "serde")]
fn deserialize_decimal_point<'de, D>(deserializer: D) -> Result<char, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let decimal_point = char::deserialize(deserializer)?;
    check_decimal_point(decimal_point).map_err(serde::de::Error::custom)?;
    Ok(decimal_point)
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FormatOptions {
    /// Legal and financial documents
    /// - Daiji numerals (壱, 弐, 参, 拾, 萬)
    pub fn formal() -> Self {
        Self::new(FormatStyle::Daiji)
    }

    /// Years and identifiers written vertically
    /// - Digit-by-digit kanji (二〇二六)
    pub fn positional() -> Self {
        Self::new(FormatStyle::Positional)
    }

    /// Newspaper style large figures
    /// - Arabic digits with kanji large units (1234万5678)
    /// - ASCII minus and decimal point
    pub fn mixed() -> Self {
        Self {
            style: FormatStyle::Mixed,
            minus: MinusSign::Ascii,
            decimal_point: '.',
        }
    }
}
