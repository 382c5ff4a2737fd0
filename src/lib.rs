// ============================================================================
// Japanese Number Library
// Conversion between Japanese numeral text and numeric values
// ============================================================================

//! # Japanese Number
//!
//! Parse Japanese numeral text into numbers and format numbers back into
//! Japanese numeral text.
//!
//! ## Features
//!
//! - **Kanji numerals** with small units (十百千) and large units (万億兆京...)
//! - **Formal numerals** (壱弐参拾萬) and **Arabic digits**, half- or full-width,
//!   mixed freely with kanji units (`3千`, `1234万5678`)
//! - **Signs and decimal fractions** (`マイナス三・一四`)
//! - **Strict grammar**: repeated or ascending units are rejected with a
//!   position-annotated error
//! - **Four output styles**: everyday kanji, formal, positional, mixed
//! - **C ABI** for embedding in a host runtime
//!
//! ## Example
//!
//! ```rust
//! use japanese_number::prelude::*;
//!
//! assert_eq!(parse("一万二千三百四十五").unwrap(), 12345);
//! assert_eq!(format(20_000_000), "二千万");
//!
//! let formal = FormatOptions::formal();
//! assert_eq!(format_with(12345, &formal), "壱萬弐千参百四拾五");
//!
//! let err = parse("一万一万").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::NonMonotonicUnit);
//! println!("{}", err);
//! ```

pub mod domain;
pub mod engine;
pub mod ffi;
pub mod lexicon;
pub mod numeric;
pub mod utils;

pub use engine::{
    format, format_decimal, format_decimal_with, format_value, format_with, parse, parse_decimal,
    parse_decimal_with, parse_value, parse_with,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{FormatOptions, FormatStyle, MinusSign, ParseOptions};
    pub use crate::engine::{
        format, format_decimal, format_decimal_with, format_value, format_with, parse,
        parse_decimal, parse_decimal_with, parse_value, parse_with,
    };
    pub use crate::numeric::{ErrorKind, NumeralError, NumeralResult, NumericValue};
}
