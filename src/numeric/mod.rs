// ============================================================================
// Numeric Module
// Value and error types shared by the parser, formatter and facade
// ============================================================================
//
// This module provides:
// - NumericValue: integer or decimal result of a parse
// - NumeralError / ErrorKind: position-annotated failure values
// - Large-unit scale arithmetic (10000^rank) used by parser and formatter
//
// Design principles:
// - No floating-point operations
// - All arithmetic is checked and returns Result (no panics)
// - Magnitudes are accumulated unsigned so i128::MIN is reachable

mod errors;
mod value;

pub use errors::{ErrorKind, NumeralError, NumeralResult};
pub use value::{large_unit_scale, NumericValue, GROUP_BASE, MAX_FRACTION_DIGITS, MAX_RANK};

pub(crate) use value::{pow10, signed_from_magnitude};
