// ============================================================================
// Numeric Value
// Result type crossing the facade boundary, plus unit scale arithmetic
// ============================================================================

use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value of one large-unit rank step (万).
pub const GROUP_BASE: u128 = 10_000;

/// Highest large-unit rank whose scale fits in a `u128` (澗, 10^36).
pub const MAX_RANK: u8 = 9;

/// Most fractional digits a `Decimal` can carry.
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// Compute 10^n at compile time
pub(crate) const fn pow10(n: u32) -> u128 {
    let mut result: u128 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Scale of a large unit: `10000^rank`.
///
/// Returns `None` when the scale does not fit in a `u128`, which the parser
/// reports as an overflow.
#[inline]
pub const fn large_unit_scale(rank: u8) -> Option<u128> {
    GROUP_BASE.checked_pow(rank as u32)
}

/// Apply a sign to an unsigned magnitude.
///
/// `i128::MIN` has no positive counterpart, so the negative range admits one
/// more magnitude than the positive range.
#[inline]
pub(crate) fn signed_from_magnitude(magnitude: u128, negative: bool) -> Option<i128> {
    if negative {
        if magnitude == i128::MIN.unsigned_abs() {
            Some(i128::MIN)
        } else {
            i128::try_from(magnitude).ok().map(|v| -v)
        }
    } else {
        i128::try_from(magnitude).ok()
    }
}

/// A parsed number: an integer, or a decimal when the text carried a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericValue {
    Integer(i128),
    Decimal(Decimal),
}

impl NumericValue {
    /// The integer value, if this is one.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            NumericValue::Integer(v) => Some(*v),
            NumericValue::Decimal(_) => None,
        }
    }

    /// Widen to a decimal.
    ///
    /// Integers beyond the 96-bit `Decimal` mantissa yield `None`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            NumericValue::Integer(v) => Decimal::try_from_i128_with_scale(*v, 0).ok(),
            NumericValue::Decimal(d) => Some(*d),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            NumericValue::Integer(v) => *v < 0,
            NumericValue::Decimal(d) => d.is_sign_negative() && !d.is_zero(),
        }
    }
}

impl From<i128> for NumericValue {
    fn from(value: i128) -> Self {
        NumericValue::Integer(value)
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Integer(value as i128)
    }
}

impl From<Decimal> for NumericValue {
    fn from(value: Decimal) -> Self {
        NumericValue::Decimal(value)
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(v) => write!(f, "{}", v),
            NumericValue::Decimal(d) => write!(f, "{}", d),
        }
    }
}
