// ============================================================================
// Numeral Parser
// Single-pass accumulation of digit groups, small units and large units
// ============================================================================
//
// Grammar (one left-to-right pass):
// - An optional sign, first token only
// - Groups of 1-4 digits and small units (十百千), each closed by a large
//   unit (万億兆...) or by the end of the integer part
// - Small units strictly decreasing within a group
// - Large units strictly decreasing across the number
// - Optionally a decimal point followed by plain digits
//
// Input with no unit characters at all is positional notation (二〇二六,
// 12345) and is not bound to four digits.

use crate::domain::{NumeralToken, ParseOptions};
use crate::lexicon::{SmallUnit, TokenKind};
use crate::numeric::{
    large_unit_scale, pow10, signed_from_magnitude, ErrorKind, NumeralError, NumeralResult,
    MAX_FRACTION_DIGITS,
};
use rust_decimal::Decimal;
use tracing::trace;

/// Largest value a single group may hold before a large unit.
const MAX_GROUP: u128 = 9_999;

// ============================================================================
// Parsed Number
// ============================================================================

/// Sign and unsigned parts of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedNumber {
    pub negative: bool,
    pub integer: u128,
    pub fraction: u128,

    /// Number of fractional digits; zero when no decimal point was present
    pub fraction_digits: u32,

    /// Whether a decimal point was present
    pub has_fraction: bool,
}

impl ParsedNumber {
    /// Signed integer value, ignoring any fraction.
    pub fn to_integer(&self) -> NumeralResult<i128> {
        signed_from_magnitude(self.integer, self.negative)
            .ok_or_else(|| NumeralError::overflow(None))
    }

    /// Exact decimal value.
    pub fn to_decimal(&self) -> NumeralResult<Decimal> {
        let mantissa = self
            .integer
            .checked_mul(pow10(self.fraction_digits))
            .and_then(|scaled| scaled.checked_add(self.fraction))
            .and_then(|magnitude| signed_from_magnitude(magnitude, self.negative))
            .ok_or_else(|| NumeralError::overflow(None))?;

        Decimal::try_from_i128_with_scale(mantissa, self.fraction_digits)
            .map_err(|_| NumeralError::overflow(None))
    }
}

// ============================================================================
// Parse State
// ============================================================================

/// Accumulator for one parse; discarded when the parse completes.
#[derive(Debug, Default)]
struct ParseState {
    /// Pending digit run not yet multiplied by a unit
    current_digit_group: u128,
    digits_in_run: usize,

    /// Sum of small-unit products in the open group
    small_group_sum: u128,
    last_small_unit: Option<SmallUnit>,

    /// Whether the open group has seen any digit or small unit
    group_has_numeral: bool,

    /// Bare 千 opening a group after a large unit; only a smaller large unit
    /// may close that group (一億千万 ok, 百万千 not)
    bare_thousand_at: Option<usize>,

    /// Sum of closed groups, each scaled by its large unit
    total: u128,
    last_unit_rank: Option<u8>,

    /// No unit characters anywhere in the integer part
    positional: bool,
}

impl ParseState {
    fn new(positional: bool) -> Self {
        Self {
            positional,
            ..Self::default()
        }
    }

    fn push_digit(&mut self, digit: u8, position: usize) -> NumeralResult<()> {
        let next = self
            .current_digit_group
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or_else(|| NumeralError::overflow(Some(position)))?;

        if !self.positional {
            if next > MAX_GROUP {
                return Err(NumeralError::at(
                    ErrorKind::MalformedGroup,
                    position,
                    "a group holds at most four digits",
                ));
            }
            if let Some(unit) = self.last_small_unit {
                if next >= unit.multiplier() {
                    return Err(NumeralError::at(
                        ErrorKind::MalformedGroup,
                        position,
                        format!("digits after '{}' must be smaller than it", unit.as_char()),
                    ));
                }
            }
        }

        self.current_digit_group = next;
        self.digits_in_run += 1;
        self.group_has_numeral = true;
        Ok(())
    }

    fn apply_small_unit(&mut self, unit: SmallUnit, position: usize) -> NumeralResult<()> {
        if let Some(previous) = self.last_small_unit {
            if previous <= unit {
                return Err(NumeralError::at(
                    ErrorKind::RepeatedUnit,
                    position,
                    format!(
                        "'{}' cannot follow '{}' in the same group",
                        unit.as_char(),
                        previous.as_char()
                    ),
                ));
            }
        }

        if unit == SmallUnit::Thousand
            && self.digits_in_run == 0
            && self.last_unit_rank.is_some()
        {
            self.bare_thousand_at = Some(position);
        }

        let multiplier = if self.digits_in_run == 0 {
            1
        } else {
            self.current_digit_group
        };
        if multiplier == 0 || multiplier > 9 {
            return Err(NumeralError::at(
                ErrorKind::MalformedGroup,
                position,
                format!("'{}' takes a single non-zero digit", unit.as_char()),
            ));
        }

        self.small_group_sum += multiplier * unit.multiplier();
        self.current_digit_group = 0;
        self.digits_in_run = 0;
        self.last_small_unit = Some(unit);
        self.group_has_numeral = true;
        Ok(())
    }

    fn apply_large_unit(
        &mut self,
        rank: u8,
        position: usize,
        options: &ParseOptions,
    ) -> NumeralResult<()> {
        if let Some(previous) = self.last_unit_rank {
            if rank >= previous {
                return Err(NumeralError::at(
                    ErrorKind::NonMonotonicUnit,
                    position,
                    "large units must decrease from left to right",
                ));
            }
        }

        let group = if self.group_has_numeral {
            self.small_group_sum + self.current_digit_group
        } else if self.last_unit_rank.is_none() && options.implicit_leading_one {
            1
        } else {
            return Err(NumeralError::at(
                ErrorKind::MalformedGroup,
                position,
                "large unit without a preceding number",
            ));
        };
        if group == 0 {
            return Err(NumeralError::at(
                ErrorKind::MalformedGroup,
                position,
                "a zero group cannot carry a unit",
            ));
        }

        let scale =
            large_unit_scale(rank).ok_or_else(|| NumeralError::overflow(Some(position)))?;
        self.total = group
            .checked_mul(scale)
            .and_then(|scaled| self.total.checked_add(scaled))
            .ok_or_else(|| NumeralError::overflow(Some(position)))?;

        self.reset_group();
        self.last_unit_rank = Some(rank);
        Ok(())
    }

    fn reset_group(&mut self) {
        self.current_digit_group = 0;
        self.digits_in_run = 0;
        self.small_group_sum = 0;
        self.last_small_unit = None;
        self.group_has_numeral = false;
        self.bare_thousand_at = None;
    }

    fn finish(self) -> NumeralResult<u128> {
        if let Some(position) = self.bare_thousand_at {
            return Err(NumeralError::at(
                ErrorKind::NonMonotonicUnit,
                position,
                "'千' in the last group needs an explicit digit (一千)",
            ));
        }
        let group = self.small_group_sum + self.current_digit_group;
        self.total
            .checked_add(group)
            .ok_or_else(|| NumeralError::overflow(None))
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Parse a token sequence.
///
/// With `allow_fraction` false, a decimal point fails with
/// `FractionNotAllowed`.
pub fn parse_tokens(
    tokens: &[NumeralToken],
    options: &ParseOptions,
    allow_fraction: bool,
) -> NumeralResult<ParsedNumber> {
    let first = tokens.first().ok_or_else(NumeralError::empty_input)?;

    let mut parsed = ParsedNumber::default();
    let body = match first.kind {
        TokenKind::Minus => {
            parsed.negative = true;
            &tokens[1..]
        }
        TokenKind::Plus => &tokens[1..],
        _ => tokens,
    };

    let point = body
        .iter()
        .position(|t| t.kind == TokenKind::DecimalPoint);
    let (integer_tokens, fraction_tokens) = match point {
        Some(idx) if !allow_fraction => {
            return Err(NumeralError::at(
                ErrorKind::FractionNotAllowed,
                body[idx].position,
                "decimal point in an integer",
            ));
        }
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    if integer_tokens.is_empty() && fraction_tokens.map_or(true, |f| f.is_empty()) {
        let position = tokens.last().map_or(0, |t| t.position);
        return Err(NumeralError::at(
            ErrorKind::MalformedGroup,
            position,
            "no digits in number",
        ));
    }

    parsed.integer = parse_integer_part(integer_tokens, options)?;

    if let Some(fraction_tokens) = fraction_tokens {
        let (fraction, digits) = parse_fraction_part(fraction_tokens)?;
        parsed.fraction = fraction;
        parsed.fraction_digits = digits;
        parsed.has_fraction = true;
    }

    Ok(parsed)
}

fn parse_integer_part(tokens: &[NumeralToken], options: &ParseOptions) -> NumeralResult<u128> {
    let positional = !tokens.iter().any(NumeralToken::is_unit);
    let mut state = ParseState::new(positional);

    for (idx, token) in tokens.iter().enumerate() {
        trace!(position = token.position, kind = ?token.kind, "numeral token");
        match token.kind {
            TokenKind::Digit(d) => state.push_digit(d, token.position)?,
            TokenKind::SmallUnit(unit) => state.apply_small_unit(unit, token.position)?,
            TokenKind::LargeUnit(rank) => state.apply_large_unit(rank, token.position, options)?,
            TokenKind::Separator => {
                let between_digits = idx > 0
                    && tokens[idx - 1].is_digit()
                    && tokens.get(idx + 1).is_some_and(NumeralToken::is_digit);
                if !between_digits {
                    return Err(NumeralError::at(
                        ErrorKind::MalformedGroup,
                        token.position,
                        "a separator must sit between digits",
                    ));
                }
            }
            TokenKind::Minus | TokenKind::Plus => {
                return Err(NumeralError::at(
                    ErrorKind::MalformedGroup,
                    token.position,
                    "a sign may only start the number",
                ));
            }
            TokenKind::DecimalPoint => {
                return Err(NumeralError::at(
                    ErrorKind::FractionNotAllowed,
                    token.position,
                    "decimal point in an integer",
                ));
            }
        }
    }

    state.finish()
}

fn parse_fraction_part(tokens: &[NumeralToken]) -> NumeralResult<(u128, u32)> {
    let mut fraction: u128 = 0;
    let mut digits: u32 = 0;

    for token in tokens {
        let TokenKind::Digit(d) = token.kind else {
            return Err(NumeralError::at(
                ErrorKind::MalformedGroup,
                token.position,
                "only digits may follow a decimal point",
            ));
        };
        if digits == MAX_FRACTION_DIGITS {
            return Err(NumeralError::overflow(Some(token.position)));
        }
        fraction = fraction * 10 + d as u128;
        digits += 1;
    }

    Ok((fraction, digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tokenizer::tokenize;

    fn parse(text: &str) -> NumeralResult<i128> {
        let options = ParseOptions::default();
        let tokens = tokenize(text, &options)?;
        parse_tokens(&tokens, &options, false)?.to_integer()
    }

    fn parse_decimal(text: &str) -> NumeralResult<Decimal> {
        let options = ParseOptions::default();
        let tokens = tokenize(text, &options)?;
        parse_tokens(&tokens, &options, true)?.to_decimal()
    }

    fn kind_of(text: &str) -> ErrorKind {
        parse(text).unwrap_err().kind
    }

    #[test]
    fn test_basic_groups() {
        assert_eq!(parse("二百三十四").unwrap(), 234);
        assert_eq!(parse("一万二千三百四十五").unwrap(), 12345);
        assert_eq!(parse("二千万").unwrap(), 20_000_000);
        assert_eq!(parse("百十").unwrap(), 110);
        assert_eq!(parse("千百万").unwrap(), 11_000_000);
        assert_eq!(parse("九千九百九十九").unwrap(), 9999);
    }

    #[test]
    fn test_implicit_one() {
        assert_eq!(parse("十").unwrap(), 10);
        assert_eq!(parse("百").unwrap(), 100);
        assert_eq!(parse("万").unwrap(), 10_000);
        assert_eq!(parse("億五千万").unwrap(), 150_000_000);
    }

    #[test]
    fn test_implicit_leading_one_disabled() {
        let options = ParseOptions::default().with_implicit_leading_one(false);
        let tokens = tokenize("万", &options).unwrap();
        let err = parse_tokens(&tokens, &options, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedGroup);

        let tokens = tokenize("一万", &options).unwrap();
        assert_eq!(
            parse_tokens(&tokens, &options, false)
                .unwrap()
                .to_integer()
                .unwrap(),
            10_000
        );
    }

    #[test]
    fn test_large_units() {
        assert_eq!(parse("一億").unwrap(), 100_000_000);
        assert_eq!(parse("三兆二億一万").unwrap(), 3_000_200_010_000);
        assert_eq!(parse("一京").unwrap(), 10_000_000_000_000_000);
        assert_eq!(parse("一澗").unwrap(), 10i128.pow(36));
    }

    #[test]
    fn test_mixed_arabic() {
        assert_eq!(parse("3千").unwrap(), 3000);
        assert_eq!(parse("1234万5678").unwrap(), 12_345_678);
        assert_eq!(parse("1,000万").unwrap(), 10_000_000);
        assert_eq!(parse("百23").unwrap(), 123);
        assert_eq!(parse("１２万").unwrap(), 120_000);
    }

    #[test]
    fn test_positional() {
        assert_eq!(parse("〇").unwrap(), 0);
        assert_eq!(parse("二〇二六").unwrap(), 2026);
        assert_eq!(parse("12345").unwrap(), 12345);
        assert_eq!(parse("12,345,678").unwrap(), 12_345_678);
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse("マイナス五").unwrap(), -5);
        assert_eq!(parse("-3千").unwrap(), -3000);
        assert_eq!(parse("＋十").unwrap(), 10);
        assert_eq!(kind_of("五マイナス"), ErrorKind::MalformedGroup);
        assert_eq!(kind_of("マイナス"), ErrorKind::MalformedGroup);
        assert_eq!(kind_of("--5"), ErrorKind::MalformedGroup);
    }

    #[test]
    fn test_malformed_groups() {
        // Five digits before a unit
        assert_eq!(kind_of("12345万"), ErrorKind::MalformedGroup);
        // Multi-digit multiplier for a small unit
        assert_eq!(kind_of("30千"), ErrorKind::MalformedGroup);
        // Trailing digits too large for the preceding unit
        assert_eq!(kind_of("十23"), ErrorKind::MalformedGroup);
        assert_eq!(kind_of("百234"), ErrorKind::MalformedGroup);
        // Empty group between large units
        assert_eq!(kind_of("一億万"), ErrorKind::MalformedGroup);
        // Zero group with a unit
        assert_eq!(kind_of("〇万"), ErrorKind::MalformedGroup);
        assert_eq!(kind_of("〇十"), ErrorKind::MalformedGroup);
        // Dangling separators
        assert_eq!(kind_of(",1"), ErrorKind::MalformedGroup);
        assert_eq!(kind_of("1,"), ErrorKind::MalformedGroup);
        assert_eq!(kind_of("十,一"), ErrorKind::MalformedGroup);
    }

    #[test]
    fn test_repeated_small_units() {
        assert_eq!(kind_of("十十"), ErrorKind::RepeatedUnit);
        assert_eq!(kind_of("十百"), ErrorKind::RepeatedUnit);
        assert_eq!(kind_of("二十三百"), ErrorKind::RepeatedUnit);

        let err = parse("百百").unwrap_err();
        assert_eq!(err.position, Some(1));
    }

    #[test]
    fn test_small_units_reset_per_group() {
        assert_eq!(parse("十万十").unwrap(), 100_010);
    }

    #[test]
    fn test_non_monotonic_large_units() {
        assert_eq!(kind_of("一万一万"), ErrorKind::NonMonotonicUnit);
        assert_eq!(kind_of("一万一億"), ErrorKind::NonMonotonicUnit);
        assert_eq!(kind_of("百万千"), ErrorKind::NonMonotonicUnit);
        assert_eq!(parse("百万一千").unwrap(), 1_001_000);
        assert_eq!(parse("一万一千").unwrap(), 11_000);
        assert_eq!(parse("千万").unwrap(), 10_000_000);
        assert_eq!(parse("一億千万").unwrap(), 110_000_000);
        assert_eq!(parse("二兆千五百億").unwrap(), 2_150_000_000_000);
        assert_eq!(kind_of("一億千"), ErrorKind::NonMonotonicUnit);

        let err = parse("百万千").unwrap_err();
        assert_eq!(err.position, Some(2));

        let err = parse("一万二万").unwrap_err();
        assert_eq!(err.position, Some(3));
    }

    #[test]
    fn test_overflow() {
        // 正 (10^40) does not fit
        assert_eq!(kind_of("一正"), ErrorKind::Overflow);
        // Positional beyond u128
        assert_eq!(kind_of(&"9".repeat(40)), ErrorKind::Overflow);
        // Fits u128 but not i128
        assert_eq!(kind_of("二百澗"), ErrorKind::Overflow);
    }

    #[test]
    fn test_i128_extremes() {
        let max = i128::MAX.to_string();
        assert_eq!(parse(&max).unwrap(), i128::MAX);

        let min = i128::MIN.to_string();
        assert_eq!(parse(&min).unwrap(), i128::MIN);
    }

    #[test]
    fn test_fraction_rejected_by_integer_grammar() {
        let err = parse("三・一四").unwrap_err();
        assert_eq!(err.kind, ErrorKind::FractionNotAllowed);
        assert_eq!(err.position, Some(1));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_decimal("三・一四").unwrap(), Decimal::new(314, 2));
        assert_eq!(parse_decimal("マイナス〇・五").unwrap(), Decimal::new(-5, 1));
        assert_eq!(parse_decimal("1万2345.5").unwrap(), Decimal::new(123_455, 1));
        assert_eq!(parse_decimal(".5").unwrap(), Decimal::new(5, 1));
        assert_eq!(parse_decimal("5.").unwrap(), Decimal::from(5));
        assert_eq!(parse_decimal("十二").unwrap(), Decimal::from(12));
    }

    #[test]
    fn test_decimal_errors() {
        let err = parse_decimal(".").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedGroup);

        let err = parse_decimal("一・十").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedGroup);
        assert_eq!(err.position, Some(2));

        let err = parse_decimal("一・二・三").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedGroup);

        let long = format!("0.{}", "1".repeat(29));
        assert_eq!(parse_decimal(&long).unwrap_err().kind, ErrorKind::Overflow);
    }

    #[test]
    fn test_empty_tokens() {
        let err = parse_tokens(&[], &ParseOptions::default(), false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyInput);
    }
}
