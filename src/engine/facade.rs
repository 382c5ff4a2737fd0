// ============================================================================
// Facade
// The public parse/format entry points used by Rust callers and host bindings
// ============================================================================

use super::formatter;
use super::parser::{parse_tokens, ParsedNumber};
use super::tokenizer::tokenize;
use crate::domain::{FormatOptions, ParseOptions};
use crate::numeric::{ErrorKind, NumeralError, NumeralResult, NumericValue};
use rust_decimal::Decimal;
use tracing::debug;

/// Parse integer numeral text with default options.
///
/// # Example
/// ```
/// assert_eq!(japanese_number::parse("一万二千三百四十五").unwrap(), 12345);
/// assert_eq!(japanese_number::parse("3千").unwrap(), 3000);
/// ```
pub fn parse(text: &str) -> NumeralResult<i128> {
    parse_with(text, &ParseOptions::default())
}

/// Parse integer numeral text with explicit options.
///
/// # Errors
/// `FractionNotAllowed` if the text has a decimal point, plus every error
/// kind described on [`ErrorKind`].
pub fn parse_with(text: &str, options: &ParseOptions) -> NumeralResult<i128> {
    run_parse(text, options, false).and_then(|parsed| parsed.to_integer())
}

/// Parse numeral text that may carry a fraction (`三・一四`, `1万2345.5`).
pub fn parse_decimal(text: &str) -> NumeralResult<Decimal> {
    parse_decimal_with(text, &ParseOptions::default())
}

pub fn parse_decimal_with(text: &str, options: &ParseOptions) -> NumeralResult<Decimal> {
    run_parse(text, options, true).and_then(|parsed| parsed.to_decimal())
}

/// Parse to an integer when possible, or a decimal when the text carries a
/// fraction.
pub fn parse_value(text: &str) -> NumeralResult<NumericValue> {
    let parsed = run_parse(text, &ParseOptions::default(), true)?;
    if parsed.has_fraction {
        parsed.to_decimal().map(NumericValue::Decimal)
    } else {
        parsed.to_integer().map(NumericValue::Integer)
    }
}

/// Render an integer in everyday kanji.
///
/// # Example
/// ```
/// assert_eq!(japanese_number::format(234), "二百三十四");
/// assert_eq!(japanese_number::format(0), "〇");
/// ```
pub fn format(value: i128) -> String {
    formatter::format_integer(value, &FormatOptions::default())
}

pub fn format_with(value: i128, options: &FormatOptions) -> String {
    formatter::format_integer(value, options)
}

/// Render a decimal in everyday kanji (`3.14` → `三・一四`).
pub fn format_decimal(value: Decimal) -> String {
    formatter::format_decimal(value, &FormatOptions::default())
}

pub fn format_decimal_with(value: Decimal, options: &FormatOptions) -> String {
    formatter::format_decimal(value, options)
}

/// Render either kind of value.
pub fn format_value(value: NumericValue, options: &FormatOptions) -> String {
    match value {
        NumericValue::Integer(v) => formatter::format_integer(v, options),
        NumericValue::Decimal(d) => formatter::format_decimal(d, options),
    }
}

// ============================================================================
// Input Validation
// ============================================================================

/// Validate the options, trim, check emptiness and length, tokenize, then
/// hand off to the grammar.
///
/// Error positions are rebased onto the caller's untrimmed text.
fn run_parse(
    text: &str,
    options: &ParseOptions,
    allow_fraction: bool,
) -> NumeralResult<ParsedNumber> {
    debug!(input_len = text.len(), allow_fraction, "parsing numeral text");

    options
        .validate()
        .map_err(|msg| NumeralError::new(ErrorKind::InvalidOptions, msg))?;

    let result = validate_input(text, options).and_then(|(trimmed, offset)| {
        tokenize(trimmed, options)
            .and_then(|tokens| parse_tokens(&tokens, options, allow_fraction))
            .map_err(|err| err.offset_by(offset))
    });

    match &result {
        Ok(parsed) => debug!(
            negative = parsed.negative,
            has_fraction = parsed.has_fraction,
            "numeral parsed"
        ),
        Err(err) => debug!(kind = %err.kind, position = ?err.position, "numeral parse failed"),
    }
    result
}

fn validate_input<'a>(text: &'a str, options: &ParseOptions) -> NumeralResult<(&'a str, usize)> {
    let offset = text.chars().take_while(|c| c.is_whitespace()).count();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NumeralError::empty_input());
    }

    let len = trimmed.chars().count();
    if len > options.max_len {
        return Err(NumeralError::new(
            ErrorKind::InputTooLong,
            format!("{} characters exceeds the limit of {}", len, options.max_len),
        ));
    }

    Ok((trimmed, offset))
}
