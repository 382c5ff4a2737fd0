// ============================================================================
// Numeral Formatter
// Base-10000 decomposition and rendering in each output style
// ============================================================================

use crate::domain::{FormatOptions, FormatStyle};
use crate::lexicon::{self, SmallUnit, DAIJI_ZERO, KANJI_ZERO};
use crate::numeric::{pow10, GROUP_BASE};
use arrayvec::ArrayVec;
use rust_decimal::Decimal;

/// A `u128` splits into at most ten base-10000 groups.
const MAX_GROUPS: usize = 10;

type Groups = ArrayVec<u16, MAX_GROUPS>;

/// Render an integer.
pub fn format_integer(value: i128, options: &FormatOptions) -> String {
    let mut out = String::new();
    if value < 0 {
        out.push_str(options.minus.as_str());
    }
    render_magnitude(value.unsigned_abs(), options.style, &mut out);
    out
}

/// Render a decimal: the integer part in the chosen style, then the decimal
/// point and each fractional digit.
pub fn format_decimal(value: Decimal, options: &FormatOptions) -> String {
    let value = value.normalize();
    let scale = value.scale();
    let mantissa = value.mantissa();
    let magnitude = mantissa.unsigned_abs();
    let divisor = pow10(scale);

    let mut out = String::new();
    if mantissa < 0 {
        out.push_str(options.minus.as_str());
    }
    render_magnitude(magnitude / divisor, options.style, &mut out);

    if scale > 0 {
        out.push(options.decimal_point());
        let digits = format!("{:0width$}", magnitude % divisor, width = scale as usize);
        for ch in digits.chars() {
            let digit = ch as u8 - b'0';
            out.push(digit_char(digit, options.style));
        }
    }
    out
}

fn digit_char(digit: u8, style: FormatStyle) -> char {
    match style {
        FormatStyle::Kanji | FormatStyle::Positional => lexicon::kanji_digit(digit),
        FormatStyle::Daiji => lexicon::daiji_digit(digit),
        FormatStyle::Mixed => (b'0' + digit) as char,
    }
}

fn render_magnitude(magnitude: u128, style: FormatStyle, out: &mut String) {
    if style == FormatStyle::Positional {
        for ch in magnitude.to_string().chars() {
            out.push(lexicon::kanji_digit(ch as u8 - b'0'));
        }
        return;
    }

    if magnitude == 0 {
        out.push(match style {
            FormatStyle::Daiji => DAIJI_ZERO,
            FormatStyle::Mixed => '0',
            _ => KANJI_ZERO,
        });
        return;
    }

    let groups = split_groups(magnitude);
    let leading_rank = groups.len() - 1;

    for (rank, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        match style {
            FormatStyle::Mixed => {
                out.push_str(&group.to_string());
            }
            FormatStyle::Daiji => render_group(group, true, true, out),
            _ => render_group(group, false, rank == leading_rank, out),
        }
        if rank > 0 {
            if let Some(unit) = lexicon::large_unit_char(rank as u8, style == FormatStyle::Daiji) {
                out.push(unit);
            }
        }
    }
}

/// Base-10000 groups, least significant first.
fn split_groups(mut magnitude: u128) -> Groups {
    let mut groups = Groups::new();
    while magnitude > 0 {
        groups.push((magnitude % GROUP_BASE) as u16);
        magnitude /= GROUP_BASE;
    }
    groups
}

/// Render one group (1-9999) with small units.
///
/// The "one" before a unit is dropped in everyday style (十, not 一十), except
/// before 千 in a group that follows a larger group (一万一千). The parser
/// rejects a bare 千 in a final group (百万千), so every such 千 keeps it.
fn render_group(group: u16, daiji: bool, leading: bool, out: &mut String) {
    let mut rest = group as u128;
    for unit in SmallUnit::DESCENDING {
        let digit = (rest / unit.multiplier()) as u8;
        rest %= unit.multiplier();
        if digit == 0 {
            continue;
        }

        let explicit_one = daiji || (unit == SmallUnit::Thousand && !leading);
        if digit != 1 || explicit_one {
            out.push(if daiji {
                lexicon::daiji_digit(digit)
            } else {
                lexicon::kanji_digit(digit)
            });
        }
        out.push(if daiji { unit.as_daiji() } else { unit.as_char() });
    }

    if rest > 0 {
        let digit = rest as u8;
        out.push(if daiji {
            lexicon::daiji_digit(digit)
        } else {
            lexicon::kanji_digit(digit)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MinusSign;

    fn kanji(value: i128) -> String {
        format_integer(value, &FormatOptions::default())
    }

    #[test]
    fn test_kanji_small_values() {
        assert_eq!(kanji(0), "〇");
        assert_eq!(kanji(1), "一");
        assert_eq!(kanji(10), "十");
        assert_eq!(kanji(11), "十一");
        assert_eq!(kanji(110), "百十");
        assert_eq!(kanji(234), "二百三十四");
        assert_eq!(kanji(1000), "千");
        assert_eq!(kanji(9999), "九千九百九十九");
    }

    #[test]
    fn test_kanji_large_units() {
        assert_eq!(kanji(10_000), "一万");
        assert_eq!(kanji(12_345), "一万二千三百四十五");
        assert_eq!(kanji(11_000), "一万一千");
        assert_eq!(kanji(20_000_000), "二千万");
        assert_eq!(kanji(10_000_000), "千万");
        assert_eq!(kanji(100_000_001), "一億一");
        assert_eq!(kanji(110_000_000), "一億一千万");
        assert_eq!(kanji(10i128.pow(16)), "一京");
    }

    #[test]
    fn test_kanji_extremes() {
        assert!(kanji(i128::MAX).starts_with("百七十澗"));
        assert!(kanji(i128::MIN).starts_with("マイナス百七十澗"));
    }

    #[test]
    fn test_negative() {
        assert_eq!(kanji(-5), "マイナス五");
        let ascii = FormatOptions::default().with_minus(MinusSign::Ascii);
        assert_eq!(format_integer(-5, &ascii), "-五");
        let wide = FormatOptions::default().with_minus(MinusSign::FullWidth);
        assert_eq!(format_integer(-5, &wide), "－五");
    }

    #[test]
    fn test_daiji() {
        let formal = FormatOptions::formal();
        assert_eq!(format_integer(0, &formal), "零");
        assert_eq!(format_integer(10, &formal), "壱拾");
        assert_eq!(format_integer(12_345, &formal), "壱萬弐千参百四拾五");
        assert_eq!(format_integer(100_000_000, &formal), "壱億");
    }

    #[test]
    fn test_positional() {
        let positional = FormatOptions::positional();
        assert_eq!(format_integer(0, &positional), "〇");
        assert_eq!(format_integer(2026, &positional), "二〇二六");
        assert_eq!(format_integer(-105, &positional), "マイナス一〇五");
    }

    #[test]
    fn test_mixed() {
        let mixed = FormatOptions::mixed();
        assert_eq!(format_integer(0, &mixed), "0");
        assert_eq!(format_integer(12_345_678, &mixed), "1234万5678");
        assert_eq!(format_integer(100_000_005, &mixed), "1億5");
        assert_eq!(format_integer(-30_000, &mixed), "-3万");
    }

    #[test]
    fn test_decimal() {
        let options = FormatOptions::default();
        assert_eq!(format_decimal(Decimal::new(314, 2), &options), "三・一四");
        assert_eq!(format_decimal(Decimal::new(-5, 1), &options), "マイナス〇・五");
        assert_eq!(format_decimal(Decimal::new(1200, 2), &options), "十二");
        assert_eq!(format_decimal(Decimal::new(105, 2), &options), "一・〇五");

        let mixed = FormatOptions::mixed();
        assert_eq!(
            format_decimal(Decimal::new(123_455, 1), &mixed),
            "1万2345.5"
        );

        let formal = FormatOptions::formal();
        assert_eq!(format_decimal(Decimal::new(25, 1), &formal), "弐・五");
    }

    #[test]
    fn test_split_groups() {
        assert_eq!(split_groups(0).as_slice(), &[] as &[u16]);
        assert_eq!(split_groups(12_345_678).as_slice(), &[5678, 1234]);
        assert_eq!(split_groups(u128::MAX).len(), MAX_GROUPS);
    }
}
