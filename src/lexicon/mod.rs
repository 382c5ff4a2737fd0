// ============================================================================
// Numeral Lexicon
// Static character tables for digits, units, separators and markers
// ============================================================================
//
// Every function here is a pure mapping: the same character always yields the
// same lexeme. Unknown characters yield `None` and the tokenizer turns that
// into an `UnknownCharacter` error with the character's position.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Multiplier characters for 10, 100 and 1000 within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SmallUnit {
    /// 十
    Ten,
    /// 百
    Hundred,
    /// 千
    Thousand,
}

impl SmallUnit {
    /// All small units, most significant first.
    pub const DESCENDING: [SmallUnit; 3] = [SmallUnit::Thousand, SmallUnit::Hundred, SmallUnit::Ten];

    #[inline]
    pub const fn multiplier(self) -> u128 {
        match self {
            SmallUnit::Ten => 10,
            SmallUnit::Hundred => 100,
            SmallUnit::Thousand => 1000,
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            SmallUnit::Ten => '十',
            SmallUnit::Hundred => '百',
            SmallUnit::Thousand => '千',
        }
    }

    /// Formal form written by the formatter. 佰 and 仟 are read but not
    /// written; formal output keeps 百 and 千.
    #[inline]
    pub const fn as_daiji(self) -> char {
        match self {
            SmallUnit::Ten => '拾',
            SmallUnit::Hundred => '百',
            SmallUnit::Thousand => '千',
        }
    }
}

/// Semantic role of one lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// 0-9
    Digit(u8),
    SmallUnit(SmallUnit),
    /// Power-of-10,000 rank: 万 = 1, 億 = 2, 兆 = 3, ...
    LargeUnit(u8),
    /// Digit grouping mark, carries no value
    Separator,
    Minus,
    Plus,
    DecimalPoint,
}

/// Which writing system a character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Script {
    /// Everyday kanji numerals (一, 十, 万, 〇)
    Kanji,
    /// Formal numerals (壱, 拾, 萬, 零)
    Daiji,
    /// Half- or full-width Arabic digits
    Arabic,
    /// Signs, separators and decimal points
    Symbol,
}

/// Token template produced by [`lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub script: Script,
}

impl Lexeme {
    const fn new(kind: TokenKind, script: Script) -> Self {
        Self { kind, script }
    }
}

/// Word-form minus marker.
pub const MINUS_WORD: &str = "マイナス";
/// Word-form plus marker.
pub const PLUS_WORD: &str = "プラス";

/// Zero as written in everyday text.
pub const KANJI_ZERO: char = '〇';
/// Zero as written in formal text.
pub const DAIJI_ZERO: char = '零';

/// Default decimal point for kanji output (中黒).
pub const KANJI_DECIMAL_POINT: char = '・';

const KANJI_DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];
const DAIJI_DIGITS: [char; 10] = ['零', '壱', '弐', '参', '四', '五', '六', '七', '八', '九'];

/// Large-unit characters by rank, starting at rank 1.
const LARGE_UNITS: [char; 12] = [
    '万', '億', '兆', '京', '垓', '秭', '穣', '溝', '澗', '正', '載', '極',
];

/// Look up a single character.
pub fn lookup(ch: char) -> Option<Lexeme> {
    use Script as S;
    use TokenKind as T;

    let lexeme = match ch {
        // Everyday kanji digits
        '〇' => Lexeme::new(T::Digit(0), S::Kanji),
        '一' => Lexeme::new(T::Digit(1), S::Kanji),
        '二' => Lexeme::new(T::Digit(2), S::Kanji),
        '三' => Lexeme::new(T::Digit(3), S::Kanji),
        '四' => Lexeme::new(T::Digit(4), S::Kanji),
        '五' => Lexeme::new(T::Digit(5), S::Kanji),
        '六' => Lexeme::new(T::Digit(6), S::Kanji),
        '七' => Lexeme::new(T::Digit(7), S::Kanji),
        '八' => Lexeme::new(T::Digit(8), S::Kanji),
        '九' => Lexeme::new(T::Digit(9), S::Kanji),

        // Formal digits, including older variants
        '零' => Lexeme::new(T::Digit(0), S::Daiji),
        '壱' | '壹' | '弌' => Lexeme::new(T::Digit(1), S::Daiji),
        '弐' | '貳' | '弍' => Lexeme::new(T::Digit(2), S::Daiji),
        '参' | '參' | '弎' => Lexeme::new(T::Digit(3), S::Daiji),
        '肆' => Lexeme::new(T::Digit(4), S::Daiji),
        '伍' => Lexeme::new(T::Digit(5), S::Daiji),
        '陸' => Lexeme::new(T::Digit(6), S::Daiji),
        '柒' | '漆' => Lexeme::new(T::Digit(7), S::Daiji),
        '捌' => Lexeme::new(T::Digit(8), S::Daiji),
        '玖' => Lexeme::new(T::Digit(9), S::Daiji),

        '0'..='9' => Lexeme::new(T::Digit(ch as u8 - b'0'), S::Arabic),
        '０'..='９' => Lexeme::new(T::Digit((ch as u32 - '０' as u32) as u8), S::Arabic),

        '十' => Lexeme::new(T::SmallUnit(SmallUnit::Ten), S::Kanji),
        '百' => Lexeme::new(T::SmallUnit(SmallUnit::Hundred), S::Kanji),
        '千' => Lexeme::new(T::SmallUnit(SmallUnit::Thousand), S::Kanji),
        '拾' => Lexeme::new(T::SmallUnit(SmallUnit::Ten), S::Daiji),
        '佰' | '陌' => Lexeme::new(T::SmallUnit(SmallUnit::Hundred), S::Daiji),
        '仟' | '阡' => Lexeme::new(T::SmallUnit(SmallUnit::Thousand), S::Daiji),

        '萬' => Lexeme::new(T::LargeUnit(1), S::Daiji),
        '𥝱' => Lexeme::new(T::LargeUnit(6), S::Kanji),
        _ => match LARGE_UNITS.iter().position(|&c| c == ch) {
            Some(idx) => Lexeme::new(T::LargeUnit(idx as u8 + 1), S::Kanji),
            None => return lookup_symbol(ch),
        },
    };
    Some(lexeme)
}

fn lookup_symbol(ch: char) -> Option<Lexeme> {
    let kind = match ch {
        ',' | '，' | '、' | '_' => TokenKind::Separator,
        '-' | '－' | '−' => TokenKind::Minus,
        '+' | '＋' => TokenKind::Plus,
        '.' | '．' | '・' => TokenKind::DecimalPoint,
        _ => return None,
    };
    Some(Lexeme::new(kind, Script::Symbol))
}

/// Half- or full-width Arabic digit.
#[inline]
pub fn is_arabic_digit(ch: char) -> bool {
    matches!(ch, '0'..='9' | '０'..='９')
}

/// Formal numeral character (壱, 拾, 萬, ...).
#[inline]
pub fn is_daiji(ch: char) -> bool {
    matches!(lookup(ch), Some(Lexeme { script: Script::Daiji, .. }))
}

/// Whether `ch` is read as a decimal point.
#[inline]
pub fn is_decimal_point(ch: char) -> bool {
    matches!(lookup(ch), Some(Lexeme { kind: TokenKind::DecimalPoint, .. }))
}

/// Everyday kanji for a digit 0-9.
#[inline]
pub fn kanji_digit(digit: u8) -> char {
    KANJI_DIGITS[(digit % 10) as usize]
}

/// Formal kanji for a digit 0-9.
#[inline]
pub fn daiji_digit(digit: u8) -> char {
    DAIJI_DIGITS[(digit % 10) as usize]
}

/// Character for a large-unit rank (1 = 万). `daiji` selects 萬 for rank 1.
pub fn large_unit_char(rank: u8, daiji: bool) -> Option<char> {
    if daiji && rank == 1 {
        return Some('萬');
    }
    let idx = (rank as usize).checked_sub(1)?;
    LARGE_UNITS.get(idx).copied()
}
