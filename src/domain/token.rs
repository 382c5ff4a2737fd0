// ============================================================================
// Numeral Token
// One lexical unit of numeral text, tagged with its source position
// ============================================================================

use crate::lexicon::{Script, TokenKind};

/// A classified character (or the word-form sign マイナス/プラス).
///
/// Tokens are immutable once produced and live only for one parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralToken {
    pub kind: TokenKind,
    pub script: Script,

    /// Character index of the token's first character in the input
    pub position: usize,
}

impl NumeralToken {
    pub fn new(kind: TokenKind, script: Script, position: usize) -> Self {
        Self {
            kind,
            script,
            position,
        }
    }

    #[inline]
    pub fn is_digit(&self) -> bool {
        matches!(self.kind, TokenKind::Digit(_))
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self.kind, TokenKind::SmallUnit(_) | TokenKind::LargeUnit(_))
    }
}
