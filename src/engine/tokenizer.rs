// ============================================================================
// Tokenizer
// Turns numeral text into classified tokens, enforcing the character set
// ============================================================================

use crate::domain::{NumeralToken, ParseOptions};
use crate::lexicon::{self, Lexeme, Script, TokenKind, MINUS_WORD, PLUS_WORD};
use crate::numeric::{ErrorKind, NumeralError, NumeralResult};
use smallvec::SmallVec;

/// Token buffer; typical numerals fit inline.
pub type Tokens = SmallVec<[NumeralToken; 16]>;

/// Classify every character of `text`.
///
/// Positions are character indices into `text`. Fails with
/// `UnknownCharacter` on the first character the lexicon does not know or
/// that `options` forbid.
pub fn tokenize(text: &str, options: &ParseOptions) -> NumeralResult<Tokens> {
    let mut tokens = Tokens::new();
    let mut rest = text;
    let mut position = 0;

    while let Some(ch) = rest.chars().next() {
        if let Some((kind, word)) = sign_word(rest) {
            tokens.push(NumeralToken::new(kind, Script::Symbol, position));
            rest = &rest[word.len()..];
            position += word.chars().count();
            continue;
        }

        let lexeme = lexicon::lookup(ch).ok_or_else(|| {
            NumeralError::at(
                ErrorKind::UnknownCharacter,
                position,
                format!("'{}' is not a numeral character", ch),
            )
        })?;
        check_permitted(ch, lexeme, position, options)?;

        tokens.push(NumeralToken::new(lexeme.kind, lexeme.script, position));
        rest = &rest[ch.len_utf8()..];
        position += 1;
    }

    Ok(tokens)
}

fn sign_word(rest: &str) -> Option<(TokenKind, &'static str)> {
    if rest.starts_with(MINUS_WORD) {
        Some((TokenKind::Minus, MINUS_WORD))
    } else if rest.starts_with(PLUS_WORD) {
        Some((TokenKind::Plus, PLUS_WORD))
    } else {
        None
    }
}

fn check_permitted(
    ch: char,
    lexeme: Lexeme,
    position: usize,
    options: &ParseOptions,
) -> NumeralResult<()> {
    let reason = match lexeme {
        Lexeme {
            script: Script::Arabic,
            ..
        } if !options.allow_arabic => "Arabic digits are not accepted",
        Lexeme {
            script: Script::Daiji,
            ..
        } if !options.allow_daiji => "formal numerals are not accepted",
        Lexeme {
            kind: TokenKind::Separator,
            ..
        } if !options.allow_separators => "digit separators are not accepted",
        _ => return Ok(()),
    };

    Err(NumeralError::at(
        ErrorKind::UnknownCharacter,
        position,
        format!("'{}': {}", ch, reason),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::SmallUnit;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text, &ParseOptions::default())
            .unwrap()
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_kanji() {
        assert_eq!(
            kinds("二百三十四"),
            vec![
                TokenKind::Digit(2),
                TokenKind::SmallUnit(SmallUnit::Hundred),
                TokenKind::Digit(3),
                TokenKind::SmallUnit(SmallUnit::Ten),
                TokenKind::Digit(4),
            ]
        );
    }

    #[test]
    fn test_tokenize_sign_words() {
        let tokens = tokenize("マイナス五", &ParseOptions::default()).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Minus);
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].kind, TokenKind::Digit(5));
        assert_eq!(tokens[1].position, 4);

        assert_eq!(kinds("プラス1"), vec![TokenKind::Plus, TokenKind::Digit(1)]);
    }

    #[test]
    fn test_positions_are_char_indices() {
        let tokens = tokenize("1万2", &ParseOptions::default()).unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_unknown_character() {
        let err = tokenize("三個", &ParseOptions::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownCharacter);
        assert_eq!(err.position, Some(1));
    }

    #[test]
    fn test_options_restrict_character_set() {
        let strict = ParseOptions::strict();

        let err = tokenize("3千", &strict).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownCharacter);
        assert_eq!(err.position, Some(0));

        let err = tokenize("壱万", &strict).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownCharacter);

        let err = tokenize("一、〇〇〇", &strict).unwrap_err();
        assert_eq!(err.position, Some(1));

        assert!(tokenize("三千", &strict).is_ok());
    }
}
