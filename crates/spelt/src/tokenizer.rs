// Lossless word/separator tokenization.
//
// The whole pipeline leans on one property: concatenating the produced
// tokens in order reproduces the input byte-for-byte. Corrections then
// only ever touch word tokens, so separators survive round-trip
// untouched.

use spelt_core::token::{Token, TokenKind};

/// Whether a character belongs to a word run.
///
/// Word runs are alphanumeric-or-underscore, Unicode-aware. Everything
/// else (whitespace, punctuation, symbols, emoji) forms separator runs.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into an alternating sequence of maximal word and
/// separator runs, covering the entire input with no gaps or overlaps.
///
/// Empty input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_word = None;

    for (idx, c) in text.char_indices() {
        let word = is_word_char(c);
        match in_word {
            None => in_word = Some(word),
            Some(prev) if prev == word => {}
            Some(prev) => {
                tokens.push(make_token(prev, &text[start..idx]));
                start = idx;
                in_word = Some(word);
            }
        }
    }

    if let Some(prev) = in_word {
        tokens.push(make_token(prev, &text[start..]));
    }

    tokens
}

fn make_token(is_word: bool, text: &str) -> Token {
    if is_word {
        Token::word(text)
    } else {
        Token::separator(text)
    }
}

/// Concatenate a token sequence back into a single string.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
