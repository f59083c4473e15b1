// Correction pipeline: tokenize, flag, resolve, reassemble.

use std::fs;
use std::path::Path;

use spelt_core::case::{apply_case, detect_case};
use spelt_core::token::Token;

use crate::SpeltError;
use crate::dictionary::Dictionary;
use crate::resolver::Resolver;
use crate::suggest::{SuggestConfig, Suggestion, suggest};
use crate::tokenizer::{detokenize, tokenize};

/// Run the correction pass over a token sequence.
///
/// Word tokens that are checkable and absent from the dictionary are
/// ranked for suggestions and handed to the resolver; its answer
/// replaces the token text. Everything else passes through untouched,
/// so the output sequence has the same shape as the input: same token
/// count, identical separators.
pub fn correct_tokens(
    tokens: Vec<Token>,
    dictionary: &Dictionary,
    config: &SuggestConfig,
    resolver: &mut dyn Resolver,
) -> Vec<Token> {
    tokens
        .into_iter()
        .map(|token| {
            if !token.is_checkable() || dictionary.contains(&token.text) {
                return token;
            }

            let mut suggestions = suggest(&token.text, dictionary, config);
            if config.match_case {
                recase(&token.text, &mut suggestions);
            }

            Token::word(resolver.resolve(&token.text, &suggestions))
        })
        .collect()
}

/// Correct a whole text: tokenize, run the pass, concatenate.
pub fn correct_text(
    text: &str,
    dictionary: &Dictionary,
    config: &SuggestConfig,
    resolver: &mut dyn Resolver,
) -> String {
    let corrected = correct_tokens(tokenize(text), dictionary, config, resolver);
    detokenize(&corrected)
}

/// Re-case suggestions to the case pattern of the misspelled word, so
/// a flagged "Helo" offers "Hello" rather than "hello".
fn recase(word: &str, suggestions: &mut [Suggestion]) {
    let pattern = detect_case(word);
    for suggestion in suggestions {
        suggestion.value = apply_case(pattern, &suggestion.value);
    }
}

/// Read an input text file in full.
pub fn read_input(path: impl AsRef<Path>) -> Result<String, SpeltError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| SpeltError::Input {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the corrected text, creating or overwriting the file.
pub fn write_output(path: impl AsRef<Path>, text: &str) -> Result<(), SpeltError> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| SpeltError::Output {
        path: path.to_path_buf(),
        source,
    })
}
