//! Dictionary-backed spell checking and interactive correction.
//!
//! The engine is a single pass over tokenized text: load a word list,
//! split the input into alternating word and separator tokens, flag
//! word tokens missing from the dictionary, rank similar dictionary
//! entries as suggestions, and let a [`resolver::Resolver`] pick the
//! replacement for each flagged token.
//!
//! # Architecture
//!
//! - [`dictionary`] -- word list loading and case-insensitive lookup
//! - [`tokenizer`] -- lossless word/separator tokenization
//! - [`suggest`] -- similarity ranking of correction candidates
//! - [`resolver`] -- replacement selection strategies (console, auto)
//! - [`pipeline`] -- tying it together over a whole text

use std::io;
use std::path::PathBuf;

pub mod dictionary;
pub mod pipeline;
pub mod resolver;
pub mod suggest;
pub mod tokenizer;

/// Error type for file-backed operations.
///
/// Each variant names the path involved so callers can tell a missing
/// word list apart from a missing input text, rather than both
/// degrading silently to an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum SpeltError {
    #[error("failed to read word list '{}': {source}", path.display())]
    Dictionary { path: PathBuf, source: io::Error },

    #[error("failed to read input text '{}': {source}", path.display())]
    Input { path: PathBuf, source: io::Error },

    #[error("failed to write output '{}': {source}", path.display())]
    Output { path: PathBuf, source: io::Error },
}
