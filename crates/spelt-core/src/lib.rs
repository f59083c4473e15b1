//! Leaf types and pure utilities shared across the spelt workspace.
//!
//! - [`token`] -- the word/separator token model produced by the tokenizer
//! - [`case`] -- case pattern detection and re-application
//! - [`distance`] -- Levenshtein edit distance

pub mod case;
pub mod distance;
pub mod token;
