// Replacement selection strategies.
//
// The pipeline does not care where replacement decisions come from; it
// hands a misspelled word and its ranked suggestions to a `Resolver`
// and substitutes whatever comes back. The console variant is the
// interactive default; the others exist for non-interactive runs and
// for tests.

use std::io::{BufRead, Write};

use crate::suggest::Suggestion;

/// Strategy for choosing a replacement for a misspelled word.
pub trait Resolver {
    /// Return the replacement for `word`, given ranked `suggestions`
    /// (best first, possibly empty). Returning `word` itself keeps the
    /// original text unchanged.
    fn resolve(&mut self, word: &str, suggestions: &[Suggestion]) -> String;
}

/// Interactive resolver: numbered menu on an output stream, choice read
/// from an input stream.
///
/// Generic over its streams so tests can script the exchange; the CLI
/// constructs it over locked stdin and stdout.
pub struct ConsoleResolver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleResolver<R, W> {
    /// Create a resolver over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Resolver for ConsoleResolver<R, W> {
    /// Prompt until a valid choice in `[0, N]` is entered.
    ///
    /// `0` keeps the original word, `1..=N` picks the corresponding
    /// suggestion. Non-numeric or out-of-range input is rejected with a
    /// message and re-prompted. End-of-input on the stream counts as
    /// keeping the original, so a closed stdin cannot wedge the loop.
    fn resolve(&mut self, word: &str, suggestions: &[Suggestion]) -> String {
        if suggestions.is_empty() {
            let _ = writeln!(self.output, "No suggestions found for '{word}'.");
            return word.to_string();
        }

        let _ = writeln!(self.output, "Did you mean '{word}'?");
        for (i, suggestion) in suggestions.iter().enumerate() {
            let _ = writeln!(self.output, "{}. {}", i + 1, suggestion.value);
        }
        let _ = writeln!(self.output, "0. Keep original word");

        loop {
            let _ = write!(self.output, "Enter your choice (0-{}): ", suggestions.len());
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return word.to_string(),
                Ok(_) => {}
            }

            match line.trim().parse::<usize>() {
                Ok(0) => return word.to_string(),
                Ok(n) if n <= suggestions.len() => return suggestions[n - 1].value.clone(),
                Ok(_) => {
                    let _ = writeln!(
                        self.output,
                        "Invalid choice. Please enter a number within the valid range."
                    );
                }
                Err(_) => {
                    let _ = writeln!(self.output, "Invalid input. Please enter a number.");
                }
            }
        }
    }
}

/// Non-interactive resolver that always takes the top suggestion,
/// falling back to the original word when there is none.
pub struct AcceptFirst;

impl Resolver for AcceptFirst {
    fn resolve(&mut self, word: &str, suggestions: &[Suggestion]) -> String {
        suggestions
            .first()
            .map(|s| s.value.clone())
            .unwrap_or_else(|| word.to_string())
    }
}

/// Non-interactive resolver that never substitutes anything.
pub struct KeepOriginal;

impl Resolver for KeepOriginal {
    fn resolve(&mut self, word: &str, _suggestions: &[Suggestion]) -> String {
        word.to_string()
    }
}
