// Case pattern detection and re-application.
//
// Dictionary entries are stored lower-cased, so a suggestion for a
// capitalized token ("Helo") would otherwise come back as "hello".
// These helpers let the pipeline re-case suggestions to the pattern of
// the misspelled token before they are shown or substituted.

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "kitten".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Kitten".
    FirstUpper,
    /// Mixed case that does not fit the other patterns: "kiTten".
    Complex,
    /// All letters are uppercase: "KITTEN".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters are ignored when determining the pattern.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars().filter(|c| c.is_alphabetic());
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let first_uc = first.is_uppercase();
    let mut rest_lc = true;
    let mut all_uc = first_uc;

    for c in chars {
        if c.is_uppercase() {
            rest_lc = false;
        } else {
            all_uc = false;
        }
    }

    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Apply a case pattern to a word, returning the re-cased form.
///
/// - `NoLetters` / `Complex` -- returned unchanged (no meaningful
///   pattern to transfer).
/// - `AllLower` -- every letter lowercased.
/// - `AllUpper` -- every letter uppercased.
/// - `FirstUpper` -- first character uppercased, rest lowercased.
pub fn apply_case(pattern: CaseType, word: &str) -> String {
    match pattern {
        CaseType::NoLetters | CaseType::Complex => word.to_string(),
        CaseType::AllLower => word.to_lowercase(),
        CaseType::AllUpper => word.to_uppercase(),
        CaseType::FirstUpper => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.extend(chars.flat_map(char::to_lowercase));
                    out
                }
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_basic_patterns() {
        assert_eq!(detect_case("kitten"), CaseType::AllLower);
        assert_eq!(detect_case("Kitten"), CaseType::FirstUpper);
        assert_eq!(detect_case("KITTEN"), CaseType::AllUpper);
        assert_eq!(detect_case("kiTten"), CaseType::Complex);
        assert_eq!(detect_case("1234"), CaseType::NoLetters);
        assert_eq!(detect_case(""), CaseType::NoLetters);
    }

    #[test]
    fn single_uppercase_letter_is_all_upper() {
        // Matches the scanning rule: one letter, uppercase, no lowercase seen.
        assert_eq!(detect_case("I"), CaseType::AllUpper);
    }

    #[test]
    fn applies_patterns() {
        assert_eq!(apply_case(CaseType::FirstUpper, "hello"), "Hello");
        assert_eq!(apply_case(CaseType::AllUpper, "hello"), "HELLO");
        assert_eq!(apply_case(CaseType::AllLower, "HELLO"), "hello");
        assert_eq!(apply_case(CaseType::Complex, "hello"), "hello");
        assert_eq!(apply_case(CaseType::FirstUpper, ""), "");
    }

    #[test]
    fn round_trips_detected_case() {
        let recased = apply_case(detect_case("Koira"), "kissa");
        assert_eq!(recased, "Kissa");
    }
}
