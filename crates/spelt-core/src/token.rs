// Token model shared by the tokenizer and the correction pipeline.

/// The two kinds of token the tokenizer produces.
///
/// A `Word` is a maximal run of word characters (alphanumeric or
/// underscore); a `Separator` is a maximal run of everything else,
/// including all whitespace and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Separator,
}

/// A slice of the source text, tagged with its kind.
///
/// Tokens carry their exact source text: concatenating the `text` of a
/// token sequence in order reproduces the original input byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The exact text of this token as it appeared in the source.
    pub text: String,
}

impl Token {
    /// Create a word token.
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Word,
            text: text.into(),
        }
    }

    /// Create a separator token.
    pub fn separator(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Separator,
            text: text.into(),
        }
    }

    /// Whether this is a word token.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Whether this token is eligible for spell checking.
    ///
    /// Only tokens consisting entirely of alphabetic characters are
    /// checkable. Digits, underscores and mixed alphanumeric runs pass
    /// through the pipeline unchecked.
    pub fn is_checkable(&self) -> bool {
        self.kind == TokenKind::Word
            && !self.text.is_empty()
            && self.text.chars().all(char::is_alphabetic)
    }
}
