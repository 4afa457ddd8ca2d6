/// A single display token produced by the tokenizer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Word characters are alphanumerics and underscore; anything else that is
/// not whitespace gets isolated into its own token.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub fn is_punctuation_char(c: char) -> bool {
    !is_word_char(c) && !c.is_whitespace()
}
