use crate::reading::token::{is_punctuation_char, Token};

/// Pads every non-word, non-whitespace character with spaces so that
/// punctuation ends up as standalone tokens. Numbers pass through untouched.
fn isolate_punctuation(text: &str) -> String {
    let mut padded = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if is_punctuation_char(c) {
            padded.push(' ');
            padded.push(c);
            padded.push(' ');
        } else {
            padded.push(c);
        }
    }
    padded
}

/// Normalizes raw text into a single-space separated string.
pub fn preprocess_text(text: &str) -> String {
    isolate_punctuation(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits text into display tokens.
///
/// Empty or whitespace-only input yields an empty vector; callers decide
/// whether that is an error.
pub fn tokenize_text(text: &str) -> Vec<Token> {
    isolate_punctuation(text)
        .split_whitespace()
        .map(Token::new)
        .collect()
}

pub fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
