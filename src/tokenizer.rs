//! Word tokenization: raw text to a sequence of normalized tokens.

/// Normalized word unit extracted from text: ASCII letters and apostrophes,
/// folded to lowercase.
pub type Token = String;

/// Returns `true` for the characters that may appear inside a word.
#[inline]
#[must_use]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '\''
}

/// Splits text into normalized word tokens.
///
/// A single forward scan classifies each character as word (ASCII letter or
/// apostrophe) or delimiter; every maximal word-character run becomes one
/// token, folded to ASCII lowercase. Digits, other punctuation, and
/// whitespace never appear in a token and never produce an empty one. Any
/// input string is valid; empty input yields an empty sequence.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if is_word_char(ch) {
            current.push(ch.to_ascii_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
