//! Splitting text into word-like tokens.
//!
//! Tokens are borrowed slices of the input text, so n-grams built on top of
//! them never copy the text.

/// A word boundary policy.
///
/// Implementors must return non-empty tokens in left-to-right order.
/// Plain functions `fn(&str) -> Vec<&str>` implement this trait too.
pub trait Tokenizer {
    /// Splits `text` into tokens.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<&str>,
{
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self(text)
    }
}

/// Splits on runs of Unicode whitespace. This is the default policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Whitespace;

impl Tokenizer for Whitespace {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }
}

/// Splits on a single delimiter character, dropping empty tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimiter(pub char);

impl Tokenizer for Delimiter {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(self.0).filter(|t| !t.is_empty()).collect()
    }
}

/// Splits on whitespace and emits every punctuation character as its own token.
///
/// Yields the same tokens as `tokenize(&space_punctuate(text))`, but borrowed
/// from `text`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Punctuation;

impl Tokenizer for Punctuation {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut tokens = vec![];
        for word in text.split_whitespace() {
            let mut start = 0;
            for (i, c) in word.char_indices() {
                if is_punctuation(c) {
                    if start < i {
                        tokens.push(&word[start..i]);
                    }
                    start = i + c.len_utf8();
                    tokens.push(&word[i..start]);
                }
            }
            if start < word.len() {
                tokens.push(&word[start..]);
            }
        }
        tokens
    }
}

/// Returns tokens taking whitespace as word boundaries.
///
/// ```
/// assert_eq!(
///     ngram_sim::tokenize("This is not a test."),
///     vec!["This", "is", "not", "a", "test."]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    Whitespace.tokenize(text)
}

/// Surrounds every character that is neither alphanumeric nor whitespace with
/// single spaces. Unicode-aware.
///
/// ```
/// assert_eq!(
///     ngram_sim::space_punctuate("This is not a test."),
///     "This is not a test . "
/// );
/// ```
pub fn space_punctuate(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len());
    for c in text.chars() {
        if is_punctuation(c) {
            spaced.push(' ');
            spaced.push(c);
            spaced.push(' ');
        } else {
            spaced.push(c);
        }
    }
    spaced
}

#[inline(always)]
fn is_punctuation(c: char) -> bool {
    !(c.is_alphanumeric() || c.is_whitespace())
}
