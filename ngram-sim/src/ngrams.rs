//! N-gram generation at character and word granularity.
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::errors::{NgramSimError, Result};
use crate::shingling::ShingleIter;
use crate::tokens::Tokenizer;

/// Level at which n-grams are taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// Characters within each word token.
    #[default]
    Char,
    /// Word tokens across the whole text.
    Word,
}

impl FromStr for Granularity {
    type Err = &'static str;
    fn from_str(granularity: &str) -> Result<Self, Self::Err> {
        match granularity {
            "char" => Ok(Self::Char),
            "word" => Ok(Self::Word),
            _ => Err("Could not parse a granularity option"),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Char => f.write_str("char"),
            Self::Word => f.write_str("word"),
        }
    }
}

/// An n-gram of either granularity, borrowing from its source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ngram<'a> {
    /// Consecutive characters of one token.
    Char(&'a str),
    /// Consecutive tokens.
    Word(Vec<&'a str>),
}

impl<'a> Ngram<'a> {
    /// Gets the number of elements (characters or tokens).
    pub fn len(&self) -> usize {
        match self {
            Self::Char(chars) => chars.chars().count(),
            Self::Word(words) => words.len(),
        }
    }

    /// Checks if the n-gram has no elements.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Char(chars) => chars.is_empty(),
            Self::Word(words) => words.is_empty(),
        }
    }

    /// Gets the granularity the n-gram was taken at.
    pub const fn granularity(&self) -> Granularity {
        match self {
            Self::Char(_) => Granularity::Char,
            Self::Word(_) => Granularity::Word,
        }
    }
}

impl fmt::Display for Ngram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Char(chars) => f.write_str(chars),
            Self::Word(words) => f.write_str(&words.join(" ")),
        }
    }
}

/// Raw n-grams of a sequence.
///
/// Windows of width `min(n, sequence.len())` are taken left to right, stepped by one.
/// A sequence no longer than `n` therefore yields itself as its only n-gram,
/// and an empty sequence yields none.
///
/// # Errors
///
/// [`NgramSimError::InvalidWindowSize`] if `n` is 0.
pub fn generate_ngrams<T>(sequence: &[T], n: usize) -> Result<Vec<&[T]>> {
    NgramSimError::check_window_size(n)?;
    Ok(ShingleIter::new(sequence, n).collect())
}

/// Word-level n-grams of a text.
///
/// If the text has at most `n` tokens, the only n-gram is the whole token sequence.
///
/// # Errors
///
/// [`NgramSimError::InvalidWindowSize`] if `n` is 0.
pub fn word_ngrams<'a, T>(text: &'a str, n: usize, tokenizer: &T) -> Result<Vec<Vec<&'a str>>>
where
    T: Tokenizer + ?Sized,
{
    NgramSimError::check_window_size(n)?;
    Ok(collect_word_ngrams(text, n, tokenizer))
}

/// Character-level n-grams from within the tokens of a text.
///
/// N-grams are never taken across token boundaries, so a token with at most `n`
/// characters contributes itself, shorter than `n`.
///
/// # Errors
///
/// [`NgramSimError::InvalidWindowSize`] if `n` is 0.
pub fn char_ngrams<'a, T>(text: &'a str, n: usize, tokenizer: &T) -> Result<Vec<&'a str>>
where
    T: Tokenizer + ?Sized,
{
    NgramSimError::check_window_size(n)?;
    Ok(collect_char_ngrams(text, n, tokenizer))
}

/// N-grams of a text at the given granularity.
///
/// # Errors
///
/// [`NgramSimError::InvalidWindowSize`] if `n` is 0.
pub fn ngrams<'a, T>(
    text: &'a str,
    granularity: Granularity,
    n: usize,
    tokenizer: &T,
) -> Result<Vec<Ngram<'a>>>
where
    T: Tokenizer + ?Sized,
{
    NgramSimError::check_window_size(n)?;
    Ok(collect_ngrams(text, granularity, n, tokenizer))
}

// The collectors below expect a validated window size.

pub(crate) fn collect_ngrams<'a, T>(
    text: &'a str,
    granularity: Granularity,
    n: usize,
    tokenizer: &T,
) -> Vec<Ngram<'a>>
where
    T: Tokenizer + ?Sized,
{
    match granularity {
        Granularity::Char => collect_char_ngrams(text, n, tokenizer)
            .into_iter()
            .map(Ngram::Char)
            .collect(),
        Granularity::Word => collect_word_ngrams(text, n, tokenizer)
            .into_iter()
            .map(Ngram::Word)
            .collect(),
    }
}

pub(crate) fn collect_word_ngrams<'a, T>(text: &'a str, n: usize, tokenizer: &T) -> Vec<Vec<&'a str>>
where
    T: Tokenizer + ?Sized,
{
    let tokens = tokenizer.tokenize(text);
    ShingleIter::new(&tokens, n)
        .map(|window| window.to_vec())
        .collect()
}

pub(crate) fn collect_char_ngrams<'a, T>(text: &'a str, n: usize, tokenizer: &T) -> Vec<&'a str>
where
    T: Tokenizer + ?Sized,
{
    let mut ngrams = vec![];
    let mut char_ranges: Vec<Range<usize>> = vec![];
    for token in tokenizer.tokenize(text) {
        char_ranges.clear();
        char_ranges.extend(token.char_indices().map(|(i, c)| i..i + c.len_utf8()));
        ngrams.extend(
            ShingleIter::new(&char_ranges, n)
                .map(move |ranges| &token[ranges[0].start..ranges[ranges.len() - 1].end]),
        );
    }
    ngrams
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tokens::{Delimiter, Punctuation, Whitespace};

    #[test]
    fn test_generate_ngrams() {
        let sequence = ['a', 'b', 'c', 'd'];
        assert_eq!(
            generate_ngrams(&sequence, 3).unwrap(),
            vec![&['a', 'b', 'c'][..], &['b', 'c', 'd'][..]]
        );
        assert_eq!(
            generate_ngrams(&sequence, 1).unwrap(),
            vec![&['a'][..], &['b'][..], &['c'][..], &['d'][..]]
        );
        assert_eq!(generate_ngrams(&sequence, 4).unwrap(), vec![&sequence[..]]);
        assert_eq!(generate_ngrams(&sequence, 10).unwrap(), vec![&sequence[..]]);
    }

    #[test]
    fn test_generate_ngrams_edges() {
        let empty: [u8; 0] = [];
        assert!(generate_ngrams(&empty, 3).unwrap().is_empty());
        assert_eq!(generate_ngrams(&[7], 1).unwrap(), vec![&[7][..]]);
        assert_eq!(generate_ngrams(&[7], 5).unwrap(), vec![&[7][..]]);
        assert_eq!(
            generate_ngrams(&[1, 2], 0),
            Err(NgramSimError::InvalidWindowSize(0))
        );
    }

    #[test]
    fn test_generate_ngrams_window_count() {
        let sequence: Vec<usize> = (0..20).collect();
        for len in 1..=sequence.len() {
            for n in 1..=len + 2 {
                let s = &sequence[..len];
                let width = n.min(len);
                let ngrams = generate_ngrams(s, n).unwrap();
                assert_eq!(ngrams.len(), len - width + 1);
                for (i, ngram) in ngrams.iter().enumerate() {
                    assert_eq!(*ngram, &s[i..i + width]);
                }
            }
        }
    }

    #[test]
    fn test_word_ngrams() {
        assert_eq!(
            word_ngrams("This is not a test!", 3, &Whitespace).unwrap(),
            vec![
                vec!["This", "is", "not"],
                vec!["is", "not", "a"],
                vec!["not", "a", "test!"]
            ]
        );
        assert_eq!(
            word_ngrams("Test!", 3, &Whitespace).unwrap(),
            vec![vec!["Test!"]]
        );
        assert_eq!(
            word_ngrams("a b", 3, &Whitespace).unwrap(),
            vec![vec!["a", "b"]]
        );
        assert!(word_ngrams("", 3, &Whitespace).unwrap().is_empty());
        assert_eq!(
            word_ngrams("a b", 0, &Whitespace),
            Err(NgramSimError::InvalidWindowSize(0))
        );
    }

    #[test]
    fn test_char_ngrams() {
        assert_eq!(
            char_ngrams("This is not a test!", 3, &Whitespace).unwrap(),
            vec!["Thi", "his", "is", "not", "a", "tes", "est", "st!"]
        );
        assert_eq!(
            char_ngrams("abc de", 1, &Whitespace).unwrap(),
            vec!["a", "b", "c", "d", "e"]
        );
        assert!(char_ngrams(" \n ", 2, &Whitespace).unwrap().is_empty());
        assert_eq!(
            char_ngrams("abc", 0, &Whitespace),
            Err(NgramSimError::InvalidWindowSize(0))
        );
    }

    #[test]
    fn test_char_ngrams_multibyte() {
        assert_eq!(
            char_ngrams("Нью-Йорк 東京都", 2, &Whitespace).unwrap(),
            vec!["Нь", "ью", "ю-", "-Й", "Йо", "ор", "рк", "東京", "京都"]
        );
    }

    #[test]
    fn test_char_ngrams_stay_within_tokens() {
        let text = "the quick brown fox jumps over the lazy dog";
        for n in 1..=6 {
            for ngram in char_ngrams(text, n, &Whitespace).unwrap() {
                assert!(!ngram.contains(' '));
                assert!(ngram.chars().count() <= n);
            }
        }
    }

    #[test]
    fn test_char_ngrams_slide_over_token() {
        let token = "sliding";
        let ngrams = char_ngrams(token, 3, &Whitespace).unwrap();
        assert_eq!(ngrams.len(), token.len() - 2);
        for (i, ngram) in ngrams.iter().enumerate() {
            assert_eq!(*ngram, &token[i..i + 3]);
        }
    }

    #[test]
    fn test_custom_tokenizers() {
        assert_eq!(
            char_ngrams("ab,cd", 2, &Delimiter(',')).unwrap(),
            vec!["ab", "cd"]
        );
        assert_eq!(
            word_ngrams("Hi, you.", 2, &Punctuation).unwrap(),
            vec![vec!["Hi", ","], vec![",", "you"], vec!["you", "."]]
        );
        let tokenizer: &dyn Tokenizer = &Whitespace;
        assert_eq!(word_ngrams("x y", 1, tokenizer).unwrap(), vec![vec!["x"], vec!["y"]]);
    }

    #[test]
    fn test_ngrams() {
        assert_eq!(
            ngrams("ab cd", Granularity::Char, 2, &Whitespace).unwrap(),
            vec![Ngram::Char("ab"), Ngram::Char("cd")]
        );
        assert_eq!(
            ngrams("ab cd", Granularity::Word, 2, &Whitespace).unwrap(),
            vec![Ngram::Word(vec!["ab", "cd"])]
        );
    }

    #[test]
    fn test_ngram() {
        let ngram = Ngram::Char("東京");
        assert_eq!(ngram.len(), 2);
        assert_eq!(ngram.granularity(), Granularity::Char);
        assert_eq!(ngram.to_string(), "東京");

        let ngram = Ngram::Word(vec!["not", "a", "test"]);
        assert_eq!(ngram.len(), 3);
        assert!(!ngram.is_empty());
        assert_eq!(ngram.granularity(), Granularity::Word);
        assert_eq!(ngram.to_string(), "not a test");
    }

    #[test]
    fn test_granularity() {
        assert_eq!("char".parse::<Granularity>(), Ok(Granularity::Char));
        assert_eq!("word".parse::<Granularity>(), Ok(Granularity::Word));
        assert!("line".parse::<Granularity>().is_err());
        assert_eq!(Granularity::Word.to_string(), "word");
    }
}
