//! Character- and word-level n-gram similarity between texts.
//!
//! Texts are split into tokens by a [`Tokenizer`] (whitespace by default), n-grams are
//! taken within tokens ([`Granularity::Char`]) or across tokens ([`Granularity::Word`]),
//! and two texts are compared by the Dice coefficient of their n-gram sets.
//!
//! ```
//! use ngram_sim::{char_ngrams, char_similarity, word_ngrams, Whitespace};
//!
//! assert_eq!(
//!     char_ngrams("This is not a test!", 3, &Whitespace).unwrap(),
//!     vec!["Thi", "his", "is", "not", "a", "tes", "est", "st!"]
//! );
//! assert_eq!(
//!     word_ngrams("This is not a test!", 3, &Whitespace).unwrap(),
//!     vec![
//!         vec!["This", "is", "not"],
//!         vec!["is", "not", "a"],
//!         vec!["not", "a", "test!"],
//!     ]
//! );
//! assert_eq!(
//!     char_similarity("This is not a test!", "This is a test!", 3).unwrap(),
//!     14. / 15.
//! );
//! ```
//!
//! Many documents can be compared at once with [`NgramSimilarity`]:
//!
//! ```
//! use ngram_sim::{Granularity, NgramSimilarity};
//!
//! let documents = vec![
//!     "Welcome to Jimbocho, the town of books and curry!",
//!     "Welcome to Jimbocho, the city of books and curry!",
//!     "We welcome you to Jimbocho, the town of books and curry.",
//! ];
//! let comparer = NgramSimilarity::new(Granularity::Word, 2).unwrap();
//! let results = comparer.similar_pairs_in_parallel(&documents, 0.7).unwrap();
//! assert_eq!(results, vec![(0, 1, 0.75)]);
//! ```
#![deny(missing_docs)]

pub mod errors;
pub mod ngrams;
pub mod similarity;
pub mod tokens;

pub(crate) mod shingling;

pub use errors::{NgramSimError, Result};
pub use ngrams::{char_ngrams, generate_ngrams, ngrams, word_ngrams, Granularity, Ngram};
pub use similarity::{
    char_matches, char_similarity, matches, similarity, word_matches, word_similarity,
    EmptyPolicy, NgramSimilarity,
};
pub use tokens::{space_punctuate, tokenize, Delimiter, Punctuation, Tokenizer, Whitespace};
