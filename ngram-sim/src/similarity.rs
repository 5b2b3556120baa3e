//! Shared n-grams and Dice-coefficient similarity between texts.
use std::hash::Hash;

use hashbrown::HashSet;
use rayon::prelude::*;

use crate::errors::{NgramSimError, Result};
use crate::ngrams::{collect_char_ngrams, collect_ngrams, collect_word_ngrams, Granularity, Ngram};
use crate::tokens::{Tokenizer, Whitespace};

/// What to return when both compared texts yield no n-grams.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Two texts without n-grams are identical, with similarity 1.0.
    #[default]
    Identical,
    /// Fails with [`NgramSimError::DivisionUndefined`].
    Strict,
}

/// Comparer of texts in the space of n-gram sets.
///
/// The similarity of two texts is the Dice coefficient `2|A∩B| / (|A|+|B|)`
/// of their n-gram sets `A` and `B`.
/// If exactly one of the sets is empty, the similarity is 0.
pub struct NgramSimilarity<T = Whitespace> {
    granularity: Granularity,
    window_size: usize,
    tokenizer: T,
    empty_policy: EmptyPolicy,
    shows_progress: bool,
}

impl NgramSimilarity {
    /// Creates an instance splitting texts on whitespace.
    ///
    /// # Arguments
    ///
    /// * `granularity` - Level at which n-grams are taken.
    /// * `window_size` - The n in n-gram (must be more than 0).
    pub fn new(granularity: Granularity, window_size: usize) -> Result<Self> {
        NgramSimError::check_window_size(window_size)?;
        Ok(Self {
            granularity,
            window_size,
            tokenizer: Whitespace,
            empty_policy: EmptyPolicy::default(),
            shows_progress: false,
        })
    }
}

impl<T> NgramSimilarity<T>
where
    T: Tokenizer,
{
    /// Replaces the word boundary policy.
    pub fn tokenizer<U>(self, tokenizer: U) -> NgramSimilarity<U>
    where
        U: Tokenizer,
    {
        NgramSimilarity {
            granularity: self.granularity,
            window_size: self.window_size,
            tokenizer,
            empty_policy: self.empty_policy,
            shows_progress: self.shows_progress,
        }
    }

    /// Sets the behavior for comparing two texts without n-grams.
    pub fn empty_policy(mut self, empty_policy: EmptyPolicy) -> Self {
        self.empty_policy = empty_policy;
        self
    }

    /// Logs the progress of batch comparisons?
    pub fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Gets the granularity.
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Gets the window size.
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// N-grams of a text in order of appearance, duplicates included.
    pub fn ngrams<'a>(&self, text: &'a str) -> Vec<Ngram<'a>> {
        collect_ngrams(text, self.granularity, self.window_size, &self.tokenizer)
    }

    /// Distinct n-grams of a text.
    pub fn ngram_set<'a>(&self, text: &'a str) -> HashSet<Ngram<'a>> {
        self.ngrams(text).into_iter().collect()
    }

    /// N-grams found in both texts.
    pub fn matches<'a>(&self, text1: &'a str, text2: &'a str) -> HashSet<Ngram<'a>> {
        intersection(self.ngram_set(text1), self.ngram_set(text2))
    }

    /// Computes the similarity of two texts in the range of [0,1].
    ///
    /// # Errors
    ///
    /// [`NgramSimError::DivisionUndefined`] if both texts yield no n-grams
    /// under [`EmptyPolicy::Strict`].
    pub fn similarity(&self, text1: &str, text2: &str) -> Result<f64> {
        let score = dice(
            &self.ngram_set(text1),
            &self.ngram_set(text2),
            self.empty_policy,
        )?;
        tracing::debug!(
            granularity = %self.granularity,
            window_size = self.window_size,
            score,
            "compared two texts"
        );
        Ok(score)
    }

    /// Computes the similarity of every pair of texts, in input order.
    pub fn similarities<S1, S2>(&self, pairs: &[(S1, S2)]) -> Result<Vec<f64>>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        let mut scores = Vec::with_capacity(pairs.len());
        for (i, (text1, text2)) in pairs.iter().enumerate() {
            if self.shows_progress && (i + 1) % 1000 == 0 {
                tracing::info!("Processed {} pairs...", i + 1);
            }
            scores.push(dice(
                &self.ngram_set(text1.as_ref()),
                &self.ngram_set(text2.as_ref()),
                self.empty_policy,
            )?);
        }
        Ok(scores)
    }

    /// Computes the similarity of every pair of texts in parallel, in input order.
    pub fn similarities_in_parallel<S1, S2>(&self, pairs: &[(S1, S2)]) -> Result<Vec<f64>>
    where
        T: Sync,
        S1: AsRef<str> + Sync,
        S2: AsRef<str> + Sync,
    {
        if self.shows_progress {
            tracing::info!("Comparing {} pairs in parallel...", pairs.len());
        }
        pairs
            .par_iter()
            .map(|(text1, text2)| {
                dice(
                    &self.ngram_set(text1.as_ref()),
                    &self.ngram_set(text2.as_ref()),
                    self.empty_policy,
                )
            })
            .collect()
    }

    /// Searches for all pairs of documents whose similarity is at least `min_similarity`,
    /// returning triplets of the left-side index, the right-side index, and the similarity.
    /// Triplets are sorted by the indices, and the left-side index is always the smaller.
    pub fn similar_pairs<D>(
        &self,
        documents: &[D],
        min_similarity: f64,
    ) -> Result<Vec<(usize, usize, f64)>>
    where
        D: AsRef<str>,
    {
        let mut sets = Vec::with_capacity(documents.len());
        for (i, doc) in documents.iter().enumerate() {
            if self.shows_progress && (i + 1) % 1000 == 0 {
                tracing::info!("Processed {} documents...", i + 1);
            }
            sets.push(self.ngram_set(doc.as_ref()));
        }
        let mut results = vec![];
        for (i, set1) in sets.iter().enumerate() {
            for (j, set2) in sets.iter().enumerate().skip(i + 1) {
                let score = dice(set1, set2, self.empty_policy)?;
                if score >= min_similarity {
                    results.push((i, j, score));
                }
            }
        }
        Ok(results)
    }

    /// Parallel version of [`Self::similar_pairs`] with the same results.
    pub fn similar_pairs_in_parallel<D>(
        &self,
        documents: &[D],
        min_similarity: f64,
    ) -> Result<Vec<(usize, usize, f64)>>
    where
        T: Sync,
        D: AsRef<str> + Sync,
    {
        if self.shows_progress {
            tracing::info!("Extracting n-grams from {} documents...", documents.len());
        }
        let sets: Vec<_> = documents
            .par_iter()
            .map(|doc| self.ngram_set(doc.as_ref()))
            .collect();
        if self.shows_progress {
            let num_docs = sets.len();
            tracing::info!(
                "Comparing {} pairs of documents...",
                num_docs * num_docs.saturating_sub(1) / 2
            );
        }
        let sets = &sets;
        (0..sets.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                (i + 1..sets.len()).filter_map(move |j| {
                    match dice(&sets[i], &sets[j], self.empty_policy) {
                        Ok(score) if score < min_similarity => None,
                        result => Some(result.map(|score| (i, j, score))),
                    }
                })
            })
            .collect()
    }
}

/// N-grams found in both texts, at the given granularity, splitting on whitespace.
///
/// # Errors
///
/// [`NgramSimError::InvalidWindowSize`] if `n` is 0.
pub fn matches<'a>(
    text1: &'a str,
    text2: &'a str,
    granularity: Granularity,
    n: usize,
) -> Result<HashSet<Ngram<'a>>> {
    Ok(NgramSimilarity::new(granularity, n)?.matches(text1, text2))
}

/// Similarity of two texts at the given granularity, splitting on whitespace.
/// Two texts without n-grams have similarity 1.0.
///
/// # Errors
///
/// [`NgramSimError::InvalidWindowSize`] if `n` is 0.
pub fn similarity(text1: &str, text2: &str, granularity: Granularity, n: usize) -> Result<f64> {
    NgramSimilarity::new(granularity, n)?.similarity(text1, text2)
}

/// Character-level n-grams found in both texts.
///
/// # Errors
///
/// [`NgramSimError::InvalidWindowSize`] if `n` is 0.
pub fn char_matches<'a>(text1: &'a str, text2: &'a str, n: usize) -> Result<HashSet<&'a str>> {
    NgramSimError::check_window_size(n)?;
    Ok(intersection(
        collect_char_ngrams(text1, n, &Whitespace).into_iter().collect(),
        collect_char_ngrams(text2, n, &Whitespace).into_iter().collect(),
    ))
}

/// Word-level n-grams found in both texts.
///
/// # Errors
///
/// [`NgramSimError::InvalidWindowSize`] if `n` is 0.
pub fn word_matches<'a>(
    text1: &'a str,
    text2: &'a str,
    n: usize,
) -> Result<HashSet<Vec<&'a str>>> {
    NgramSimError::check_window_size(n)?;
    Ok(intersection(
        collect_word_ngrams(text1, n, &Whitespace).into_iter().collect(),
        collect_word_ngrams(text2, n, &Whitespace).into_iter().collect(),
    ))
}

/// Character-level similarity of two texts.
///
/// # Errors
///
/// [`NgramSimError::InvalidWindowSize`] if `n` is 0.
pub fn char_similarity(text1: &str, text2: &str, n: usize) -> Result<f64> {
    similarity(text1, text2, Granularity::Char, n)
}

/// Word-level similarity of two texts.
///
/// # Errors
///
/// [`NgramSimError::InvalidWindowSize`] if `n` is 0.
pub fn word_similarity(text1: &str, text2: &str, n: usize) -> Result<f64> {
    similarity(text1, text2, Granularity::Word, n)
}

fn intersection<G>(set1: HashSet<G>, set2: HashSet<G>) -> HashSet<G>
where
    G: Hash + Eq,
{
    let (small, large) = if set1.len() <= set2.len() {
        (set1, set2)
    } else {
        (set2, set1)
    };
    small.into_iter().filter(|g| large.contains(g)).collect()
}

fn dice<G>(set1: &HashSet<G>, set2: &HashSet<G>, empty_policy: EmptyPolicy) -> Result<f64>
where
    G: Hash + Eq,
{
    let total = set1.len() + set2.len();
    if total == 0 {
        return match empty_policy {
            EmptyPolicy::Identical => Ok(1.),
            EmptyPolicy::Strict => Err(NgramSimError::DivisionUndefined),
        };
    }
    let shared = set1.intersection(set2).count();
    Ok(2. * shared as f64 / total as f64)
}
