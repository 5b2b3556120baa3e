//! Criterion benchmarks for `ngram-sim`; see `benches/`.
