mod common;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use ngram_sim::{EmptyPolicy, Granularity, NgramSimilarity};

use common::TokenizerKind;

#[derive(Parser, Debug)]
#[clap(
    name = "ngram-pairs",
    about = "A program to find all pairs of similar documents by n-gram similarity."
)]
struct Args {
    /// File path to a document file, one document per line.
    #[clap(short = 'i', long)]
    document_path: PathBuf,

    /// Minimum similarity of reported pairs, in the range of [0,1].
    #[clap(short = 'm', long)]
    min_similarity: f64,

    /// Granularity of n-grams: char (within words) or word.
    #[clap(short = 'g', long, default_value = "char")]
    granularity: Granularity,

    /// Window size of n-grams (must be more than 0).
    #[clap(short = 'n', long, default_value = "3")]
    window_size: usize,

    /// Word boundary policy: whitespace or punct.
    #[clap(short = 't', long, default_value = "whitespace")]
    tokenizer: TokenizerKind,

    /// Fails if two documents both yield no n-grams, instead of scoring them 1.
    #[clap(long)]
    strict: bool,

    /// Disables parallel comparison.
    #[clap(short = 'p', long)]
    disable_parallel: bool,
}

fn main() -> anyhow::Result<()> {
    common::init_logging();
    let args = Args::parse();

    anyhow::ensure!(
        (0. ..=1.).contains(&args.min_similarity),
        "min similarity must be in the range of [0,1], but got {}",
        args.min_similarity
    );

    let empty_policy = if args.strict {
        EmptyPolicy::Strict
    } else {
        EmptyPolicy::Identical
    };
    let comparer = NgramSimilarity::new(args.granularity, args.window_size)?
        .tokenizer(args.tokenizer)
        .empty_policy(empty_policy)
        .shows_progress(true);

    let documents: Vec<String> = BufReader::new(
        File::open(&args.document_path)
            .with_context(|| format!("failed to open {}", args.document_path.display()))?,
    )
    .lines()
    .collect::<Result<_, _>>()?;
    tracing::info!("Loaded {} documents", documents.len());

    let start = Instant::now();
    let results = if args.disable_parallel {
        comparer.similar_pairs(&documents, args.min_similarity)?
    } else {
        comparer.similar_pairs_in_parallel(&documents, args.min_similarity)?
    };
    tracing::info!(
        "Found {} similar pairs in {} sec",
        results.len(),
        start.elapsed().as_secs_f64()
    );

    println!("i,j,sim");
    for (i, j, sim) in results {
        println!("{i},{j},{sim}");
    }

    Ok(())
}
