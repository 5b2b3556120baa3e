mod common;

use clap::Parser;
use ngram_sim::{EmptyPolicy, Granularity, NgramSimilarity};

use common::TokenizerKind;

#[derive(Parser, Debug)]
#[clap(
    name = "ngram-similarity",
    about = "A program to compute the n-gram similarity of two texts."
)]
struct Args {
    /// Left-side text.
    #[clap(long)]
    text1: String,

    /// Right-side text.
    #[clap(long)]
    text2: String,

    /// Granularity of n-grams: char (within words) or word.
    #[clap(short = 'g', long, default_value = "char")]
    granularity: Granularity,

    /// Window size of n-grams (must be more than 0).
    #[clap(short = 'n', long, default_value = "3")]
    window_size: usize,

    /// Word boundary policy: whitespace or punct.
    #[clap(short = 't', long, default_value = "whitespace")]
    tokenizer: TokenizerKind,

    /// Fails if both texts yield no n-grams, instead of reporting 1.
    #[clap(long)]
    strict: bool,

    /// Prints the shared n-grams after the similarity, one per line.
    #[clap(short = 'm', long)]
    show_matches: bool,
}

fn main() -> anyhow::Result<()> {
    common::init_logging();
    let args = Args::parse();

    let empty_policy = if args.strict {
        EmptyPolicy::Strict
    } else {
        EmptyPolicy::Identical
    };
    let comparer = NgramSimilarity::new(args.granularity, args.window_size)?
        .tokenizer(args.tokenizer)
        .empty_policy(empty_policy);

    let score = comparer.similarity(&args.text1, &args.text2)?;
    println!("{score}");

    if args.show_matches {
        let mut matches: Vec<_> = comparer
            .matches(&args.text1, &args.text2)
            .iter()
            .map(ToString::to_string)
            .collect();
        matches.sort();
        for ngram in matches {
            println!("{ngram}");
        }
    }

    Ok(())
}
