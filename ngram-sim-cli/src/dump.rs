mod common;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ngram_sim::{space_punctuate, Granularity, NgramSimilarity};

use common::TokenizerKind;

#[derive(Parser, Debug)]
#[clap(
    name = "ngram-dump",
    about = "A program to dump the n-grams of each line in a text."
)]
struct Args {
    /// File path to a text file. Reads the standard input if not given.
    #[clap(short = 'i', long)]
    text_path: Option<PathBuf>,

    /// Granularity of n-grams: char (within words) or word.
    #[clap(short = 'g', long, default_value = "char")]
    granularity: Granularity,

    /// Window size of n-grams (must be more than 0).
    #[clap(short = 'n', long, default_value = "3")]
    window_size: usize,

    /// Word boundary policy: whitespace or punct.
    #[clap(short = 't', long, default_value = "whitespace")]
    tokenizer: TokenizerKind,

    /// Surrounds punctuation with spaces before taking n-grams.
    #[clap(short = 'p', long)]
    space_punct: bool,
}

fn main() -> anyhow::Result<()> {
    common::init_logging();
    let args = Args::parse();

    let comparer =
        NgramSimilarity::new(args.granularity, args.window_size)?.tokenizer(args.tokenizer);

    let reader: Box<dyn BufRead> = match &args.text_path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    // One output line per input line, n-grams separated by tabs.
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in reader.lines() {
        let line = line?;
        let text = if args.space_punct {
            space_punctuate(&line)
        } else {
            line
        };
        let ngrams: Vec<_> = comparer
            .ngrams(&text)
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(out, "{}", ngrams.join("\t"))?;
    }
    out.flush()?;

    Ok(())
}
