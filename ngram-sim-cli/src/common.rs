use std::io;
use std::str::FromStr;

use ngram_sim::{Punctuation, Tokenizer, Whitespace};
use tracing_subscriber::EnvFilter;

/// Word boundary policy selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenizerKind {
    Whitespace,
    Punct,
}

impl FromStr for TokenizerKind {
    type Err = &'static str;
    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "whitespace" => Ok(Self::Whitespace),
            "punct" => Ok(Self::Punct),
            _ => Err("Could not parse a tokenizer option"),
        }
    }
}

impl Tokenizer for TokenizerKind {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Self::Whitespace => Whitespace.tokenize(text),
            Self::Punct => Punctuation.tokenize(text),
        }
    }
}

/// Logs to the standard error output, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
