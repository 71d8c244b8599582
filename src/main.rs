//! # wordvocab
//!
//! Command-line front end over a stored vocabulary: train on text, encode text to ids,
//! decode ids to text, list the vocabulary, or reset it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use wordvocab_core::config::{self, TokenizerConfig};
use wordvocab_core::data::{load_corpus, Corpus};
use wordvocab_core::store::FileStore;
use wordvocab_core::tokenizer::{Tokenizer, WordTokenizer};

#[derive(Debug, Parser)]
#[command(name = "wordvocab", version, about = "Train, encode and decode with a growable word vocabulary")]
struct Cli {
    /// Vocabulary file [default: $WORDVOCAB_STORE_PATH or wordvocab.json]
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add the tokens of the given texts and corpus files to the vocabulary
    Train {
        /// Texts to learn from
        texts: Vec<String>,
        /// Corpus file, one text per line (repeatable)
        #[arg(short, long = "file")]
        files: Vec<PathBuf>,
    },
    /// Split text into tokens and print their ids
    Encode {
        text: String,
        /// Learn the text's tokens before encoding
        #[arg(long)]
        train: bool,
        /// Print the encoding as JSON
        #[arg(long)]
        json: bool,
    },
    /// Turn comma-separated ids back into text
    Decode {
        /// e.g. "4, 5, 6"
        ids: String,
    },
    /// List every token with its id
    Vocab {
        /// Print the stored `{ token: id }` mapping as JSON
        #[arg(long)]
        json: bool,
    },
    /// Forget every learned token
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::from_env().context("reading configuration")?;
    let store_path = match cli.store {
        Some(path) => path,
        None => config::store_path_from_env().context("reading store path")?,
    };
    let mut tokenizer = open(config, store_path)?;

    match cli.command {
        Command::Train { texts, files } => {
            let mut corpus = Corpus::from_lines(texts.iter().map(String::as_str));
            for file in &files {
                let loaded = load_corpus(file)
                    .with_context(|| format!("reading corpus {}", file.display()))?;
                corpus.extend(loaded);
            }
            let added = tokenizer
                .train(corpus.texts())
                .context("saving vocabulary")?;
            println!(
                "added {added} new tokens ({} total)",
                tokenizer.vocab_size()
            );
        }
        Command::Encode { text, train, json } => {
            let encoding = if train {
                tokenizer
                    .train_and_encode(&text)
                    .context("saving vocabulary")?
            } else {
                tokenizer.encode(&text)
            };
            if json {
                println!("{}", serde_json::to_string(&encoding)?);
            } else {
                println!("IDs: {}", join(&encoding.ids));
                println!("Tokens: {}", encoding.tokens.join(", "));
            }
        }
        Command::Decode { ids } => {
            println!("{}", tokenizer.decode_lossy(&parse_ids(&ids)));
        }
        Command::Vocab { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(tokenizer.vocab())?);
            } else {
                for (id, token) in tokenizer.vocab().iter() {
                    println!("{id}\t{token}");
                }
                println!("{} tokens", tokenizer.vocab_size());
            }
        }
        Command::Reset => {
            let tokenizer = tokenizer.reset().context("clearing vocabulary")?;
            println!(
                "vocabulary reset ({} special tokens)",
                tokenizer.vocab_size()
            );
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open(config: TokenizerConfig, path: PathBuf) -> Result<WordTokenizer<FileStore>> {
    let display = path.display().to_string();
    WordTokenizer::new(config, FileStore::new(path))
        .with_context(|| format!("opening vocabulary {display}"))
}

/// Parses a comma-separated id list. Fragments that are not integers are dropped.
fn parse_ids(input: &str) -> Vec<i64> {
    input
        .split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn join(ids: &[usize]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
