//! `dictionary-cli`: look up and record entries in a JSON dictionary file.
//!
//! ```text
//! dictionary-cli lookup ilé
//! dictionary-cli add ajá --pos noun --eng dog --example "Ajá náà gbó."
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonkeep::logging::{init_logging_with_config, parse_level, LogConfig};
use jsonkeep::{render_entry, Dictionary, Entry, InsertResult, SafeJsonStore, DEFAULT_DATA_FILE};
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(name = "dictionary-cli")]
#[command(author, version, about = "Look up words in a JSON dictionary", long_about = None)]
struct Args {
    /// Set the log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lookup a word
    Lookup {
        /// Word to lookup
        word: String,

        /// Path to JSON data file
        #[arg(long, default_value = DEFAULT_DATA_FILE)]
        data_file: PathBuf,
    },

    /// Add a word, replacing any existing entry
    Add {
        /// Word to add
        word: String,

        /// Part of speech
        #[arg(long)]
        pos: String,

        /// English meaning (repeatable)
        #[arg(long = "eng", required = true)]
        meanings: Vec<String>,

        /// Usage example (repeatable)
        #[arg(long = "example")]
        examples: Vec<String>,

        /// Path to JSON data file
        #[arg(long, default_value = DEFAULT_DATA_FILE)]
        data_file: PathBuf,
    },

    /// List every headword
    List {
        /// Path to JSON data file
        #[arg(long, default_value = DEFAULT_DATA_FILE)]
        data_file: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = parse_level(&args.log_level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{}', using 'warn'", args.log_level);
        Level::WARN
    });
    init_logging_with_config(LogConfig::new(level))?;

    let store = SafeJsonStore::default();

    match args.command {
        Command::Lookup { word, data_file } => {
            debug!(data_file = %data_file.display(), "lookup");
            let dict = Dictionary::open(store, data_file);
            let entry = dict
                .lookup(&word)
                .with_context(|| format!("failed to look up '{}'", word))?;

            match entry {
                Some(entry) => print!("{}", render_entry(&entry)),
                None => println!("No entry for: '{}'", word),
            }
        }
        Command::Add {
            word,
            pos,
            meanings,
            examples,
            data_file,
        } => {
            let dict = Dictionary::open(store, data_file);
            let entry = Entry {
                word: word.clone(),
                pos: Some(pos),
                meanings,
                examples,
            };
            let result = dict
                .add(entry)
                .with_context(|| format!("failed to save '{}'", word))?;

            match result {
                InsertResult::Inserted => println!("Added '{}' to {}", word, dict.path().display()),
                InsertResult::Replaced => {
                    println!("Replaced '{}' in {}", word, dict.path().display())
                }
            }
        }
        Command::List { data_file } => {
            let dict = Dictionary::open(store, data_file);
            for word in dict.words().context("failed to read dictionary")? {
                println!("{}", word);
            }
        }
    }

    Ok(())
}
