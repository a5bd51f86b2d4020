//! `summarizer-cli`: placeholder summarizer.
//!
//! ```text
//! summarizer-cli "Some text to summarize..."
//! ```

use anyhow::Result;
use clap::Parser;
use jsonkeep::logging::{init_logging_with_config, parse_level, LogConfig};
use jsonkeep::summarize::{summary_line, DEFAULT_SUMMARY_CHARS};
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(name = "summarizer-cli")]
#[command(author, version, about = "Summarize text (placeholder: truncates)", long_about = None)]
struct Args {
    /// Text to summarize
    text: Option<String>,

    /// Characters to keep before truncating
    #[arg(long, default_value_t = DEFAULT_SUMMARY_CHARS)]
    max_chars: usize,

    /// Set the log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = parse_level(&args.log_level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{}', using 'warn'", args.log_level);
        Level::WARN
    });
    init_logging_with_config(LogConfig::new(level))?;

    debug!(
        chars = args.text.as_deref().map(|t| t.chars().count()),
        max_chars = args.max_chars,
        "summarizing"
    );
    println!("{}", summary_line(args.text.as_deref(), args.max_chars));

    Ok(())
}
