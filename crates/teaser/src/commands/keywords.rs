//! Keywords command — list the most frequent non-stopword tokens.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use teaser_core::config::Config;
use teaser_core::{Keyword, KeywordExtractor};

use super::read_input_file;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Maximum number of keywords (defaults to the configured limit).
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Print the keywords of a file with their counts and weights.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, limit = ?args.limit, "executing keywords command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let stopwords = config
        .load_stopwords()
        .context("failed to load stopwords")?;
    let table = KeywordExtractor::new(&stopwords)
        .with_limit(args.limit.unwrap_or(config.keyword_limit))
        .extract(&content);
    let keywords: &[Keyword] = table.as_slice();

    if global_json {
        println!("{}", serde_json::to_string_pretty(keywords)?);
        return Ok(());
    }

    let width = keywords.iter().map(|k| k.word.len()).max().unwrap_or(0);
    for keyword in keywords {
        println!(
            "{}  {:>4}  {}",
            format!("{:<width$}", keyword.word).bold(),
            keyword.count,
            format!("{:.4}", keyword.weight).dimmed(),
        );
    }

    Ok(())
}
