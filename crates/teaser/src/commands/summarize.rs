//! Summarize command — extract the best sentences of a document.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use teaser_core::config::Config;
use teaser_core::{Summarizer, SummarizerOptions, SummaryReport};

use super::{read_input_file, read_stdin};

/// Arguments for the `summarize` subcommand.
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Text file to summarize (reads stdin when omitted).
    #[arg(conflicts_with = "url")]
    pub file: Option<Utf8PathBuf>,

    /// Fetch and summarize the article at URL.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Title used for scoring (defaults to the file stem).
    #[arg(long, conflicts_with = "url")]
    pub title: Option<String>,

    /// Number of sentences to keep.
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub sentences: Option<u64>,

    /// Show the score breakdown of each sentence.
    #[arg(long)]
    pub scores: bool,
}

/// Summarize a file, stdin, or a web article.
#[instrument(name = "cmd_summarize", skip_all, fields(file = ?args.file, url = ?args.url))]
pub fn cmd_summarize(
    args: SummarizeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(sentences = ?args.sentences, scores = args.scores, "executing summarize command");

    let mut summarizer = config
        .summarizer()
        .context("failed to load stopwords")?;
    if let Some(n) = args.sentences {
        let options = SummarizerOptions {
            summary_sentences: usize::try_from(n).context("sentence count out of range")?,
            ..*summarizer.options()
        };
        summarizer = summarizer.with_options(options);
    }

    let mut report = if let Some(ref url) = args.url {
        fetch_report(&summarizer, url, config.fetch_timeout_secs)?
    } else {
        let (title, content) = match args.file {
            Some(ref path) => {
                let content = read_input_file(path, max_input_bytes)?;
                let title = args
                    .title
                    .clone()
                    .unwrap_or_else(|| path.file_stem().unwrap_or_default().to_string());
                (title, content)
            }
            None => (args.title.clone().unwrap_or_default(), read_stdin(max_input_bytes)?),
        };
        summarizer.summarize_report(&title, &content)
    };

    if !args.scores {
        for sentence in &mut report.sentences {
            sentence.features = None;
        }
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for sentence in &report.sentences {
        println!("{}", sentence.text.trim());
        if let Some(f) = sentence.features {
            println!(
                "  {} total {:.3}  title {:.3}  length {:.3}  position {:.3}  sbs {:.3}  dbs {:.3}",
                format!("#{}", sentence.position).dimmed(),
                f.total,
                f.title,
                f.length,
                f.position,
                f.sbs,
                f.dbs,
            );
        }
    }

    Ok(())
}

#[cfg(feature = "fetch")]
fn fetch_report(
    summarizer: &Summarizer,
    url: &str,
    timeout_secs: Option<u64>,
) -> anyhow::Result<SummaryReport> {
    use std::time::Duration;
    use teaser_core::HttpFetcher;

    let fetcher = match timeout_secs {
        Some(secs) => HttpFetcher::with_timeout(Duration::from_secs(secs)),
        None => HttpFetcher::new(),
    }
    .context("failed to build HTTP client")?;

    summarizer
        .summarize_url_report(&fetcher, url)
        .with_context(|| format!("no summary available for {url}"))
}

#[cfg(not(feature = "fetch"))]
fn fetch_report(
    _summarizer: &Summarizer,
    url: &str,
    _timeout_secs: Option<u64>,
) -> anyhow::Result<SummaryReport> {
    anyhow::bail!("cannot fetch {url}: teaser was built without the `fetch` feature")
}
