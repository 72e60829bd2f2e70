use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing::info;

use mimeo::config::Config;
use mimeo::similarity;
use mimeo::text::tokenize::{CjkSegmentation, Tokenizer};
use mimeo::{input, output};

/// Mimeo: plagiarism similarity scoring for text documents.
///
/// Compares an original document against a suspected copy using cosine
/// similarity over token frequency vectors, and writes the percentage
/// (two decimals) to the output file.
#[derive(Parser)]
#[command(name = "mimeo", version, about)]
struct Cli {
    /// Path to the original document
    original: PathBuf,

    /// Path to the suspected copy
    candidate: PathBuf,

    /// Path the similarity percentage is written to
    output: PathBuf,

    /// CJK segmentation mode (overrides MIMEO_CJK_MODE)
    #[arg(long, value_enum)]
    cjk: Option<CjkMode>,

    /// Drop common English/Chinese stop words before counting
    #[arg(long)]
    filter_stopwords: bool,

    /// Print the full comparison report as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Suppress the terminal report (the result file is still written)
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CjkMode {
    /// Overlapping two-character shingles (default)
    Bigram,
    /// One token per ideograph
    Char,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mimeo=info")),
        )
        .init();

    let cli = Cli::parse();

    // Env-derived defaults, overridden by CLI flags
    let config = Config::load()?;
    let mut options = config.tokenizer_options();
    if let Some(mode) = cli.cjk {
        options.cjk = match mode {
            CjkMode::Bigram => CjkSegmentation::Bigram,
            CjkMode::Char => CjkSegmentation::Character,
        };
    }
    if cli.filter_stopwords {
        options.filter_stopwords = true;
    }

    let original = input::read_document(&cli.original)?;
    let candidate = input::read_document(&cli.candidate)?;
    info!(
        original_chars = original.chars().count(),
        candidate_chars = candidate.chars().count(),
        "Documents loaded"
    );

    let tokenizer = Tokenizer::new(options);
    let report = similarity::compare(&original, &candidate, &tokenizer);
    info!(percent = report.percent, "Comparison complete");

    output::write_result(&cli.output, report.percent)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !cli.quiet {
        output::terminal::display_report(&report, &cli.original, &cli.candidate);
        println!(
            "\n{}",
            format!("Result written to: {}", cli.output.display()).dimmed()
        );
    }

    Ok(())
}
