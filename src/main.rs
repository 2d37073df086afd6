//! Text annotation CLI.
//!
//! Reads text from a file, an argument or stdin, annotates it with the
//! library and prints the annotation as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use lexscan::{Dictionaries, Document, Lexicon, PatternRegistry, TextAnnotator};

/// Lexical annotation tool
///
/// Detects sensitive data, URLs, competitor names, emotion words,
/// emoticons, profanity and identity hate in text.
#[derive(Parser)]
#[command(name = "lexscan")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input text file ("-" or omitted reads stdin)
    #[arg(value_name = "FILE", conflicts_with_all = ["text", "url"])]
    input: Option<PathBuf>,

    /// Annotate this text instead of reading a file
    #[arg(short, long, value_name = "TEXT")]
    text: Option<String>,

    /// Display name recorded in the annotation
    #[arg(short, long, value_name = "NAME")]
    name: Option<String>,

    /// Locale selecting the competitor dictionary (competitors_<LOCALE>)
    #[arg(short, long, value_name = "LOCALE", default_value = "en")]
    locale: String,

    /// JSON file of dictionaries, e.g. {"competitors_en": ["Acme"]}
    #[arg(short, long, value_name = "FILE")]
    dictionaries: Option<PathBuf>,

    /// Lexicon data file replacing the bundled one
    #[arg(long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Only report whether URL is a standalone URL
    #[arg(long, value_name = "URL", conflicts_with = "text")]
    url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Builds the annotator from CLI configuration.
fn build_annotator(cli: &Cli) -> Result<TextAnnotator> {
    let patterns = PatternRegistry::global().context("Failed to compile pattern registry")?;

    let lexicon = match &cli.lexicon {
        Some(path) => Arc::new(
            Lexicon::load(path)
                .with_context(|| format!("Failed to load lexicon from {}", path.display()))?,
        ),
        None => Lexicon::bundled().context("Failed to load bundled lexicon")?,
    };

    let mut annotator = TextAnnotator::new(patterns, lexicon).with_locale(&cli.locale);

    if let Some(path) = &cli.dictionaries {
        let dictionaries = Dictionaries::load(path)
            .with_context(|| format!("Failed to load dictionaries from {}", path.display()))?;
        annotator = annotator.with_dictionaries(Arc::new(dictionaries));
    }

    Ok(annotator)
}

/// Resolves the text to annotate and a default display name.
fn read_input(text: Option<&str>, input: Option<&Path>) -> Result<(String, Option<String>)> {
    if let Some(text) = text {
        return Ok((text.to_string(), None));
    }

    match input {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned());
            Ok((text, name))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok((text, None))
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lexscan=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lexscan=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let annotator = build_annotator(&cli)?;

    if let Some(url) = &cli.url {
        let report = serde_json::json!({ "url": url, "is_url": annotator.is_url(url) });
        return print_json(&report, cli.pretty);
    }

    let (text, file_name) = read_input(cli.text.as_deref(), cli.input.as_deref())?;
    let mut document = Document::new(text);
    if let Some(name) = cli.name.clone().or(file_name) {
        document = document.with_name(name);
    }

    let annotation = annotator.annotate_document(document);
    let json = annotation
        .to_json()
        .context("Failed to serialize annotation")?;
    print_json(&json, cli.pretty)
}
