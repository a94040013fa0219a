pub mod config;
pub mod pipeline_config;
pub mod pipeline;
pub mod glossary; // Cross-call dedup + lookup over extracted records

use std::io::Read;
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use glossary::{Glossary, GlossaryError};
use pipeline::extraction::{
    extract_with_fallback, AcronymExtractor, ExtractionError, FallbackExtractor,
};
use pipeline_config::ExtractorConfig;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Glossary error: {0}")]
    Glossary(#[from] GlossaryError),

    #[error("Usage: {0}")]
    Usage(String),
}

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Text file to read; stdin when absent.
    pub input: Option<PathBuf>,
    /// Glossary file to merge results into.
    pub glossary: Option<PathBuf>,
}

impl CliArgs {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, CliError> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--glossary" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--glossary needs a path".into()))?;
                    parsed.glossary = Some(PathBuf::from(path));
                }
                "--default-glossary" => parsed.glossary = Some(config::default_glossary_path()),
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown flag {flag}")));
                }
                _ if parsed.input.is_some() => {
                    return Err(CliError::Usage("only one input file is accepted".into()));
                }
                _ => parsed.input = Some(PathBuf::from(arg)),
            }
        }
        Ok(parsed)
    }
}

pub fn run() {
    // Logs go to stderr; stdout carries the JSON result.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    if let Err(e) = CliArgs::parse(std::env::args().skip(1)).and_then(|args| run_cli(&args)) {
        tracing::error!(error = %e, "Acronym extraction failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Read input, extract with fallback, print JSON, optionally merge into a glossary.
pub fn run_cli(args: &CliArgs) -> Result<(), CliError> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let config = ExtractorConfig::from_env();
    let engine = AcronymExtractor::new(config.clone())?;
    let fallback = FallbackExtractor::new(config)?;
    let outcome = extract_with_fallback(&engine, &fallback, &text);
    tracing::info!(
        path = %outcome.path,
        candidates = outcome.candidates.len(),
        "Extraction finished"
    );

    println!("{}", serde_json::to_string_pretty(&outcome.candidates)?);

    if let Some(path) = &args.glossary {
        let mut glossary = Glossary::load(path)?;
        let report = glossary.merge(outcome.candidates);
        glossary.save(path)?;
        tracing::info!(
            path = %path.display(),
            added = report.added_count(),
            skipped = report.skipped,
            "Glossary updated"
        );
    }

    Ok(())
}
