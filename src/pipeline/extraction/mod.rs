pub mod types;
pub mod normalize;
pub mod patterns;
pub mod classify;
pub mod validation;
pub mod confidence;
pub mod orchestrator;
pub mod fallback;
pub mod strategy;

pub use types::*;
pub use orchestrator::{default_extractor, extract, AcronymExtractor};
pub use fallback::FallbackExtractor;
pub use strategy::{extract_with_fallback, ExtractionPath, StrategyOutcome};

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ExtractionError {
    #[error("Pattern family {family} failed to compile: {source}")]
    Pattern {
        family: PatternFamily,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid extractor configuration: {0}")]
    Config(String),
}
