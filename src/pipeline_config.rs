//! Extractor configuration.
//!
//! Limits that bound the cost of one extraction call and the provenance tag
//! stamped on every record. Defaults match the behavior of the engine with
//! no configuration at all; `from_env` lets a deployment tune them without
//! a rebuild.

use serde::{Deserialize, Serialize};

use crate::pipeline::extraction::patterns::DEFAULT_REGEX_SIZE_LIMIT;
use crate::pipeline::extraction::types::DEFAULT_PROVENANCE_TAG;
use crate::pipeline::extraction::validation::MAX_DEFINITION_CHARS;
use crate::pipeline::extraction::ExtractionError;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Default cap on input size, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1_000_000;

pub const ENV_MAX_INPUT_CHARS: &str = "ACRONYMIC_MAX_INPUT_CHARS";
pub const ENV_MAX_DEFINITION_CHARS: &str = "ACRONYMIC_MAX_DEFINITION_CHARS";
pub const ENV_TAG: &str = "ACRONYMIC_TAG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Input beyond this many characters is dropped before matching.
    pub max_input_chars: usize,
    /// Longest accepted definition, inclusive.
    pub max_definition_chars: usize,
    /// Compiled-program budget per pattern family, in bytes.
    pub regex_size_limit: usize,
    /// Tag stamped on every record.
    pub provenance_tag: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            max_definition_chars: MAX_DEFINITION_CHARS,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            provenance_tag: DEFAULT_PROVENANCE_TAG.to_string(),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Derivation
// ═══════════════════════════════════════════════════════════

impl ExtractorConfig {
    /// Defaults overridden by `ACRONYMIC_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = parse_usize(&lookup, ENV_MAX_INPUT_CHARS) {
            config.max_input_chars = value;
        }
        if let Some(value) = parse_usize(&lookup, ENV_MAX_DEFINITION_CHARS) {
            config.max_definition_chars = value;
        }
        if let Some(tag) = lookup(ENV_TAG) {
            let tag = tag.trim();
            if tag.is_empty() {
                tracing::warn!(key = ENV_TAG, "Ignoring empty provenance tag");
            } else {
                config.provenance_tag = tag.to_string();
            }
        }

        config
    }

    /// Reject settings under which no record could ever be produced.
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.max_input_chars == 0 {
            return Err(ExtractionError::Config("max_input_chars must be positive".into()));
        }
        if self.max_definition_chars == 0 {
            return Err(ExtractionError::Config("max_definition_chars must be positive".into()));
        }
        if self.provenance_tag.trim().is_empty() {
            return Err(ExtractionError::Config("provenance_tag must not be empty".into()));
        }
        Ok(())
    }
}

fn parse_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = lookup(key)?;
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "Ignoring unparsable setting");
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
