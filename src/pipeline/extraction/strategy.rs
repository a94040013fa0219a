//! Extraction path selection.
//!
//! The full engine runs first. The single-pattern fallback takes over when the
//! full engine fails or finds nothing, so the caller always gets a record list
//! and never sees an extraction error.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fallback::FallbackExtractor;
use super::types::{AcronymCandidate, CandidateExtractor};

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionPath {
    Full,
    Fallback,
}

impl fmt::Display for ExtractionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// Records plus the path that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyOutcome {
    pub path: ExtractionPath,
    pub candidates: Vec<AcronymCandidate>,
}

// ═══════════════════════════════════════════════════════════
// Resolution
// ═══════════════════════════════════════════════════════════

/// Run `primary`, substituting `fallback` on error or on an empty result.
pub fn extract_with_fallback(
    primary: &dyn CandidateExtractor,
    fallback: &FallbackExtractor,
    text: &str,
) -> StrategyOutcome {
    match primary.extract(text) {
        Ok(candidates) if !candidates.is_empty() => {
            return StrategyOutcome {
                path: ExtractionPath::Full,
                candidates,
            };
        }
        Ok(_) => {
            tracing::debug!("Full extraction found no acronyms, trying fallback");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Full extraction failed, using fallback");
        }
    }

    let candidates = fallback.extract(text);
    if candidates.is_empty() {
        // Nothing either way; report the primary path.
        return StrategyOutcome {
            path: ExtractionPath::Full,
            candidates,
        };
    }
    StrategyOutcome {
        path: ExtractionPath::Fallback,
        candidates,
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
