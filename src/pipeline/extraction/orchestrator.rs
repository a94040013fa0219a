//! Acronym extraction orchestrator.
//!
//! Normalize → scan each pattern family in order → classify groups →
//! validate → score → keep first-seen per acronym → rank by confidence band.
//!
//! All per-call state lives in a local accumulator, so one extractor can be
//! shared across threads and repeated calls on the same text are identical.

use std::collections::HashSet;
use std::sync::LazyLock;
use std::time::Instant;

use super::classify::classify_groups;
use super::confidence::score_confidence;
use super::normalize::{normalize_extracted_text, truncate_chars};
use super::patterns::PatternSet;
use super::types::{AcronymCandidate, CandidateExtractor, Confidence, RawMatch};
use super::validation::validate_pair;
use super::ExtractionError;
use crate::pipeline_config::ExtractorConfig;

/// Full multi-pattern extraction engine.
#[derive(Debug, Clone)]
pub struct AcronymExtractor {
    patterns: PatternSet,
    config: ExtractorConfig,
}

impl AcronymExtractor {
    /// Compile all pattern families under `config`.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractionError> {
        config.validate()?;
        let patterns = PatternSet::full(config.regex_size_limit)?;
        Ok(Self { patterns, config })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract ranked, deduplicated acronym records from raw document text.
    ///
    /// Empty or whitespace-only input yields an empty list.
    pub fn extract(&self, text: &str) -> Result<Vec<AcronymCandidate>, ExtractionError> {
        let start = Instant::now();
        let normalized = prepare_text(text, self.config.max_input_chars);
        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        let mut accumulator = Accumulator::default();
        for pattern in self.patterns.iter() {
            let matches = pattern.scan(&normalized);
            tracing::trace!(
                family = pattern.family.as_str(),
                matches = matches.len(),
                "Pattern family scanned"
            );
            for raw in &matches {
                if let Some(candidate) = self.materialize(raw) {
                    accumulator.offer(candidate);
                }
            }
        }

        let results = accumulator.into_ranked();
        tracing::debug!(
            input_chars = normalized.chars().count(),
            candidates = results.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Acronym extraction complete"
        );
        Ok(results)
    }

    fn materialize(&self, raw: &RawMatch<'_>) -> Option<AcronymCandidate> {
        let pair = classify_groups(raw);
        if let Err(rejection) = validate_pair(&pair, self.config.max_definition_chars) {
            tracing::trace!(
                family = raw.family.as_str(),
                acronym = pair.acronym,
                reason = rejection.as_str(),
                "Candidate rejected"
            );
            return None;
        }

        let confidence = score_confidence(pair.acronym, pair.definition);
        Some(AcronymCandidate::new(
            pair.acronym.to_string(),
            pair.definition.to_string(),
            &self.config.provenance_tag,
            Some(confidence),
            raw.family,
        ))
    }
}

impl CandidateExtractor for AcronymExtractor {
    fn extract(&self, text: &str) -> Result<Vec<AcronymCandidate>, ExtractionError> {
        AcronymExtractor::extract(self, text)
    }
}

/// Default-configured engine, compiled on first use.
static DEFAULT_EXTRACTOR: LazyLock<Result<AcronymExtractor, ExtractionError>> =
    LazyLock::new(|| AcronymExtractor::new(ExtractorConfig::default()));

/// The shared default-configured engine.
pub fn default_extractor() -> Result<&'static AcronymExtractor, ExtractionError> {
    DEFAULT_EXTRACTOR.as_ref().map_err(Clone::clone)
}

/// Extract with the default configuration.
pub fn extract(text: &str) -> Result<Vec<AcronymCandidate>, ExtractionError> {
    default_extractor()?.extract(text)
}

/// Apply the input budget, then normalize.
pub(crate) fn prepare_text(text: &str, max_input_chars: usize) -> String {
    let bounded = truncate_chars(text, max_input_chars);
    if bounded.len() < text.len() {
        tracing::warn!(
            max_input_chars,
            input_bytes = text.len(),
            "Input exceeds character budget, truncating"
        );
    }
    normalize_extracted_text(bounded)
}

/// Call-scoped, insertion-ordered set of accepted candidates keyed by acronym.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    seen: HashSet<String>,
    accepted: Vec<AcronymCandidate>,
}

impl Accumulator {
    /// Keep `candidate` unless its acronym was already accepted.
    pub(crate) fn offer(&mut self, candidate: AcronymCandidate) -> bool {
        if self.seen.contains(&candidate.acronym) {
            tracing::trace!(
                acronym = %candidate.acronym,
                family = candidate.family.as_str(),
                "Duplicate acronym discarded"
            );
            return false;
        }
        self.seen.insert(candidate.acronym.clone());
        self.accepted.push(candidate);
        true
    }

    /// Stable sort by confidence band: high, medium, then unscored.
    pub(crate) fn into_ranked(mut self) -> Vec<AcronymCandidate> {
        self.accepted.sort_by_key(|c| band_rank(c.confidence));
        self.accepted
    }
}

fn band_rank(confidence: Option<Confidence>) -> u8 {
    match confidence {
        Some(Confidence::High) => 0,
        Some(Confidence::Medium) => 1,
        None => 2,
    }
}
