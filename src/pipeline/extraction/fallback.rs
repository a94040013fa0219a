//! Reduced single-pattern extraction path.
//!
//! Runs only the definition-then-acronym family and assigns no confidence.
//! Validation and first-seen deduplication are the same as the full engine,
//! and records have the same wire shape minus the `confidence` field.
//!
//! Because the definition-first capture starts as far left as it can, the
//! phrase often drags in leading words ("uses a Network Interface Card").
//! Before validation the definition is realigned to start at the first word
//! sharing the acronym's initial, when one exists.

use super::classify::classify_groups;
use super::orchestrator::{prepare_text, Accumulator};
use super::patterns::CompiledPattern;
use super::types::{AcronymCandidate, CandidateExtractor, ClassifiedPair, PatternFamily};
use super::validation::validate_pair;
use super::ExtractionError;
use crate::pipeline_config::ExtractorConfig;

/// Single-pattern extractor used when the full engine is unavailable.
#[derive(Debug, Clone)]
pub struct FallbackExtractor {
    pattern: CompiledPattern,
    config: ExtractorConfig,
}

impl FallbackExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractionError> {
        config.validate()?;
        let pattern = CompiledPattern::compile(
            PatternFamily::DefinitionThenAcronym,
            config.regex_size_limit,
        )?;
        Ok(Self { pattern, config })
    }

    /// Extract unscored records, in discovery order.
    pub fn extract(&self, text: &str) -> Vec<AcronymCandidate> {
        let normalized = prepare_text(text, self.config.max_input_chars);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut accumulator = Accumulator::default();
        for raw in self.pattern.scan(&normalized) {
            let pair = classify_groups(&raw);
            let definition = realign_definition(pair.acronym, pair.definition);
            let aligned = ClassifiedPair {
                acronym: pair.acronym,
                definition: &definition,
            };

            if let Err(rejection) = validate_pair(&aligned, self.config.max_definition_chars) {
                tracing::trace!(
                    acronym = aligned.acronym,
                    reason = rejection.as_str(),
                    "Fallback candidate rejected"
                );
                continue;
            }

            accumulator.offer(AcronymCandidate::new(
                aligned.acronym.to_string(),
                definition.clone(),
                &self.config.provenance_tag,
                None,
                raw.family,
            ));
        }

        let results = accumulator.into_ranked();
        tracing::debug!(candidates = results.len(), "Fallback extraction complete");
        results
    }
}

impl CandidateExtractor for FallbackExtractor {
    fn extract(&self, text: &str) -> Result<Vec<AcronymCandidate>, ExtractionError> {
        Ok(FallbackExtractor::extract(self, text))
    }
}

/// Drop leading words until one starts with the acronym's initial
/// (case-insensitive). The definition is returned unchanged when it already
/// starts that way or when no word does.
pub fn realign_definition(acronym: &str, definition: &str) -> String {
    let Some(lead) = acronym.chars().next() else {
        return definition.to_string();
    };
    let starts_with_lead = |word: &str| {
        word.chars()
            .next()
            .is_some_and(|c| c.to_lowercase().eq(lead.to_lowercase()))
    };

    if definition.is_empty() || starts_with_lead(definition) {
        return definition.to_string();
    }

    let words: Vec<&str> = definition.split_whitespace().collect();
    match words.iter().position(|&w| starts_with_lead(w)) {
        Some(idx) => words[idx..].join(" "),
        None => definition.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extraction::classify::is_acronym_shaped;

    fn fallback() -> FallbackExtractor {
        FallbackExtractor::new(ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn realign_drops_leading_filler() {
        assert_eq!(
            realign_definition("NIC", "The system uses a Network Interface Card"),
            "Network Interface Card"
        );
    }

    #[test]
    fn realign_keeps_aligned_definition() {
        assert_eq!(
            realign_definition("NIC", "Network Interface Card"),
            "Network Interface Card"
        );
    }

    #[test]
    fn realign_is_case_insensitive() {
        assert_eq!(
            realign_definition("DNS", "the domain name system"),
            "domain name system"
        );
    }

    #[test]
    fn realign_without_matching_word_is_unchanged() {
        assert_eq!(realign_definition("XYZ", "Quite a few words"), "Quite a few words");
    }

    #[test]
    fn realign_empty_inputs() {
        assert_eq!(realign_definition("", "anything"), "anything");
        assert_eq!(realign_definition("ABC", ""), "");
    }

    #[test]
    fn fallback_records_have_no_confidence() {
        let results = fallback().extract("Network Interface Card (NIC) provides connectivity.");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].acronym, "NIC");
        assert_eq!(results[0].definition, "Network Interface Card");
        assert!(results[0].confidence.is_none());
        assert_eq!(results[0].id, "nic-import");
    }

    #[test]
    fn fallback_ignores_other_families() {
        assert!(fallback().extract("API - Application Programming Interface.").is_empty());
        assert!(fallback().extract("TLS (Transport Layer Security)").is_empty());
    }

    #[test]
    fn fallback_realigns_long_captures() {
        let results = fallback().extract("Every host uses a Network Interface Card (NIC).");
        assert_eq!(results[0].definition, "Network Interface Card");
    }

    #[test]
    fn fallback_keeps_first_seen() {
        let text = "Random Access Memory (RAM) and later Rapid Access Module (RAM)";
        let results = fallback().extract(text);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].definition, "Random Access Memory");
    }

    #[test]
    fn fallback_applies_same_validator() {
        for text in ["Ethernet (ETH)", "x (AB)", "ab (cd)"] {
            assert!(fallback().extract(text).is_empty(), "{text:?}");
        }
        let long = format!("{} (LONG)", "word ".repeat(60));
        for c in fallback().extract(&long) {
            assert!(c.definition.chars().count() <= 200);
            assert!(is_acronym_shaped(&c.acronym));
        }
    }

    #[test]
    fn fallback_wire_shape_matches_full_engine_minus_confidence() {
        let results = fallback().extract("Network Interface Card (NIC)");
        let json = serde_json::to_string(&results[0]).unwrap();
        assert_eq!(
            json,
            r#"{"id":"nic-import","acronym":"NIC","definition":"Network Interface Card","tags":["source-import"]}"#
        );
    }

    #[test]
    fn fallback_empty_input() {
        assert!(fallback().extract("").is_empty());
    }
}
