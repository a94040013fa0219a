//! Pattern families for acronym/definition detection.
//!
//! Each family is a global leftmost-first search over normalized text that
//! yields exactly two capture groups per match. Families run in the order of
//! [`PatternFamily::ALL`]; the orchestrator relies on that order for
//! first-seen-wins deduplication.
//!
//! The `regex` crate compiles to finite automata, so matching stays linear in
//! the input even on long ambiguous parenthetical runs.

use regex::{Regex, RegexBuilder};

use super::types::{PatternFamily, RawMatch};
use super::ExtractionError;

/// Acronym token: uppercase ASCII letter, then 1-10 letters, digits, `-` or `.`.
pub const ACRONYM_TOKEN: &str = r"[A-Z][A-Za-z0-9\-.]{1,10}";

/// Definition phrase character class: word chars, whitespace, `&`, `.`, `-`.
pub const DEFINITION_CLASS: &str = r"[\w\s\-&.]";

/// Default compiled-program budget per family, matching the `regex` crate default.
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Regex source for one family.
pub fn family_source(family: PatternFamily) -> String {
    match family {
        PatternFamily::DefinitionThenAcronym => {
            format!(r"({DEFINITION_CLASS}+?)\s*\(\s*({ACRONYM_TOKEN})\s*\)")
        }
        PatternFamily::AcronymThenDefinition => {
            format!(r"({ACRONYM_TOKEN})\s*\(\s*({DEFINITION_CLASS}+?)\s*\)")
        }
        // The terminator is matched outside both groups, so the definition
        // stops right before the first `.`, `,` or `;`. No acronym token can
        // start on a terminator, so consuming it never hides a later match.
        PatternFamily::AcronymDashDefinition => {
            format!(r"({ACRONYM_TOKEN})\s*[\-\u{{2013}}\u{{2014}}:]\s*({DEFINITION_CLASS}+?)(?:[.,;]|$)")
        }
    }
}

/// A single compiled family.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub family: PatternFamily,
    regex: Regex,
}

impl CompiledPattern {
    pub fn compile(family: PatternFamily, size_limit: usize) -> Result<Self, ExtractionError> {
        let regex = RegexBuilder::new(&family_source(family))
            .size_limit(size_limit)
            .build()
            .map_err(|source| ExtractionError::Pattern { family, source })?;
        Ok(Self { family, regex })
    }

    /// All matches of this family over `text`, groups trimmed, in discovery order.
    pub fn scan<'t>(&self, text: &'t str) -> Vec<RawMatch<'t>> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let first = caps.get(1)?.as_str().trim();
                let second = caps.get(2)?.as_str().trim();
                Some(RawMatch {
                    family: self.family,
                    first,
                    second,
                })
            })
            .collect()
    }
}

/// An ordered set of compiled families.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compile the given families, preserving their order.
    pub fn compile(families: &[PatternFamily], size_limit: usize) -> Result<Self, ExtractionError> {
        let patterns = families
            .iter()
            .map(|&family| CompiledPattern::compile(family, size_limit))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// All three families in application order.
    pub fn full(size_limit: usize) -> Result<Self, ExtractionError> {
        Self::compile(&PatternFamily::ALL, size_limit)
    }

    pub fn families(&self) -> impl Iterator<Item = PatternFamily> + '_ {
        self.patterns.iter().map(|p| p.family)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(family: PatternFamily, text: &str) -> Vec<(String, String)> {
        CompiledPattern::compile(family, DEFAULT_REGEX_SIZE_LIMIT)
            .unwrap()
            .scan(text)
            .into_iter()
            .map(|m| (m.first.to_string(), m.second.to_string()))
            .collect()
    }

    #[test]
    fn all_families_compile() {
        let set = PatternSet::full(DEFAULT_REGEX_SIZE_LIMIT).unwrap();
        let families: Vec<_> = set.families().collect();
        assert_eq!(families, PatternFamily::ALL.to_vec());
    }

    #[test]
    fn definition_then_acronym_captures_phrase_and_token() {
        let found = scan(
            PatternFamily::DefinitionThenAcronym,
            "Network Interface Card (NIC) provides connectivity.",
        );
        assert_eq!(found, vec![("Network Interface Card".into(), "NIC".into())]);
    }

    #[test]
    fn definition_then_acronym_tolerates_inner_spaces() {
        let found = scan(PatternFamily::DefinitionThenAcronym, "Domain Name System ( DNS )");
        assert_eq!(found, vec![("Domain Name System".into(), "DNS".into())]);
    }

    #[test]
    fn definition_then_acronym_finds_successive_matches() {
        let found = scan(
            PatternFamily::DefinitionThenAcronym,
            "Central Processing Unit (CPU) and Graphics Processing Unit (GPU)",
        );
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].1, "CPU");
        assert_eq!(found[1], ("and Graphics Processing Unit".into(), "GPU".into()));
    }

    #[test]
    fn acronym_then_definition_parenthetical() {
        let found = scan(
            PatternFamily::AcronymThenDefinition,
            "Use TLS (Transport Layer Security) everywhere.",
        );
        assert_eq!(found, vec![("TLS".into(), "Transport Layer Security".into())]);
    }

    #[test]
    fn dash_family_stops_before_terminator() {
        let found = scan(
            PatternFamily::AcronymDashDefinition,
            "API - Application Programming Interface. More text",
        );
        assert_eq!(found, vec![("API".into(), "Application Programming Interface".into())]);
    }

    #[test]
    fn dash_family_accepts_colon_and_unicode_dashes() {
        let text = "RAM: Random Access Memory, ROM \u{2013} Read Only Memory; SSD\u{2014}Solid State Drive";
        let found = scan(PatternFamily::AcronymDashDefinition, text);
        assert_eq!(
            found,
            vec![
                ("RAM".into(), "Random Access Memory".into()),
                ("ROM".into(), "Read Only Memory".into()),
                ("SSD".into(), "Solid State Drive".into()),
            ]
        );
    }

    #[test]
    fn dash_family_runs_to_end_of_text() {
        let found = scan(PatternFamily::AcronymDashDefinition, "RAM - Read After Memory");
        assert_eq!(found, vec![("RAM".into(), "Read After Memory".into())]);
    }

    #[test]
    fn acronym_token_is_capped_at_eleven_chars() {
        let found = scan(
            PatternFamily::DefinitionThenAcronym,
            "Something Quite Long (ABCDEFGHIJKL)",
        );
        assert!(found.is_empty());
    }

    #[test]
    fn lowercase_led_token_is_not_an_acronym() {
        let found = scan(PatternFamily::DefinitionThenAcronym, "internet protocol (ip)");
        assert!(found.is_empty());
    }

    #[test]
    fn tiny_size_limit_is_a_pattern_error() {
        let err = CompiledPattern::compile(PatternFamily::DefinitionThenAcronym, 16).unwrap_err();
        assert!(matches!(
            err,
            ExtractionError::Pattern {
                family: PatternFamily::DefinitionThenAcronym,
                ..
            }
        ));
    }
}
