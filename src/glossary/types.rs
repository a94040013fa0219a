use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pipeline::extraction::{AcronymCandidate, Confidence};

/// One stored acronym record. Same wire shape as [`AcronymCandidate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    #[serde(default)]
    pub id: String,
    pub acronym: String,
    pub definition: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl GlossaryEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl From<AcronymCandidate> for GlossaryEntry {
    fn from(c: AcronymCandidate) -> Self {
        Self {
            id: c.id,
            acronym: c.acronym,
            definition: c.definition,
            tags: c.tags,
            confidence: c.confidence,
        }
    }
}

/// What a merge changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Acronyms appended, in merge order.
    pub added: Vec<String>,
    /// Candidates dropped because the acronym was already known.
    pub skipped: usize,
    pub merged_at: DateTime<Utc>,
}

impl MergeReport {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extraction::PatternFamily;

    #[test]
    fn entry_from_candidate_keeps_wire_fields() {
        let c = AcronymCandidate::new(
            "NIC".into(),
            "Network Interface Card".into(),
            "source-import",
            Some(Confidence::High),
            PatternFamily::DefinitionThenAcronym,
        );
        let expected = serde_json::to_value(&c).unwrap();
        let entry = GlossaryEntry::from(c);
        assert_eq!(serde_json::to_value(&entry).unwrap(), expected);
    }

    #[test]
    fn entry_deserializes_hand_written_record() {
        let entry: GlossaryEntry =
            serde_json::from_str(r#"{"acronym":"CPU","definition":"Central Processing Unit"}"#)
                .unwrap();
        assert_eq!(entry.acronym, "CPU");
        assert!(entry.tags.is_empty());
        assert!(entry.confidence.is_none());
        assert!(entry.id.is_empty());
    }

    #[test]
    fn has_tag_is_exact() {
        let entry = GlossaryEntry {
            id: String::new(),
            acronym: "CPU".into(),
            definition: "Central Processing Unit".into(),
            tags: vec!["source-import".into()],
            confidence: None,
        };
        assert!(entry.has_tag("source-import"));
        assert!(!entry.has_tag("source"));
    }
}
