use serde::{Deserialize, Serialize};
use std::fmt;

use super::ExtractionError;

/// Suffix appended to the lowercased acronym to build a record id.
pub const ID_SUFFIX: &str = "-import";

/// Default provenance tag stamped on every extracted record.
pub const DEFAULT_PROVENANCE_TAG: &str = "source-import";

/// One acronym/definition pair found in document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcronymCandidate {
    pub id: String,
    pub acronym: String,
    pub definition: String,
    pub tags: Vec<String>,
    /// Absent when the record came from the fallback path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    /// Which pattern family produced the record. Not part of the wire shape.
    #[serde(skip)]
    pub family: PatternFamily,
}

impl AcronymCandidate {
    pub fn new(
        acronym: String,
        definition: String,
        tag: &str,
        confidence: Option<Confidence>,
        family: PatternFamily,
    ) -> Self {
        Self {
            id: candidate_id(&acronym),
            acronym,
            definition,
            tags: vec![tag.to_string()],
            confidence,
            family,
        }
    }
}

/// Deterministic record id: lowercased acronym plus [`ID_SUFFIX`].
pub fn candidate_id(acronym: &str) -> String {
    format!("{}{ID_SUFFIX}", acronym.to_lowercase())
}

/// Confidence band assigned by the initials heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three pattern families, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternFamily {
    /// `Network Interface Card (NIC)`
    DefinitionThenAcronym,
    /// `NIC (Network Interface Card)`
    AcronymThenDefinition,
    /// `NIC - Network Interface Card.` (also en/em dash and colon)
    AcronymDashDefinition,
}

impl PatternFamily {
    /// Application order. Earlier families win acronym collisions.
    pub const ALL: [PatternFamily; 3] = [
        Self::DefinitionThenAcronym,
        Self::AcronymThenDefinition,
        Self::AcronymDashDefinition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DefinitionThenAcronym => "definition_then_acronym",
            Self::AcronymThenDefinition => "acronym_then_definition",
            Self::AcronymDashDefinition => "acronym_dash_definition",
        }
    }
}

impl fmt::Display for PatternFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two trimmed capture groups of a single pattern match, before
/// the classifier decides which side is the acronym.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch<'t> {
    pub family: PatternFamily,
    pub first: &'t str,
    pub second: &'t str,
}

/// A raw match after role assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedPair<'t> {
    pub acronym: &'t str,
    pub definition: &'t str,
}

/// Anything that turns document text into acronym records.
///
/// Implemented by the full multi-pattern engine and by the reduced
/// single-pattern fallback so callers can swap one for the other.
pub trait CandidateExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<Vec<AcronymCandidate>, ExtractionError>;
}
