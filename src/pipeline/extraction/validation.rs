//! Acceptance rules for a classified (acronym, definition) pair.
//!
//! Lengths are counted in characters, not bytes, so accented definitions
//! are measured the way a reader would count them.

use super::classify::is_acronym_shaped;
use super::types::ClassifiedPair;

/// Upper bound on definition length, in characters.
pub const MAX_DEFINITION_CHARS: usize = 200;

/// Minimum acronym length, in characters.
pub const MIN_ACRONYM_CHARS: usize = 2;

/// Why a pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AcronymTooShort,
    AcronymWithoutUppercase,
    AcronymMalformed,
    DefinitionTooShort,
    DefinitionTooLong,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AcronymTooShort => "acronym_too_short",
            Self::AcronymWithoutUppercase => "acronym_without_uppercase",
            Self::AcronymMalformed => "acronym_malformed",
            Self::DefinitionTooShort => "definition_too_short",
            Self::DefinitionTooLong => "definition_too_long",
        }
    }
}

/// Check a classified pair. `max_definition_chars` is inclusive.
///
/// The definition must be strictly longer than the acronym.
pub fn validate_pair(pair: &ClassifiedPair<'_>, max_definition_chars: usize) -> Result<(), Rejection> {
    let acronym_len = pair.acronym.chars().count();
    if acronym_len < MIN_ACRONYM_CHARS {
        return Err(Rejection::AcronymTooShort);
    }
    if !pair.acronym.chars().any(char::is_uppercase) {
        return Err(Rejection::AcronymWithoutUppercase);
    }
    if !is_acronym_shaped(pair.acronym) {
        return Err(Rejection::AcronymMalformed);
    }

    let definition_len = pair.definition.chars().count();
    if definition_len <= acronym_len {
        return Err(Rejection::DefinitionTooShort);
    }
    if definition_len > max_definition_chars {
        return Err(Rejection::DefinitionTooLong);
    }

    Ok(())
}
