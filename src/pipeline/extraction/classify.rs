use std::sync::LazyLock;

use regex::Regex;

use super::types::{ClassifiedPair, RawMatch};

/// Full-string acronym shape. Built from the same token the pattern families use.
static ACRONYM_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}$", super::patterns::ACRONYM_TOKEN)).unwrap()
});

/// Whether `token` is, in its entirety, an acronym-shaped token.
pub fn is_acronym_shaped(token: &str) -> bool {
    ACRONYM_SHAPE.is_match(token)
}

/// Decide which group of a match is the acronym.
///
/// Definition-first and acronym-first families share capture order but swap
/// roles, so the decision is made on shape alone: group 1 is the acronym only
/// if it is acronym-shaped as a whole, otherwise group 2 is.
pub fn classify_groups<'t>(raw: &RawMatch<'t>) -> ClassifiedPair<'t> {
    if is_acronym_shaped(raw.first) {
        ClassifiedPair {
            acronym: raw.first,
            definition: raw.second,
        }
    } else {
        ClassifiedPair {
            acronym: raw.second,
            definition: raw.first,
        }
    }
}
