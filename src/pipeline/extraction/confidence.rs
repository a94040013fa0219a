use super::types::Confidence;

/// Uppercased first character of every whitespace-separated word.
pub fn initials(definition: &str) -> String {
    definition
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Score a pair with the initials heuristic.
///
/// `High` when the acronym's first letter occurs anywhere in the definition's
/// initials, `Medium` otherwise. Word order and filler words are tolerated,
/// so this is a weak signal by nature.
pub fn score_confidence(acronym: &str, definition: &str) -> Confidence {
    let Some(lead) = acronym.chars().next() else {
        return Confidence::Medium;
    };
    let initials = initials(definition);
    if lead.to_uppercase().all(|c| initials.contains(c)) {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_of_simple_phrase() {
        assert_eq!(initials("Network Interface Card"), "NIC");
    }

    #[test]
    fn initials_are_uppercased() {
        assert_eq!(initials("domain name system"), "DNS");
    }

    #[test]
    fn initials_skip_repeated_whitespace() {
        assert_eq!(initials("  Read   After  Memory "), "RAM");
    }

    #[test]
    fn initials_of_empty_definition() {
        assert_eq!(initials(""), "");
    }

    #[test]
    fn matching_lead_letter_is_high() {
        assert_eq!(score_confidence("NIC", "Network Interface Card"), Confidence::High);
    }

    #[test]
    fn lead_letter_anywhere_in_initials_is_high() {
        // Word order is not checked.
        assert_eq!(score_confidence("NIC", "the card for a Network"), Confidence::High);
    }

    #[test]
    fn case_of_definition_does_not_matter() {
        assert_eq!(score_confidence("API", "application programming interface"), Confidence::High);
    }

    #[test]
    fn missing_lead_letter_is_medium() {
        assert_eq!(score_confidence("XYZ", "Network Interface Card"), Confidence::Medium);
    }

    #[test]
    fn empty_acronym_is_medium() {
        assert_eq!(score_confidence("", "Network Interface Card"), Confidence::Medium);
    }
}
