//! Free-text keyword routing.
//!
//! When a message is not a recognized command, an ordered set of synonym
//! groups picks the guidance or flow to trigger. First matching group wins,
//! so group order is part of the routing contract.

/// Where a free-text message routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRoute {
    EligibilityGuidance,
    PrescriptionGuidance,
    Help,
    Health,
    Fallback,
}

const GROUPS: &[(&[&str], TextRoute)] = &[
    (
        &["eligibility", "eligible", "coverage", "insurance"],
        TextRoute::EligibilityGuidance,
    ),
    (
        &["prescription", "drug", "medication", "medicine"],
        TextRoute::PrescriptionGuidance,
    ),
    (&["help", "commands", "what can you do"], TextRoute::Help),
    (&["status", "health", "online"], TextRoute::Health),
];

/// Case-insensitive substring containment against the synonym groups.
pub fn route_text(text: &str) -> TextRoute {
    let lower = text.to_lowercase();
    for (words, route) in GROUPS {
        if words.iter().any(|w| lower.contains(w)) {
            return *route;
        }
    }
    TextRoute::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insurance_routes_to_eligibility_guidance() {
        assert_eq!(
            route_text("check my insurance coverage"),
            TextRoute::EligibilityGuidance
        );
    }

    #[test]
    fn medication_routes_to_prescription_guidance() {
        assert_eq!(
            route_text("is this medication safe?"),
            TextRoute::PrescriptionGuidance
        );
    }

    #[test]
    fn help_phrases_route_to_help() {
        assert_eq!(route_text("what can you do"), TextRoute::Help);
        assert_eq!(route_text("show me the COMMANDS"), TextRoute::Help);
    }

    #[test]
    fn health_words_route_to_health_check() {
        assert_eq!(route_text("are you online?"), TextRoute::Health);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(route_text("ELIGIBILITY"), TextRoute::EligibilityGuidance);
    }

    #[test]
    fn earlier_group_wins_on_overlap() {
        // "drug" (group 2) and "health" (group 4) both match; group 2 is
        // checked first.
        assert_eq!(
            route_text("drug health question"),
            TextRoute::PrescriptionGuidance
        );
        // "coverage" (group 1) beats "drug" (group 2).
        assert_eq!(
            route_text("drug coverage question"),
            TextRoute::EligibilityGuidance
        );
    }

    #[test]
    fn no_match_falls_back() {
        assert_eq!(route_text("hello there"), TextRoute::Fallback);
    }
}
