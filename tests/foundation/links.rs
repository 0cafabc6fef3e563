//! Integration tests for link states, decisions, and settings

use wordlift_foundation::{
    ConfigurationSource, LinkDecision, LinkDecisionKind, LinkSettings, LinkState,
};

// =============================================================================
// Link State
// =============================================================================

#[test]
fn state_from_classes() {
    assert_eq!(
        LinkState::from_classes(["textannotation", "disambiguated", "wl-person"]),
        LinkState::Unspecified
    );
    assert_eq!(
        LinkState::from_classes(["textannotation", "wl-link"]),
        LinkState::ForceLink
    );
    assert_eq!(
        LinkState::from_classes(["textannotation", "wl-no-link"]),
        LinkState::ForceNoLink
    );
}

#[test]
fn no_link_wins_over_link() {
    assert_eq!(
        LinkState::from_classes(["wl-link", "wl-no-link"]),
        LinkState::ForceNoLink
    );
    assert_eq!(
        LinkState::from_classes(["wl-no-link", "wl-link"]),
        LinkState::ForceNoLink
    );
}

#[test]
fn class_tokens_match_exactly() {
    assert_eq!(
        LinkState::from_classes(["wl-linked", "WL-LINK", "wl-no-links"]),
        LinkState::Unspecified
    );
}

#[test]
fn default_state_is_unspecified() {
    assert_eq!(LinkState::default(), LinkState::Unspecified);
}

// =============================================================================
// Decisions
// =============================================================================

#[test]
fn decision_kinds() {
    assert_eq!(
        LinkDecision::Link("http://example.org/link".into()).kind(),
        LinkDecisionKind::ShouldLink
    );
    assert_eq!(LinkDecision::NoLink.kind(), LinkDecisionKind::ShouldNotLink);
    assert_eq!(LinkDecision::PassThrough.kind(), LinkDecisionKind::PassThrough);
}

// =============================================================================
// Settings
// =============================================================================

#[test]
fn settings_default_to_linking() {
    assert!(LinkSettings::default().link_by_default);
    assert!(LinkSettings::linking().link_by_default);
    assert!(!LinkSettings::not_linking().link_by_default);
}

#[test]
fn settings_are_a_configuration_source() {
    let settings = LinkSettings::linking().with_link_by_default(false);
    assert!(!settings.is_link_by_default());
    assert_eq!(settings.snapshot(), settings);
}
