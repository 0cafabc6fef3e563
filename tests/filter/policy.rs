//! Integration tests for the link policy

use wordlift_filter::decide;
use wordlift_filter::policy::resolve_decision;
use wordlift_foundation::{LinkDecision, LinkDecisionKind, LinkSettings, LinkState};

#[test]
fn unresolved_always_passes_through() {
    for state in [LinkState::Unspecified, LinkState::ForceLink, LinkState::ForceNoLink] {
        for by_default in [true, false] {
            assert_eq!(decide(state, false, by_default), LinkDecisionKind::PassThrough);
        }
    }
}

#[test]
fn explicit_state_beats_site_default() {
    assert_eq!(decide(LinkState::ForceLink, true, false), LinkDecisionKind::ShouldLink);
    assert_eq!(decide(LinkState::ForceNoLink, true, true), LinkDecisionKind::ShouldNotLink);
}

#[test]
fn unspecified_follows_site_default() {
    assert_eq!(decide(LinkState::Unspecified, true, true), LinkDecisionKind::ShouldLink);
    assert_eq!(decide(LinkState::Unspecified, true, false), LinkDecisionKind::ShouldNotLink);
}

#[test]
fn resolve_decision_carries_the_permalink() {
    let decision = resolve_decision(LinkState::Unspecified, true, LinkSettings::linking(), || {
        Ok::<_, ()>("http://example.org/link".to_string())
    })
    .unwrap();
    assert_eq!(decision, LinkDecision::Link("http://example.org/link".into()));
}

#[test]
fn resolve_decision_skips_permalink_when_not_linking() {
    let decision = resolve_decision(LinkState::ForceNoLink, true, LinkSettings::linking(), || {
        Err("permalink must not be requested")
    })
    .unwrap();
    assert_eq!(decision, LinkDecision::NoLink);
}

#[test]
fn resolve_decision_propagates_permalink_failure() {
    let result = resolve_decision(LinkState::ForceLink, true, LinkSettings::not_linking(), || {
        Err::<String, _>("no permalink")
    });
    assert_eq!(result, Err("no permalink"));
}
