//! The link decision table.

use wordlift_foundation::{LinkDecision, LinkDecisionKind, LinkSettings, LinkState};

/// Decides how a marker is rendered.
///
/// | resolved | link state    | link by default | result        |
/// |----------|---------------|-----------------|---------------|
/// | no       | any           | any             | pass-through  |
/// | yes      | `ForceLink`   | any             | link          |
/// | yes      | `ForceNoLink` | any             | no link       |
/// | yes      | `Unspecified` | true            | link          |
/// | yes      | `Unspecified` | false           | no link       |
#[must_use]
pub fn decide(link_state: LinkState, entity_resolved: bool, link_by_default: bool) -> LinkDecisionKind {
    if !entity_resolved {
        return LinkDecisionKind::PassThrough;
    }
    match link_state {
        LinkState::ForceLink => LinkDecisionKind::ShouldLink,
        LinkState::ForceNoLink => LinkDecisionKind::ShouldNotLink,
        LinkState::Unspecified if link_by_default => LinkDecisionKind::ShouldLink,
        LinkState::Unspecified => LinkDecisionKind::ShouldNotLink,
    }
}

/// Turns a decision kind into a [`LinkDecision`], asking for the permalink
/// only when a link is rendered.
///
/// # Errors
///
/// Propagates the error of `permalink`.
pub fn resolve_decision<E>(
    link_state: LinkState,
    entity_resolved: bool,
    settings: LinkSettings,
    permalink: impl FnOnce() -> Result<String, E>,
) -> Result<LinkDecision, E> {
    Ok(match decide(link_state, entity_resolved, settings.link_by_default) {
        LinkDecisionKind::ShouldLink => LinkDecision::Link(permalink()?),
        LinkDecisionKind::ShouldNotLink => LinkDecision::NoLink,
        LinkDecisionKind::PassThrough => LinkDecision::PassThrough,
    })
}
