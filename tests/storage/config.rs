//! Integration tests for site configuration

use std::sync::Arc;
use std::thread;

use wordlift_foundation::{ConfigurationSource, LinkSettings};
use wordlift_storage::SiteConfiguration;

#[test]
fn defaults_to_linking() {
    assert!(SiteConfiguration::default().is_link_by_default());
}

#[test]
fn changes_are_visible_in_later_snapshots() {
    let config = SiteConfiguration::new(true);
    let before = config.snapshot();
    config.set_link_by_default(false);
    assert_eq!(before, LinkSettings::linking());
    assert_eq!(config.snapshot(), LinkSettings::not_linking());
}

#[test]
fn shared_between_threads() {
    let config = Arc::new(SiteConfiguration::new(false));
    let writer = Arc::clone(&config);
    thread::spawn(move || writer.set_link_by_default(true))
        .join()
        .unwrap();
    assert!(config.snapshot().link_by_default);
}
