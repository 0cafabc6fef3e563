//! End-to-end: site snapshot on disk, command line, filtered output.

use std::fs;

use wordlift_foundation::EntityRecord;
use wordlift_runtime::{SiteSnapshot, parse_args, save_to_file};

const POST: &str = r#"<p><span id="urn:enhancement-1" class="textannotation" itemid="http://data.example.org/matt">Matt Mullenweg</span> founded <span class="textannotation wl-no-link" itemid="http://data.example.org/wp">WordPress</span>.</p>"#;

fn snapshot() -> SiteSnapshot {
    SiteSnapshot::new("https://blog.example.org")
        .with_entity(EntityRecord::new("http://data.example.org/matt", "Matt Mullenweg"))
        .with_entity(EntityRecord::new("http://data.example.org/wp", "WordPress"))
}

fn run(args: &[&str], stdin: &str) -> (String, String) {
    let config = parse_args(args.iter().copied()).unwrap();
    let site = config.load_site().unwrap();
    let mut out = Vec::new();
    let mut report = Vec::new();
    config
        .filter_inputs(&site, &mut stdin.as_bytes(), &mut out, &mut report)
        .unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(report).unwrap())
}

#[test]
fn json_snapshot_drives_the_filter() {
    let path = std::env::temp_dir().join("wordlift_integration_site.json");
    save_to_file(&snapshot(), &path).unwrap();
    let site = path.to_string_lossy().to_string();

    let linked = run(&["--site", &site, "--report"], POST);
    let unlinked = run(&["--site", &site, "--no-link-by-default"], POST);
    fs::remove_file(&path).ok();

    assert_eq!(
        linked.0,
        "<p><a class='wl-entity-page-link' href='https://blog.example.org/entity/matt-mullenweg/'>Matt Mullenweg</a> founded WordPress.</p>"
    );
    assert_eq!(
        linked.1,
        "<stdin>: 1 linked, 1 unlinked, 0 passed through, 0 malformed\n"
    );
    assert_eq!(unlinked.0, "<p>Matt Mullenweg founded WordPress.</p>");
}

#[test]
fn messagepack_snapshot_with_base_url_override() {
    let path = std::env::temp_dir().join("wordlift_integration_site.msgpack");
    save_to_file(&snapshot(), &path).unwrap();
    let site = path.to_string_lossy().to_string();

    let (out, _) = run(&["--site", &site, "--base-url", "http://example.org/"], POST);
    fs::remove_file(&path).ok();

    assert!(out.contains("href='http://example.org/entity/matt-mullenweg/'"));
}

#[test]
fn without_a_site_nothing_resolves() {
    let (out, report) = run(&["--report"], POST);
    assert_eq!(out, POST);
    assert_eq!(report, "<stdin>: 0 linked, 0 unlinked, 2 passed through, 0 malformed\n");
}

#[test]
fn failed_resolution_leaves_the_page_intact() {
    let path = std::env::temp_dir().join("wordlift_integration_broken.json");
    let broken = SiteSnapshot::new("http://example.org")
        .with_entity(EntityRecord::new("http://data.example.org/matt", "Matt").with_slug(""));
    save_to_file(&broken, &path).unwrap();
    let site = path.to_string_lossy().to_string();

    let (out, report) = run(&["--site", &site, "--report"], POST);
    fs::remove_file(&path).ok();

    assert_eq!(out, POST);
    assert_eq!(report, "<stdin>: resolution failed, content left unmodified\n");
}
