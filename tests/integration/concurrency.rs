//! One filter shared by many threads.

use std::thread;

use wordlift_filter::ContentFilter;
use wordlift_foundation::EntityRecord;
use wordlift_storage::{EntityStore, SiteConfiguration, SitePermalinks};

fn document(i: usize) -> String {
    format!(
        r#"<p>Post {i}: <span class="textannotation" itemid="urn:entity:{}">Entity</span></p>"#,
        i % 4
    )
}

#[test]
fn concurrent_rewrites_match_sequential_ones() {
    let store: EntityStore = (0..4)
        .map(|i| EntityRecord::new(format!("urn:entity:{i}"), format!("Entity {i}")))
        .collect();
    let filter = ContentFilter::new(
        store,
        SitePermalinks::new("http://example.org").unwrap(),
        SiteConfiguration::new(true),
    );

    let documents: Vec<String> = (0..64).map(document).collect();
    let sequential: Vec<String> = documents
        .iter()
        .map(|html| filter.rewrite(html).unwrap())
        .collect();

    let filter = &filter;
    let concurrent: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = documents
            .iter()
            .map(|html| scope.spawn(move || filter.rewrite(html).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(concurrent, sequential);
    assert!(concurrent[5].contains("href='http://example.org/entity/entity-1/'"));
}

#[test]
fn configuration_change_between_documents() {
    let store: EntityStore = vec![EntityRecord::new("urn:entity:0", "Entity 0")]
        .into_iter()
        .collect();
    let config = SiteConfiguration::new(true);
    let filter = ContentFilter::new(
        store,
        SitePermalinks::new("http://example.org").unwrap(),
        &config,
    );

    thread::scope(|scope| {
        let writer = scope.spawn(|| config.set_link_by_default(false));
        for _ in 0..32 {
            let out = filter.rewrite(&document(0)).unwrap();
            // Each document sees one setting or the other, never a mix.
            assert!(
                out == "<p>Post 0: <a class='wl-entity-page-link' href='http://example.org/entity/entity-0/'>Entity</a></p>"
                    || out == "<p>Post 0: Entity</p>",
                "{out}"
            );
        }
        writer.join().unwrap();
    });

    assert_eq!(filter.rewrite(&document(0)).unwrap(), "<p>Post 0: Entity</p>");
}
