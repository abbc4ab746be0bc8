use caribbean_realty::content::{site_defaults, ContentStore, ContentTree};
use caribbean_realty::storage::{FileStore, KeyValueStore, MemoryStore, CONTENT_OVERRIDE_KEY};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn fresh_store() -> (Arc<MemoryStore>, ContentStore) {
    let kv = Arc::new(MemoryStore::new());
    let store = ContentStore::with_site_defaults(kv.clone());
    (kv, store)
}

#[test]
fn hero_title_override_keeps_default_subtitle() {
    let (_, store) = fresh_store();
    let default_subtitle = site_defaults()
        .get("home", "hero", "subtitle")
        .expect("default subtitle")
        .to_string();

    let mut overrides = ContentTree::new();
    overrides.set("home", "hero", "title", "New Headline");
    assert!(store.save(&overrides));

    let content = store.get_all();
    assert_eq!(content.get("home", "hero", "title"), Some("New Headline"));
    assert_eq!(content.get("home", "hero", "subtitle"), Some(default_subtitle.as_str()));
}

#[test]
fn every_default_field_survives_a_partial_override() {
    let (_, store) = fresh_store();
    let defaults = site_defaults();

    let mut overrides = ContentTree::new();
    overrides.set("contact", "info", "phone", "+1 (809) 555-0199");
    overrides.set("service-relocation", "", "title", "Moving Help");
    assert!(store.save(&overrides));

    let content = store.get_all();
    for (page, sections) in defaults.pages() {
        for (section, fields) in sections {
            for (field, default) in fields {
                let expected = overrides
                    .get(page, section, field)
                    .unwrap_or(default.as_str());
                assert_eq!(content.get(page, section, field), Some(expected));
            }
        }
    }
}

#[test]
fn full_tree_round_trips_exactly() {
    let (_, store) = fresh_store();

    let mut tree = site_defaults();
    tree.set("home", "hero", "title", "Sun, sand and your new home");
    tree.set("service-property-sales", "", "description", "Sell with us");
    tree.set("landing", "promo", "headline", "Open house weekend");

    assert!(store.save(&tree));
    assert_eq!(store.get_all(), tree);
}

#[test]
fn character_indexed_override_self_heals() {
    let (kv, store) = fresh_store();
    kv.set(
        CONTENT_OVERRIDE_KEY,
        r#"{"home":{"hero":{"title":{"0":"N","1":"e","2":"w"}}}}"#,
    )
    .unwrap();

    assert_eq!(store.get_all(), site_defaults());
    assert_eq!(kv.get(CONTENT_OVERRIDE_KEY).unwrap(), None);
}

#[test]
fn repeated_reads_are_equal() {
    let (_, store) = fresh_store();
    let mut tree = ContentTree::new();
    tree.set("about", "story", "title", "Who we are");
    assert!(store.save(&tree));

    assert_eq!(store.get_all(), store.get_all());
}

#[test]
fn listeners_see_fresh_content_on_save() {
    let kv = Arc::new(MemoryStore::new());
    let store = Arc::new(ContentStore::with_site_defaults(kv));
    let seen = Arc::new(AtomicUsize::new(0));

    let reader = Arc::clone(&store);
    let counter = Arc::clone(&seen);
    let subscription = store.subscribe(move || {
        if reader.get_all().get("home", "hero", "title") == Some("Updated") {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    let mut tree = ContentTree::new();
    tree.set("home", "hero", "title", "Updated");
    assert!(store.save(&tree));
    assert_eq!(seen.load(Ordering::SeqCst), 1);

    drop(subscription);
    assert!(store.save(&tree));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn overrides_persist_across_file_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");

    {
        let store = ContentStore::with_site_defaults(Arc::new(FileStore::open(&path).unwrap()));
        let mut tree = ContentTree::new();
        tree.set("footer", "brand", "tagline", "Island living, made simple");
        assert!(store.save(&tree));
    }

    let store = ContentStore::with_site_defaults(Arc::new(FileStore::open(&path).unwrap()));
    assert_eq!(
        store.get_all().get("footer", "brand", "tagline"),
        Some("Island living, made simple")
    );
}
