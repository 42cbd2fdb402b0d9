use super::*;
use crate::test_support::{home_sections, podcast, section};

#[test]
fn starts_empty() {
    let store = CatalogStore::new();
    assert!(store.current().is_empty());
    assert!(store.content_type_labels().is_empty());
}

#[test]
fn labels_are_distinct_in_first_seen_order() {
    let mut store = CatalogStore::new();
    store.replace(vec![
        section("A", "episode", Vec::new()),
        section("B", "podcast", Vec::new()),
        section("C", "episode", Vec::new()),
        section("D", "audio_book", Vec::new()),
    ]);
    assert_eq!(
        *store.content_type_labels(),
        vec!["episode", "podcast", "audio_book"]
    );
}

#[test]
fn filter_by_type_preserves_base_order() {
    let mut store = CatalogStore::new();
    store.replace(vec![
        section("First", "podcast", vec![podcast("1", "One")]),
        section("Second", "episode", Vec::new()),
        section("Third", "podcast", vec![podcast("2", "Two")]),
    ]);

    let podcasts = store.filtered(Some("podcast"));
    let names: Vec<_> = podcasts.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Third"]);

    assert_eq!(store.filtered(None).len(), 3);
    assert!(store.filtered(Some("audiobook")).is_empty());
}

#[test]
fn replace_swaps_whole_snapshot_without_touching_held_ones() {
    let mut store = CatalogStore::new();
    store.replace(home_sections());
    let held = store.current();

    store.replace(vec![section("Only", "audiobook", Vec::new())]);

    assert_eq!(held.len(), 2);
    assert_eq!(store.current().len(), 1);
    assert_eq!(*store.content_type_labels(), vec!["audiobook"]);
}
