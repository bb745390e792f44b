//! Gallery Filter Tests

use crate::core::facets;
use crate::core::filter::{derive, GalleryFilter, RecordFilter, Selection};
use crate::core::present::GalleryStats;
use crate::core::viewer::{Viewer, ViewerCommand};
use crate::tests::common::photo;

#[test]
fn test_tag_filter_keeps_matching_photos_in_order() {
    let photos = vec![
        photo("a", &["sunset", "lake"], "Hulunbuir"),
        photo("b", &["city"], "Harbin"),
        photo("c", &["sunset"], "Mohe"),
    ];
    let filter = GalleryFilter {
        tag: Selection::Only("sunset".to_string()),
        ..Default::default()
    };

    let ids: Vec<&str> = derive(&photos, &filter).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_tag_and_location_combine() {
    let photos = vec![
        photo("a", &["sunset"], "Hulunbuir"),
        photo("b", &["sunset"], "Mohe"),
        photo("c", &["lake"], "Mohe"),
    ];
    let filter = GalleryFilter {
        tag: Selection::Only("sunset".to_string()),
        location: Selection::Only("Mohe".to_string()),
    };

    let ids: Vec<&str> = derive(&photos, &filter).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
    assert!(!filter.is_unconstrained());
}

#[test]
fn test_unknown_tag_yields_empty_subset() {
    let photos = vec![photo("a", &["sunset"], "Mohe")];
    let filter = GalleryFilter {
        tag: Selection::from_value("glacier"),
        ..Default::default()
    };
    assert!(derive(&photos, &filter).is_empty());
}

#[test]
fn test_form_value_all_is_sentinel() {
    assert!(Selection::from_value("all").is_all());
    assert_eq!(Selection::Only("lake".to_string()).value(), "lake");
    assert_eq!(Selection::<String>::All.value(), "all");
}

#[test]
fn test_facets_first_seen_order() {
    let photos = vec![
        photo("a", &["sunset", "lake"], "Hulunbuir"),
        photo("b", &["city", "sunset"], "Harbin"),
        photo("c", &["lake"], "Hulunbuir"),
    ];
    assert_eq!(facets::tags(&photos), vec!["sunset", "lake", "city"]);
    assert_eq!(facets::locations(&photos), vec!["Hulunbuir", "Harbin"]);

    let stats = GalleryStats::new(&photos);
    assert_eq!((stats.photos, stats.tags, stats.locations), (3, 3, 2));
}

#[test]
fn test_viewer_reconciled_after_narrowing() {
    let photos = vec![
        photo("a", &["sunset"], "Mohe"),
        photo("b", &["city"], "Harbin"),
        photo("c", &["city"], "Harbin"),
    ];
    let mut viewer = Viewer::new();
    viewer.apply(ViewerCommand::Open(2), photos.len());

    let filter = GalleryFilter {
        tag: Selection::Only("sunset".to_string()),
        ..Default::default()
    };
    let subset = derive(&photos, &filter);
    assert!(viewer.reconcile(subset.len()));
    assert_eq!(viewer.index(), Some(0));
    assert_eq!(viewer.current(&subset).map(|p| p.id.as_str()), Some("a"));

    assert!(viewer.reconcile(0));
    assert!(!viewer.is_open());
}
