//! Property-based tests for filter derivation
//!
//! Tests invariants:
//! - Result is a subsequence of the input, in input order
//! - Applying the same filter twice gives the same result
//! - All-sentinel filters return the input unchanged
//! - Every kept record matches, every dropped record does not

use proptest::prelude::*;

use crate::core::filter::{derive, GalleryFilter, RecordFilter, Selection, TimelineFilter};
use crate::core::models::{EntryKind, GalleryItem, TimelineEntry};
use crate::tests::common::{entry, photo};

// ============================================================================
// Strategies
// ============================================================================

const TAGS: [&str; 5] = ["sunset", "lake", "city", "forest", "aurora"];
const LOCATIONS: [&str; 3] = ["Mohe", "Hulunbuir", "Arxan"];

fn arb_photos() -> impl Strategy<Value = Vec<GalleryItem>> {
    prop::collection::vec(
        (prop::sample::subsequence(TAGS.to_vec(), 0..=3), 0..LOCATIONS.len()),
        0..20,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (tags, loc))| photo(&format!("p{i}"), &tags, LOCATIONS[loc]))
            .collect()
    })
}

fn arb_selection(values: &'static [&'static str]) -> impl Strategy<Value = Selection<String>> {
    prop_oneof![
        Just(Selection::All),
        prop::sample::select(values).prop_map(|v| Selection::Only(v.to_string())),
    ]
}

fn arb_gallery_filter() -> impl Strategy<Value = GalleryFilter> {
    (arb_selection(&TAGS), arb_selection(&LOCATIONS))
        .prop_map(|(tag, location)| GalleryFilter { tag, location })
}

fn arb_timeline() -> impl Strategy<Value = Vec<TimelineEntry>> {
    prop::collection::vec((2022i32..=2024, 1u32..=12, 1u32..=28, 0usize..3), 0..20).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (y, m, d, k))| {
                    entry(&format!("t{i}"), &format!("{y}-{m:02}-{d:02}"), EntryKind::ALL[k])
                })
                .collect()
        },
    )
}

fn arb_timeline_filter() -> impl Strategy<Value = TimelineFilter> {
    (
        arb_selection(&["2022", "2023", "2024"]),
        arb_selection(&["01", "06", "10", "11", "12"]),
        prop_oneof![
            Just(Selection::All),
            prop::sample::select(EntryKind::ALL.to_vec()).prop_map(Selection::Only),
        ],
    )
        .prop_map(|(year, month, kind)| TimelineFilter { year, month, kind })
}

/// Whether `sub` appears in `full` in the same relative order.
fn is_subsequence<T: PartialEq>(sub: &[&T], full: &[T]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|s| rest.any(|f| f == *s))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_gallery_subset_is_subsequence(photos in arb_photos(), filter in arb_gallery_filter()) {
        let subset = derive(&photos, &filter);
        prop_assert!(subset.len() <= photos.len());
        prop_assert!(is_subsequence(&subset, &photos));
    }

    #[test]
    fn prop_gallery_derive_is_idempotent(photos in arb_photos(), filter in arb_gallery_filter()) {
        let once: Vec<GalleryItem> = derive(&photos, &filter).into_iter().cloned().collect();
        let twice: Vec<GalleryItem> = derive(&once, &filter).into_iter().cloned().collect();
        prop_assert_eq!(&once, &twice);
        let again: Vec<GalleryItem> = derive(&photos, &filter).into_iter().cloned().collect();
        prop_assert_eq!(once, again);
    }

    #[test]
    fn prop_gallery_all_sentinel_is_identity(photos in arb_photos()) {
        let subset = derive(&photos, &GalleryFilter::default());
        prop_assert_eq!(subset.len(), photos.len());
        prop_assert!(subset.iter().zip(photos.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn prop_gallery_partition_by_match(photos in arb_photos(), filter in arb_gallery_filter()) {
        let subset = derive(&photos, &filter);
        let kept = photos.iter().filter(|p| filter.matches(p)).count();
        prop_assert_eq!(subset.len(), kept);
    }

    #[test]
    fn prop_timeline_subset_is_subsequence(timeline in arb_timeline(), filter in arb_timeline_filter()) {
        let subset = derive(&timeline, &filter);
        prop_assert!(is_subsequence(&subset, &timeline));
        for e in &subset {
            prop_assert!(filter.matches(e));
        }
    }

    #[test]
    fn prop_timeline_all_sentinel_is_identity(timeline in arb_timeline()) {
        let subset = derive(&timeline, &TimelineFilter::default());
        prop_assert_eq!(subset.len(), timeline.len());
    }
}
