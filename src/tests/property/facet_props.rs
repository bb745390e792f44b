//! Property-based tests for facet extraction
//!
//! Tests invariants:
//! - Every facet value is present in at least one record
//! - Facet lists contain no duplicates
//! - Every record value appears in the facet list

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::facets;
use crate::core::models::{EntryKind, GalleryItem, Tagged, TimelineEntry};
use crate::tests::common::{entry, photo};

fn arb_photos() -> impl Strategy<Value = Vec<GalleryItem>> {
    prop::collection::vec(
        (prop::collection::vec("[a-c]{1,2}", 0..4), "[A-C][a-z]{0,3}"),
        0..15,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (tags, loc))| {
                let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                photo(&format!("p{i}"), &tags, &loc)
            })
            .collect()
    })
}

fn arb_timeline() -> impl Strategy<Value = Vec<TimelineEntry>> {
    prop::collection::vec((2020i32..=2025, 1u32..=12, 0usize..3), 0..15).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (y, m, k))| entry(&format!("t{i}"), &format!("{y}-{m:02}-01"), EntryKind::ALL[k]))
            .collect()
    })
}

fn no_duplicates<T: std::hash::Hash + Eq>(values: &[T]) -> bool {
    values.iter().collect::<HashSet<_>>().len() == values.len()
}

proptest! {
    #[test]
    fn prop_tags_are_sound(photos in arb_photos()) {
        let tags = facets::tags(&photos);
        prop_assert!(no_duplicates(&tags));
        for tag in &tags {
            prop_assert!(photos.iter().any(|p| p.has_tag(tag)));
        }
        for p in &photos {
            for tag in p.tags() {
                prop_assert!(tags.contains(tag));
            }
        }
    }

    #[test]
    fn prop_locations_are_sound(photos in arb_photos()) {
        let locations = facets::locations(&photos);
        prop_assert!(no_duplicates(&locations));
        for loc in &locations {
            prop_assert!(photos.iter().any(|p| &p.location == loc));
        }
    }

    #[test]
    fn prop_years_sound_and_descending(timeline in arb_timeline()) {
        let years = facets::years(&timeline);
        prop_assert!(no_duplicates(&years));
        prop_assert!(years.windows(2).all(|w| w[0] > w[1]));
        for y in &years {
            prop_assert!(timeline.iter().any(|e| &e.date.format("%Y").to_string() == y));
        }
    }

    #[test]
    fn prop_entry_kinds_sound(timeline in arb_timeline()) {
        let kinds = facets::entry_kinds(&timeline);
        prop_assert!(no_duplicates(&kinds));
        for k in &kinds {
            prop_assert!(timeline.iter().any(|e| e.kind == *k));
        }
    }
}
