//! Property-based tests for routing
//!
//! Tests invariants:
//! - `Route::parse(route.path())` returns the same route
//! - Trailing slashes do not change the parsed route
//! - A header item is active for its own path

use proptest::prelude::*;

use crate::core::routes::{Route, NAV_ITEMS};

fn arb_route() -> impl Strategy<Value = Route> {
    prop_oneof![
        Just(Route::Home),
        Just(Route::Map),
        Just(Route::Timeline),
        Just(Route::Photos),
        Just(Route::Guides),
        Just(Route::Destinations),
        "[a-z0-9][a-z0-9-]{0,20}".prop_map(|id| Route::GuideDetail { id }),
    ]
}

proptest! {
    #[test]
    fn prop_parse_path_roundtrip(route in arb_route()) {
        prop_assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn prop_trailing_slash_ignored(route in arb_route()) {
        let path = format!("{}/", route.path());
        prop_assert_eq!(Route::parse(&path), route);
    }

    #[test]
    fn prop_unknown_top_level_is_not_found(segment in "x[a-z]{1,8}") {
        prop_assert_eq!(Route::parse(&format!("/{segment}")), Route::NotFound);
    }
}

#[test]
fn test_nav_items_active_for_own_path() {
    for item in NAV_ITEMS {
        assert!(Route::is_active(item.path, item.path));
        assert_eq!(Route::parse(item.path).path(), item.path);
    }
}
