//! Map Projection Tests

use crate::core::filter::{MarkerFilter, Selection};
use crate::core::fixtures::FixtureStore;
use crate::core::markers::{project, route_path, Viewport, DEFAULT_CENTER};
use crate::core::models::{EntryKind, GeoPoint, MarkerKind, MarkerSource};
use crate::tests::common::{destination, entry, guide};

fn store() -> FixtureStore {
    FixtureStore {
        guides: vec![guide("listed", &[]), guide("named", &[]), guide("orphan", &[])],
        destinations: vec![
            destination("mohe", "Mohe", (52.97, 122.54), &["listed"]),
            destination("hulunbuir", "Hulunbuir", (49.21, 119.76), &[]),
        ],
        ..FixtureStore::default()
    }
}

#[test]
fn test_destinations_then_guides() {
    let markers = project(&store(), &MarkerFilter::default());
    let ids: Vec<&str> = markers.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["dest-mohe", "dest-hulunbuir", "guide-listed", "guide-named", "guide-orphan"]
    );
}

#[test]
fn test_guide_marker_anchors() {
    let mut store = store();
    store.guides[2].destination = "Somewhere else".to_string();
    let markers = project(&store, &MarkerFilter::default());
    let at = |id: &str| {
        markers
            .iter()
            .find(|m| m.source == MarkerSource::Guide(id.to_string()))
            .map(|m| m.coordinates)
    };

    // listed by Mohe
    assert_eq!(at("listed"), Some(GeoPoint::new(52.97, 122.54)));
    // name match on "Hulunbuir"
    assert_eq!(at("named"), Some(GeoPoint::new(49.21, 119.76)));
    // falls back to the first destination
    assert_eq!(at("orphan"), Some(GeoPoint::new(52.97, 122.54)));
}

#[test]
fn test_no_destinations_no_guide_markers() {
    let store = FixtureStore {
        guides: vec![guide("a", &[])],
        ..FixtureStore::default()
    };
    assert!(project(&store, &MarkerFilter::default()).is_empty());
}

#[test]
fn test_marker_kind_filter() {
    let filter = MarkerFilter {
        kind: Selection::Only(MarkerKind::Guide),
    };
    let markers = project(&store(), &filter);
    assert_eq!(markers.len(), 3);
    assert!(markers.iter().all(|m| m.kind == MarkerKind::Guide));
}

#[test]
fn test_route_path_in_date_order() {
    let mut late = entry("late", "2024-11-05", EntryKind::Video);
    late.coordinates = Some(GeoPoint::new(52.0, 122.0));
    let mut early = entry("early", "2024-10-15", EntryKind::Photo);
    early.coordinates = Some(GeoPoint::new(42.0, 128.0));
    let unlocated = entry("none", "2024-10-20", EntryKind::Photo);

    let path = route_path(&[late, unlocated, early]);
    assert_eq!(path, vec![GeoPoint::new(42.0, 128.0), GeoPoint::new(52.0, 122.0)]);
}

#[test]
fn test_viewport_projection() {
    let points = [GeoPoint::new(40.0, 120.0), GeoPoint::new(50.0, 130.0)];
    let viewport = Viewport::fit(&points);

    let (x, y) = viewport.project(GeoPoint::new(50.0, 120.0));
    assert!(x < 0.5 && y < 0.5, "north-west corner maps top-left");
    let (cx, cy) = viewport.project(viewport.center());
    assert!((cx - 0.5).abs() < 1e-9 && (cy - 0.5).abs() < 1e-9);

    assert_eq!(Viewport::fit(&[]).center(), DEFAULT_CENTER);
}
