//! Map Projection
//!
//! Derives map markers from destinations and guides, the trip polyline from
//! the timeline, and a simple equirectangular viewport used to place points
//! on SVG and terminal canvases.

use tracing::debug;

use super::filter::{derive, MarkerFilter};
use super::fixtures::FixtureStore;
use super::models::{
    Destination, GeoPoint, Guide, MapMarker, MarkerKind, MarkerSource, TimelineEntry,
};

/// Initial map center.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(45.0, 125.0);
/// Initial map zoom level.
pub const DEFAULT_ZOOM: u8 = 6;

// ============================================================================
// Markers
// ============================================================================

/// Markers for `store` that pass `filter`: destinations first, then guides.
pub fn project(store: &FixtureStore, filter: &MarkerFilter) -> Vec<MapMarker> {
    let mut markers = Vec::with_capacity(store.destinations.len() + store.guides.len());

    markers.extend(store.destinations.iter().map(destination_marker));
    markers.extend(
        store
            .guides
            .iter()
            .filter_map(|guide| guide_marker(guide, &store.destinations)),
    );

    let visible: Vec<MapMarker> = derive(&markers, filter).into_iter().cloned().collect();
    debug!(total = markers.len(), visible = visible.len(), "Projected map markers");
    visible
}

fn destination_marker(dest: &Destination) -> MapMarker {
    MapMarker {
        id: format!("dest-{}", dest.id),
        kind: MarkerKind::Destination,
        coordinates: dest.coordinates,
        title: dest.name.clone(),
        description: dest.description.clone(),
        source: MarkerSource::Destination(dest.id.clone()),
    }
}

fn guide_marker(guide: &Guide, destinations: &[Destination]) -> Option<MapMarker> {
    let anchor = guide_anchor(guide, destinations)?;
    Some(MapMarker {
        id: format!("guide-{}", guide.id),
        kind: MarkerKind::Guide,
        coordinates: anchor.coordinates,
        title: guide.title.clone(),
        description: format!("{} days · {}", guide.days, guide.best_season),
        source: MarkerSource::Guide(guide.id.clone()),
    })
}

/// Destination a guide marker is pinned to.
///
/// Prefers the destination that lists the guide, then one whose name occurs
/// in the guide's destination label, then the first destination.
pub fn guide_anchor<'a>(guide: &Guide, destinations: &'a [Destination]) -> Option<&'a Destination> {
    destinations
        .iter()
        .find(|d| d.guides.iter().any(|g| *g == guide.id))
        .or_else(|| {
            destinations
                .iter()
                .find(|d| guide.destination.contains(d.name.as_str()))
        })
        .or_else(|| destinations.first())
}

/// Trip polyline: located timeline entries in date order.
pub fn route_path(timeline: &[TimelineEntry]) -> Vec<GeoPoint> {
    let mut located: Vec<&TimelineEntry> =
        timeline.iter().filter(|e| e.coordinates.is_some()).collect();
    located.sort_by_key(|e| e.date);
    located.into_iter().filter_map(|e| e.coordinates).collect()
}

// ============================================================================
// Viewport
// ============================================================================

/// Geographic bounding box mapped onto a unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Viewport {
    /// Degrees added around the fitted points.
    pub const PADDING: f64 = 1.5;
    /// Span used when there is nothing to fit.
    const DEFAULT_SPAN: f64 = 10.0;

    /// Box centered on `center` spanning `span` degrees each way.
    pub fn around(center: GeoPoint, span: f64) -> Self {
        let half = span / 2.0;
        Self {
            min_lat: center.lat - half,
            max_lat: center.lat + half,
            min_lng: center.lng - half,
            max_lng: center.lng + half,
        }
    }

    /// Smallest padded box containing every point; the default view when
    /// `points` is empty.
    pub fn fit<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::around(DEFAULT_CENTER, Self::DEFAULT_SPAN);
        };
        let mut vp = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };
        for p in iter {
            vp.min_lat = vp.min_lat.min(p.lat);
            vp.max_lat = vp.max_lat.max(p.lat);
            vp.min_lng = vp.min_lng.min(p.lng);
            vp.max_lng = vp.max_lng.max(p.lng);
        }
        vp.min_lat -= Self::PADDING;
        vp.max_lat += Self::PADDING;
        vp.min_lng -= Self::PADDING;
        vp.max_lng += Self::PADDING;
        vp
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Position of `point` in the unit square, `(0, 0)` top-left. Points
    /// outside the box fall outside `[0, 1]`.
    pub fn project(&self, point: GeoPoint) -> (f64, f64) {
        let lng_span = (self.max_lng - self.min_lng).max(f64::EPSILON);
        let lat_span = (self.max_lat - self.min_lat).max(f64::EPSILON);
        let x = (point.lng - self.min_lng) / lng_span;
        let y = (self.max_lat - point.lat) / lat_span;
        (x, y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::around(DEFAULT_CENTER, Self::DEFAULT_SPAN)
    }
}
