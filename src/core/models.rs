//! Fixture Records
//!
//! Typed schema for the bundled JSON fixtures: gallery photos, timeline
//! entries, travel guides (with optional detailed content) and destinations,
//! plus the map markers projected from them.
//!
//! Optional nested content is modelled with `Option` and `#[serde(default)]`
//! so defaulting happens once, when the fixtures are parsed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared Types
// ============================================================================

/// A WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Records that carry an ordered tag list.
pub trait Tagged {
    fn tags(&self) -> &[String];

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

// ============================================================================
// Gallery
// ============================================================================

/// A photo in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub src: String,
    /// Display caption.
    pub alt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub location: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl Tagged for GalleryItem {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// Kind of a timeline post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Picture post.
    Photo,
    /// Clip post.
    Video,
    /// Reference to a travel guide.
    Guide,
}

/// How a content reference is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl EntryKind {
    pub const ALL: [EntryKind; 3] = [EntryKind::Photo, EntryKind::Video, EntryKind::Guide];

    pub fn media_kind(self) -> MediaKind {
        match self {
            EntryKind::Video => MediaKind::Video,
            EntryKind::Photo | EntryKind::Guide => MediaKind::Image,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Photo => "Photos",
            EntryKind::Video => "Videos",
            EntryKind::Guide => "Guides",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            EntryKind::Photo => "📷",
            EntryKind::Video => "🎬",
            EntryKind::Guide => "📖",
        }
    }
}

/// A dated post on the trip timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Image or video URL, depending on `kind`.
    pub content: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Tagged for TimelineEntry {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

// ============================================================================
// Guides
// ============================================================================

/// Budget range of a guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

impl BudgetRange {
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max
    }
}

/// A travel guide as listed on the guides page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub best_season: String,
    /// Trip length in days.
    pub days: u32,
    pub budget: BudgetRange,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub detailed_content: Option<GuideDetail>,
}

impl Tagged for Guide {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Long-form content of a guide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuideDetail {
    pub overview: String,
    pub route_description: String,
    pub timeline: Vec<DayPlan>,
    pub highlights: Vec<Highlight>,
    pub tips: Vec<TipGroup>,
    pub budget_details: Option<BudgetBreakdown>,
}

/// One day of a guide itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    /// Origin label.
    pub start: String,
    /// Destination label.
    pub end: String,
    /// Driving distance in km.
    pub distance: f64,
    /// Driving duration in hours.
    pub hours: f64,
    pub plan: Vec<String>,
    /// Lodging suggestion.
    pub stay: String,
    /// Dining suggestion.
    pub food: String,
    /// Ticket price note.
    pub ticket: String,
    pub best_time: String,
    pub photo_tip: String,
    /// Caution note.
    pub notice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipGroup {
    pub category: String,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTierKind {
    Economic,
    Standard,
    Luxury,
}

impl BudgetTierKind {
    pub fn label(self) -> &'static str {
        match self {
            BudgetTierKind::Economic => "Economic",
            BudgetTierKind::Standard => "Standard",
            BudgetTierKind::Luxury => "Luxury",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetTier {
    pub amount: u32,
    pub description: String,
    pub items: Vec<String>,
    pub suitable_for: String,
}

/// Per-tier budget estimate of a guide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub economic: BudgetTier,
    pub standard: BudgetTier,
    pub luxury: BudgetTier,
    pub money_saving_tips: Vec<String>,
}

impl BudgetBreakdown {
    /// Tiers from cheapest to most expensive.
    pub fn tiers(&self) -> [(BudgetTierKind, &BudgetTier); 3] {
        [
            (BudgetTierKind::Economic, &self.economic),
            (BudgetTierKind::Standard, &self.standard),
            (BudgetTierKind::Luxury, &self.luxury),
        ]
    }
}

// ============================================================================
// Destinations & Map
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub description: String,
    pub cover: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub coordinates: GeoPoint,
    /// Ids of gallery photos taken here.
    #[serde(default)]
    pub photos: Vec<String>,
    /// Ids of guides visiting this destination.
    #[serde(default)]
    pub guides: Vec<String>,
}

impl Tagged for Destination {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Destination,
    Guide,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 2] = [MarkerKind::Destination, MarkerKind::Guide];

    pub fn label(self) -> &'static str {
        match self {
            MarkerKind::Destination => "Destinations",
            MarkerKind::Guide => "Guide routes",
        }
    }
}

/// Back-reference from a marker to the record it was projected from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerSource {
    Destination(String),
    Guide(String),
}

/// A point on the travel map. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: String,
    pub kind: MarkerKind,
    pub coordinates: GeoPoint,
    pub title: String,
    pub description: String,
    pub source: MarkerSource,
}
