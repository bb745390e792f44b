//! Record Builders

use chrono::NaiveDate;

use crate::core::fixtures::FixtureStore;
use crate::core::models::{
    BudgetRange, Destination, EntryKind, GalleryItem, GeoPoint, Guide, TimelineEntry,
};

// =============================================================================
// Dates
// =============================================================================

/// `"2024-10-15"` → date. Panics on malformed input.
pub fn date(ymd: &str) -> NaiveDate {
    NaiveDate::parse_from_str(ymd, "%Y-%m-%d").expect("valid test date")
}

// =============================================================================
// Records
// =============================================================================

pub fn photo(id: &str, tags: &[&str], location: &str) -> GalleryItem {
    GalleryItem {
        id: id.to_string(),
        src: format!("https://example.com/{id}.jpg"),
        alt: format!("Photo {id}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        location: location.to_string(),
        date: date("2024-10-15"),
        coordinates: None,
        description: None,
        author: None,
    }
}

pub fn entry(id: &str, ymd: &str, kind: EntryKind) -> TimelineEntry {
    TimelineEntry {
        id: id.to_string(),
        date: date(ymd),
        title: format!("Entry {id}"),
        description: String::new(),
        kind,
        content: format!("https://example.com/{id}"),
        location: None,
        coordinates: None,
        tags: Vec::new(),
    }
}

pub fn guide(id: &str, tags: &[&str]) -> Guide {
    Guide {
        id: id.to_string(),
        title: format!("Guide {id}"),
        destination: "Hulunbuir".to_string(),
        best_season: "Autumn".to_string(),
        days: 5,
        budget: BudgetRange {
            min: 1000,
            max: 3000,
            currency: "CNY".to_string(),
        },
        tags: tags.iter().map(|t| t.to_string()).collect(),
        cover: format!("https://example.com/{id}-cover.jpg"),
        excerpt: format!("About {id}"),
        created_at: None,
        author: None,
        detailed_content: None,
    }
}

pub fn destination(id: &str, name: &str, at: (f64, f64), guides: &[&str]) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        country: "China".to_string(),
        description: String::new(),
        cover: format!("https://example.com/{id}.jpg"),
        tags: Vec::new(),
        coordinates: GeoPoint::new(at.0, at.1),
        photos: Vec::new(),
        guides: guides.iter().map(|g| g.to_string()).collect(),
    }
}

// =============================================================================
// Stores
// =============================================================================

pub fn store_with_guides(guides: Vec<Guide>) -> FixtureStore {
    FixtureStore {
        guides,
        ..FixtureStore::default()
    }
}
