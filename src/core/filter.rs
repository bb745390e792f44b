//! Filtered-Collection Derivation
//!
//! Narrows a fixture sequence to the records matching every active facet
//! selection. Each view owns one filter state; the derived subset is
//! recomputed from scratch on every change (collections hold tens of
//! records, so a linear scan is all that is needed).
//!
//! Matching rules:
//! - tag facets match by membership in the record's tag list
//! - location and kind facets match by raw equality
//! - year and month facets compare the display-formatted date (`%Y`, `%m`)

use serde::{Deserialize, Serialize};

use super::models::{
    EntryKind, GalleryItem, Guide, MapMarker, MarkerKind, Tagged, TimelineEntry,
};

// ============================================================================
// Selection
// ============================================================================

/// A single facet selection: the "all" sentinel or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Whether `value` satisfies this selection.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }
}

impl<T: PartialEq + Clone> Selection<T> {
    /// Step through `options`: All → first → … → last → All.
    ///
    /// A selection that is no longer among `options` restarts at All.
    pub fn cycle(&self, options: &[T]) -> Selection<T> {
        match self {
            Selection::All => options
                .first()
                .cloned()
                .map_or(Selection::All, Selection::Only),
            Selection::Only(current) => {
                match options.iter().position(|o| o == current) {
                    Some(idx) if idx + 1 < options.len() => Selection::Only(options[idx + 1].clone()),
                    _ => Selection::All,
                }
            }
        }
    }
}

impl Selection<String> {
    /// Parse a form value where `"all"` is the sentinel.
    pub fn from_value(value: &str) -> Self {
        if value == "all" || value.is_empty() {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    /// Form value for this selection.
    pub fn value(&self) -> &str {
        match self {
            Selection::All => "all",
            Selection::Only(v) => v,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// A filter state over records of type `R`.
pub trait RecordFilter<R> {
    fn matches(&self, record: &R) -> bool;

    /// True when every facet is the "all" sentinel.
    fn is_unconstrained(&self) -> bool;
}

/// The ordered subsequence of `records` accepted by `filter`.
pub fn derive<'a, R, F>(records: &'a [R], filter: &F) -> Vec<&'a R>
where
    F: RecordFilter<R> + ?Sized,
{
    if filter.is_unconstrained() {
        return records.iter().collect();
    }
    records.iter().filter(|r| filter.matches(r)).collect()
}

fn tag_accepts<R: Tagged>(selection: &Selection<String>, record: &R) -> bool {
    match selection {
        Selection::All => true,
        Selection::Only(tag) => record.has_tag(tag),
    }
}

// ============================================================================
// Filter States
// ============================================================================

/// Photo gallery facets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub tag: Selection<String>,
    pub location: Selection<String>,
}

impl RecordFilter<GalleryItem> for GalleryFilter {
    fn matches(&self, photo: &GalleryItem) -> bool {
        tag_accepts(&self.tag, photo) && self.location.accepts(&photo.location)
    }

    fn is_unconstrained(&self) -> bool {
        self.tag.is_all() && self.location.is_all()
    }
}

/// Timeline facets. Year and month are the zero-padded display strings
/// (`"2024"`, `"10"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineFilter {
    pub year: Selection<String>,
    pub month: Selection<String>,
    pub kind: Selection<EntryKind>,
}

impl RecordFilter<TimelineEntry> for TimelineFilter {
    fn matches(&self, entry: &TimelineEntry) -> bool {
        let year_ok = match &self.year {
            Selection::All => true,
            Selection::Only(y) => entry.date.format("%Y").to_string() == *y,
        };
        let month_ok = match &self.month {
            Selection::All => true,
            Selection::Only(m) => entry.date.format("%m").to_string() == *m,
        };
        year_ok && month_ok && self.kind.accepts(&entry.kind)
    }

    fn is_unconstrained(&self) -> bool {
        self.year.is_all() && self.month.is_all() && self.kind.is_all()
    }
}

/// Guide list facets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideFilter {
    pub tag: Selection<String>,
}

impl RecordFilter<Guide> for GuideFilter {
    fn matches(&self, guide: &Guide) -> bool {
        tag_accepts(&self.tag, guide)
    }

    fn is_unconstrained(&self) -> bool {
        self.tag.is_all()
    }
}

/// Map layer facets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerFilter {
    pub kind: Selection<MarkerKind>,
}

impl MarkerFilter {
    pub fn includes(&self, kind: MarkerKind) -> bool {
        self.kind.accepts(&kind)
    }
}

impl RecordFilter<MapMarker> for MarkerFilter {
    fn matches(&self, marker: &MapMarker) -> bool {
        self.includes(marker.kind)
    }

    fn is_unconstrained(&self) -> bool {
        self.kind.is_all()
    }
}
