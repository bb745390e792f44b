//! Facet extraction: the option lists offered by each filter control.
//!
//! Every list is deduplicated and only contains values that occur in the
//! records it was computed from. Order is first-seen, except for years which
//! are newest first.

use indexmap::IndexSet;

use super::models::{EntryKind, GalleryItem, MapMarker, MarkerKind, Tagged, TimelineEntry};

/// Month options for the timeline, offered regardless of data.
pub const MONTHS: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

/// Month values (`"01"`..`"12"`) for cycling the month selection.
pub fn month_values() -> Vec<String> {
    MONTHS.iter().map(|(value, _)| value.to_string()).collect()
}

/// Label for a zero-padded month value.
pub fn month_label(value: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

/// Distinct tags across `records`, flattened in first-seen order.
pub fn tags<R: Tagged>(records: &[R]) -> Vec<String> {
    let set: IndexSet<&str> = records
        .iter()
        .flat_map(|r| r.tags().iter().map(String::as_str))
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Distinct photo locations in first-seen order.
pub fn locations(photos: &[GalleryItem]) -> Vec<String> {
    let set: IndexSet<&str> = photos.iter().map(|p| p.location.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Distinct entry years, newest first.
pub fn years(timeline: &[TimelineEntry]) -> Vec<String> {
    let set: IndexSet<String> = timeline
        .iter()
        .map(|e| e.date.format("%Y").to_string())
        .collect();
    let mut years: Vec<String> = set.into_iter().collect();
    // four-digit years sort correctly as strings
    years.sort_unstable_by(|a, b| b.cmp(a));
    years
}

/// Entry kinds present in the timeline, in first-seen order.
pub fn entry_kinds(timeline: &[TimelineEntry]) -> Vec<EntryKind> {
    let set: IndexSet<EntryKind> = timeline.iter().map(|e| e.kind).collect();
    set.into_iter().collect()
}

/// Marker kinds present in a projection, in first-seen order.
pub fn marker_kinds(markers: &[MapMarker]) -> Vec<MarkerKind> {
    let set: IndexSet<MarkerKind> = markers.iter().map(|m| m.kind).collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: &str, date: (i32, u32, u32), kind: EntryKind, tags: &[&str]) -> TimelineEntry {
        TimelineEntry {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            title: id.into(),
            description: String::new(),
            kind,
            content: String::new(),
            location: None,
            coordinates: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_tags_first_seen_without_duplicates() {
        let timeline = vec![
            entry("a", (2024, 10, 1), EntryKind::Photo, &["lake", "autumn"]),
            entry("b", (2024, 10, 2), EntryKind::Photo, &["autumn", "forest"]),
        ];
        assert_eq!(tags(&timeline), vec!["lake", "autumn", "forest"]);
    }

    #[test]
    fn test_years_descending() {
        let timeline = vec![
            entry("a", (2023, 1, 1), EntryKind::Photo, &[]),
            entry("b", (2024, 5, 1), EntryKind::Video, &[]),
            entry("c", (2023, 7, 1), EntryKind::Photo, &[]),
        ];
        assert_eq!(years(&timeline), vec!["2024", "2023"]);
    }

    #[test]
    fn test_entry_kinds_first_seen() {
        let timeline = vec![
            entry("a", (2024, 1, 1), EntryKind::Video, &[]),
            entry("b", (2024, 1, 2), EntryKind::Photo, &[]),
            entry("c", (2024, 1, 3), EntryKind::Video, &[]),
        ];
        assert_eq!(entry_kinds(&timeline), vec![EntryKind::Video, EntryKind::Photo]);
    }

    #[test]
    fn test_empty_input_yields_no_options() {
        let none: Vec<TimelineEntry> = vec![];
        assert!(tags(&none).is_empty());
        assert!(years(&none).is_empty());
        assert!(locations(&[]).is_empty());
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(MONTHS.len(), 12);
        assert_eq!(month_label("10"), Some("October"));
        assert_eq!(month_label("13"), None);
        assert_eq!(month_values().first().map(String::as_str), Some("01"));
    }
}
