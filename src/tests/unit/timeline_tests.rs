//! Timeline Filter Tests

use crate::core::facets;
use crate::core::filter::{derive, Selection, TimelineFilter};
use crate::core::models::EntryKind;
use crate::core::present::TimelineCard;
use crate::tests::common::entry;

#[test]
fn test_year_and_month_select_single_entry() {
    let timeline = vec![
        entry("oct", "2024-10-15", EntryKind::Photo),
        entry("nov", "2024-11-05", EntryKind::Video),
    ];
    let filter = TimelineFilter {
        year: Selection::Only("2024".to_string()),
        month: Selection::Only("10".to_string()),
        ..Default::default()
    };

    let ids: Vec<&str> = derive(&timeline, &filter).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["oct"]);
}

#[test]
fn test_month_without_year_spans_years() {
    let timeline = vec![
        entry("a", "2023-10-01", EntryKind::Photo),
        entry("b", "2024-10-02", EntryKind::Photo),
        entry("c", "2024-09-30", EntryKind::Photo),
    ];
    let filter = TimelineFilter {
        month: Selection::Only("10".to_string()),
        ..Default::default()
    };
    assert_eq!(derive(&timeline, &filter).len(), 2);
}

#[test]
fn test_kind_filter() {
    let timeline = vec![
        entry("a", "2024-10-01", EntryKind::Photo),
        entry("b", "2024-10-02", EntryKind::Video),
        entry("c", "2024-10-03", EntryKind::Guide),
    ];
    let filter = TimelineFilter {
        kind: Selection::Only(EntryKind::Video),
        ..Default::default()
    };
    let ids: Vec<&str> = derive(&timeline, &filter).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn test_years_newest_first() {
    let timeline = vec![
        entry("a", "2023-12-28", EntryKind::Photo),
        entry("b", "2024-10-02", EntryKind::Photo),
        entry("c", "2023-01-01", EntryKind::Photo),
    ];
    assert_eq!(facets::years(&timeline), vec!["2024", "2023"]);
}

#[test]
fn test_month_facet_is_calendar() {
    let months = facets::month_values();
    assert_eq!(months.len(), 12);
    assert_eq!(months[0], "01");
    assert_eq!(facets::month_label("10"), Some("October"));
    assert_eq!(facets::month_label("13"), None);
}

#[test]
fn test_card_without_location_shows_placeholder() {
    let card = TimelineCard::new(&entry("a", "2024-11-05", EntryKind::Video));
    assert_eq!(card.location, "—");
    assert_eq!(card.day_badge, "5");
    assert_eq!(card.date, "November 5, 2024");
    assert!(card.media.is_video());
}
