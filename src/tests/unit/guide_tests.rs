//! Guide Tests

use crate::core::filter::{derive, GuideFilter, Selection};
use crate::core::fixtures::FixtureStore;
use crate::core::present::{GuideCard, GuideDetailView};
use crate::core::routes::{resolve_guide, GuidePage, Route};
use crate::tests::common::{guide, store_with_guides};

#[test]
fn test_missing_guide_resolves_to_not_found() {
    let store = store_with_guides(vec![guide("a", &[]), guide("b", &[])]);

    match resolve_guide(&store, "x") {
        GuidePage::NotFound { id } => assert_eq!(id, "x"),
        GuidePage::Found(g) => panic!("unexpected guide {}", g.id),
    }
    assert!(matches!(resolve_guide(&store, "b"), GuidePage::Found(g) if g.id == "b"));
}

#[test]
fn test_missing_guide_on_empty_store() {
    let store = FixtureStore::default();
    assert!(matches!(resolve_guide(&store, "x"), GuidePage::NotFound { .. }));
}

#[test]
fn test_detail_route_roundtrip() {
    let route = Route::parse("/guides/hulunbuir-loop");
    assert_eq!(
        route,
        Route::GuideDetail {
            id: "hulunbuir-loop".to_string()
        }
    );
    assert_eq!(route.path(), "/guides/hulunbuir-loop");
    assert!(Route::is_active("/guides", &route.path()));
    assert!(!Route::is_active("/", &route.path()));
}

#[test]
fn test_guide_tag_filter() {
    let guides = vec![guide("a", &["grassland"]), guide("b", &["winter"])];
    let filter = GuideFilter {
        tag: Selection::Only("winter".to_string()),
    };
    let ids: Vec<&str> = derive(&guides, &filter).iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn test_summary_only_guide_renders_defaults() {
    let summary = guide("plain", &["city"]);
    let view = GuideDetailView::new(&summary);

    assert_eq!(view.overview, summary.excerpt);
    assert_eq!(view.author, "—");
    assert!(view.days.is_empty());
    assert!(view.highlights.is_empty());
    assert!(view.budget.is_empty());
    assert_eq!(view.card, GuideCard::new(&summary));
}

#[test]
fn test_partial_detail_keeps_present_sections() {
    let store = FixtureStore::bundled();
    let partial = store.guide("northeast-loop").expect("bundled guide");
    let view = GuideDetailView::new(partial);
    let ids: Vec<&str> = view.sections().iter().map(|(id, _)| *id).collect();
    assert!(ids.contains(&"timeline"));
    assert!(!ids.contains(&"budget"));
}

#[test]
fn test_card_budget_label() {
    let card = GuideCard::new(&guide("a", &[]));
    assert_eq!(card.budget, "¥1,000 - ¥3,000");
    assert_eq!(card.meta, "Hulunbuir · Autumn · 5 days");
}
