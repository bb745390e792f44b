//! View models
//!
//! Pure, already-defaulted data that both the web and the terminal surfaces
//! render. Missing optional content is resolved here once so render code never
//! branches on absent fields.

use chrono::NaiveDate;

use super::media::{ImageSource, MediaView};
use super::models::{
    BudgetBreakdown, BudgetRange, DayPlan, GalleryItem, Guide, GuideDetail, Highlight,
    TimelineEntry, TipGroup,
};

/// Placeholder for absent text.
pub const EMPTY: &str = "—";

pub const GUIDE_CARD_TAGS: usize = 4;
pub const PHOTO_CARD_TAGS: usize = 3;

/// Section anchors of the guide page, in page order.
pub const SECTIONS: [(&str, &str); 6] = [
    ("stats", "At a glance"),
    ("overview", "Overview"),
    ("timeline", "Itinerary"),
    ("highlights", "Highlights"),
    ("budget", "Budget"),
    ("tips", "Tips"),
];

// ============================================================================
// Formatting
// ============================================================================

/// `4500` → `"4,500"`.
pub fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "CNY" | "RMB" => Some("¥"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

pub fn money(amount: u32, currency: &str) -> String {
    match currency_symbol(currency) {
        Some(symbol) => format!("{symbol}{}", thousands(amount)),
        None => format!("{currency} {}", thousands(amount)),
    }
}

/// `"¥4,500 - ¥8,000"`.
pub fn budget_label(budget: &BudgetRange) -> String {
    format!(
        "{} - {}",
        money(budget.min, &budget.currency),
        money(budget.max, &budget.currency)
    )
}

/// `"October 15, 2024"`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `"Oct 15, 2024"`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn or_empty(value: &str) -> String {
    if value.trim().is_empty() {
        EMPTY.to_string()
    } else {
        value.to_string()
    }
}

fn first_tags(tags: &[String], n: usize) -> Vec<String> {
    tags.iter().take(n).cloned().collect()
}

// ============================================================================
// Cards
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct GuideCard {
    pub id: String,
    pub title: String,
    /// `"Hulunbuir · September - October · 7 days"`.
    pub meta: String,
    pub destination: String,
    pub best_season: String,
    pub days: u32,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub budget: String,
    pub cover: String,
    pub href: String,
}

impl GuideCard {
    pub fn new(guide: &Guide) -> Self {
        Self {
            id: guide.id.clone(),
            title: guide.title.clone(),
            meta: format!(
                "{} · {} · {} days",
                guide.destination, guide.best_season, guide.days
            ),
            destination: guide.destination.clone(),
            best_season: guide.best_season.clone(),
            days: guide.days,
            excerpt: guide.excerpt.clone(),
            tags: first_tags(&guide.tags, GUIDE_CARD_TAGS),
            budget: budget_label(&guide.budget),
            cover: guide.cover.clone(),
            href: format!("/guides/{}", guide.id),
        }
    }
}

/// Cards for the first `count` guides, in fixture order.
pub fn featured(guides: &[Guide], count: usize) -> Vec<GuideCard> {
    guides.iter().take(count).map(GuideCard::new).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoCard {
    pub id: String,
    pub src: String,
    pub caption: String,
    pub location: String,
    pub date: String,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

impl PhotoCard {
    pub fn new(photo: &GalleryItem) -> Self {
        Self {
            id: photo.id.clone(),
            src: photo.src.clone(),
            caption: photo.alt.clone(),
            location: photo.location.clone(),
            date: short_date(photo.date),
            tags: first_tags(&photo.tags, PHOTO_CARD_TAGS),
            description: photo.description.clone(),
            author: photo.author.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineCard {
    pub id: String,
    /// Day of month, `"15"`.
    pub day_badge: String,
    pub date: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub kind_icon: &'static str,
    pub tags: Vec<String>,
    pub media: MediaView,
}

impl TimelineCard {
    pub fn new(entry: &TimelineEntry) -> Self {
        Self {
            id: entry.id.clone(),
            day_badge: entry.date.format("%-d").to_string(),
            date: long_date(entry.date),
            title: entry.title.clone(),
            description: entry.description.clone(),
            location: or_empty(entry.location.as_deref().unwrap_or_default()),
            kind_icon: entry.kind.icon(),
            tags: entry.tags.clone(),
            media: MediaView::for_entry(entry),
        }
    }
}

// ============================================================================
// Aggregates
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryStats {
    pub photos: usize,
    pub tags: usize,
    pub locations: usize,
}

impl GalleryStats {
    pub fn new(photos: &[GalleryItem]) -> Self {
        Self {
            photos: photos.len(),
            tags: super::facets::tags(photos).len(),
            locations: super::facets::locations(photos).len(),
        }
    }
}

/// Totals across all guides, shown on the guides page header.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GuideOverview {
    pub routes: usize,
    pub total_days: u32,
    /// Sum of itinerary driving distances, km.
    pub total_distance: f64,
}

impl GuideOverview {
    pub fn new(guides: &[Guide]) -> Self {
        Self {
            routes: guides.len(),
            total_days: guides.iter().map(|g| g.days).sum(),
            total_distance: guides
                .iter()
                .filter_map(|g| g.detailed_content.as_ref())
                .map(total_distance)
                .sum(),
        }
    }
}

fn total_distance(detail: &GuideDetail) -> f64 {
    detail.timeline.iter().map(|d| d.distance).sum()
}

// ============================================================================
// Guide Detail
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DayPlanView {
    pub day: u32,
    pub title: String,
    /// `"Hailar → Ergun"`.
    pub route: String,
    /// `"🚗 180km · 3.5h"`, only for driving days.
    pub distance: Option<String>,
    pub plan: Vec<String>,
    pub stay: String,
    pub food: String,
    pub ticket: String,
    pub best_time: String,
    pub photo_tip: String,
    pub notice: String,
}

impl DayPlanView {
    pub fn new(plan: &DayPlan) -> Self {
        let route = match (plan.start.trim(), plan.end.trim()) {
            ("", "") => EMPTY.to_string(),
            (start, "") => start.to_string(),
            ("", end) => end.to_string(),
            (start, end) => format!("{start} → {end}"),
        };
        let distance = (plan.distance > 0.0)
            .then(|| format!("🚗 {}km · {}h", plan.distance, plan.hours));

        Self {
            day: plan.day,
            title: or_empty(&plan.title),
            route,
            distance,
            plan: plan.plan.clone(),
            stay: or_empty(&plan.stay),
            food: or_empty(&plan.food),
            ticket: or_empty(&plan.ticket),
            best_time: or_empty(&plan.best_time),
            photo_tip: or_empty(&plan.photo_tip),
            notice: or_empty(&plan.notice),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HighlightView {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub image: ImageSource,
}

impl HighlightView {
    const DEFAULT_ICON: &'static str = "🏞️";

    pub fn new(highlight: &Highlight) -> Self {
        let icon = if highlight.icon.is_empty() {
            Self::DEFAULT_ICON.to_string()
        } else {
            highlight.icon.clone()
        };
        Self {
            icon,
            title: highlight.title.clone(),
            description: highlight.description.clone(),
            image: ImageSource::or_fallback(highlight.image.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTierView {
    pub label: &'static str,
    pub amount: String,
    pub description: String,
    pub items: Vec<String>,
    pub suitable_for: String,
}

fn budget_tiers(breakdown: &BudgetBreakdown, currency: &str) -> Vec<BudgetTierView> {
    breakdown
        .tiers()
        .into_iter()
        .map(|(kind, tier)| BudgetTierView {
            label: kind.label(),
            amount: money(tier.amount, currency),
            description: tier.description.clone(),
            items: tier.items.clone(),
            suitable_for: or_empty(&tier.suitable_for),
        })
        .collect()
}

/// Everything the guide page renders, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideDetailView {
    pub card: GuideCard,
    pub author: String,
    pub published: String,
    /// Label/value pairs of the stats section.
    pub stats: Vec<(&'static str, String)>,
    pub overview: String,
    pub route_description: String,
    pub days: Vec<DayPlanView>,
    pub highlights: Vec<HighlightView>,
    pub budget: Vec<BudgetTierView>,
    pub money_saving_tips: Vec<String>,
    pub tips: Vec<TipGroup>,
}

impl GuideDetailView {
    pub fn new(guide: &Guide) -> Self {
        let fallback = GuideDetail::default();
        let detail = guide.detailed_content.as_ref().unwrap_or(&fallback);
        let distance = total_distance(detail);

        let mut stats = vec![
            ("Days", guide.days.to_string()),
            ("Best season", guide.best_season.clone()),
            ("Budget", budget_label(&guide.budget)),
        ];
        if distance > 0.0 {
            stats.push(("Distance", format!("{distance}km")));
        }

        let overview = if detail.overview.trim().is_empty() {
            guide.excerpt.clone()
        } else {
            detail.overview.clone()
        };

        Self {
            card: GuideCard::new(guide),
            author: or_empty(guide.author.as_deref().unwrap_or_default()),
            published: or_empty(guide.created_at.as_deref().unwrap_or_default()),
            stats,
            overview,
            route_description: detail.route_description.clone(),
            days: detail.timeline.iter().map(DayPlanView::new).collect(),
            highlights: detail.highlights.iter().map(HighlightView::new).collect(),
            budget: detail
                .budget_details
                .as_ref()
                .map(|b| budget_tiers(b, &guide.budget.currency))
                .unwrap_or_default(),
            money_saving_tips: detail
                .budget_details
                .as_ref()
                .map(|b| b.money_saving_tips.clone())
                .unwrap_or_default(),
            tips: detail.tips.clone(),
        }
    }

    /// Section anchors that have content, in page order.
    pub fn sections(&self) -> Vec<(&'static str, &'static str)> {
        SECTIONS
            .into_iter()
            .filter(|(id, _)| match *id {
                "timeline" => !self.days.is_empty(),
                "highlights" => !self.highlights.is_empty(),
                "budget" => !self.budget.is_empty(),
                "tips" => !self.tips.is_empty(),
                _ => true,
            })
            .collect()
    }
}
