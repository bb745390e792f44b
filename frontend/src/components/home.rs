//! Landing page: hero banner, featured routes and gallery totals.

use leptos::prelude::*;
use phosphor_leptos::{Icon, BOOK_OPEN, MAP_TRIFOLD};
use timeless_trips::core::fixtures::FixtureStore;
use timeless_trips::core::present::{featured, GalleryStats, GuideCard, GuideOverview};

use crate::components::guides::GuideCardView;

/// Guides featured on the landing page.
pub const FEATURED_COUNT: usize = 3;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1469854523086-cc02fe5d8800?w=1600&h=900&fit=crop";

#[component]
pub fn HeroBanner(
    #[prop(into)]
    title: String,
    #[prop(into)]
    subtitle: String,
    #[prop(into, optional)]
    image: Option<String>,
) -> impl IntoView {
    let background = format!(
        "background-image: url('{}')",
        image.as_deref().unwrap_or(HERO_IMAGE)
    );

    view! {
        <section class="relative h-[70vh] min-h-[420px] bg-cover bg-center" style=background>
            <div class="absolute inset-0 bg-gradient-to-b from-black/30 via-black/40 to-black/70" />
            <div class="relative h-full max-w-6xl mx-auto px-4 flex flex-col justify-end pb-16 text-white">
                <h1 class="text-4xl md:text-6xl font-bold tracking-tight">{title}</h1>
                <p class="mt-4 max-w-2xl text-lg text-white/85">{subtitle}</p>
                <div class="mt-8 flex flex-wrap gap-3">
                    <a href="/map" class="inline-flex items-center gap-2 px-5 py-2.5 rounded-lg bg-emerald-600 hover:bg-emerald-700 font-medium">
                        <Icon icon=MAP_TRIFOLD size="18px" />
                        "Explore the map"
                    </a>
                    <a href="/guides" class="inline-flex items-center gap-2 px-5 py-2.5 rounded-lg bg-white/15 hover:bg-white/25 backdrop-blur font-medium">
                        <Icon icon=BOOK_OPEN size="18px" />
                        "Browse guides"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FeaturedRoutes(cards: Vec<GuideCard>) -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-4 py-14">
            <div class="flex items-end justify-between mb-6">
                <div>
                    <h2 class="text-2xl font-bold text-stone-900">"Featured Routes"</h2>
                    <p class="text-stone-500 mt-1">"Hand-picked journeys with full day-by-day plans"</p>
                </div>
                <a href="/guides" class="text-sm font-medium text-emerald-700 hover:underline">"View all →"</a>
            </div>
            {if cards.is_empty() {
                view! { <p class="text-stone-500">"No guides yet."</p> }.into_any()
            } else {
                view! {
                    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        {cards.into_iter().map(|card| view! { <GuideCardView card=card /> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = FixtureStore::bundled();
    let stats = GalleryStats::new(&store.photos);
    let overview = GuideOverview::new(&store.guides);

    let stat = |value: String, label: &'static str| {
        view! {
            <div class="text-center">
                <div class="text-3xl font-bold text-emerald-700">{value}</div>
                <div class="text-sm text-stone-500 mt-1">{label}</div>
            </div>
        }
    };

    view! {
        <HeroBanner
            title="Timeless Trips"
            subtitle="Road journeys across the grasslands, forests and frozen north, told in photographs and day-by-day guides."
        />
        <FeaturedRoutes cards=featured(&store.guides, FEATURED_COUNT) />
        <section class="bg-white border-y border-stone-200">
            <div class="max-w-6xl mx-auto px-4 py-10 grid grid-cols-2 md:grid-cols-5 gap-6">
                {stat(overview.routes.to_string(), "routes")}
                {stat(format!("{}km", overview.total_distance), "driven")}
                {stat(stats.photos.to_string(), "photos")}
                {stat(stats.locations.to_string(), "places")}
                {stat(store.timeline.len().to_string(), "journal entries")}
            </div>
        </section>
    }
}
