use leptos::prelude::*;
use timeless_trips::core::facets;
use timeless_trips::core::filter::{derive, GuideFilter, Selection};
use timeless_trips::core::fixtures::FixtureStore;
use timeless_trips::core::present::{GuideCard, GuideOverview};

use super::GuideCardView;
use crate::components::design_system::{FilterChips, FilterOption};

#[component]
pub fn GuidesPage() -> impl IntoView {
    let store = FixtureStore::bundled();
    let overview = GuideOverview::new(&store.guides);
    let tags = FilterOption::plain(&facets::tags(&store.guides));

    let filter = RwSignal::new(GuideFilter::default());
    let cards = Memo::new(move |_| {
        filter.with(|f| {
            derive(&store.guides, f)
                .into_iter()
                .map(GuideCard::new)
                .collect::<Vec<_>>()
        })
    });

    let selected = Signal::derive(move || filter.with(|f| f.tag.value().to_string()));
    let on_select = Callback::new(move |value: String| {
        filter.update(|f| f.tag = Selection::from_value(&value));
    });

    view! {
        <section class="max-w-6xl mx-auto px-4 py-10">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-stone-900">"Travel Guides"</h1>
                <p class="text-stone-500 mt-2">
                    {format!(
                        "{} routes · {} days on the road · {}km driven",
                        overview.routes,
                        overview.total_days,
                        overview.total_distance,
                    )}
                </p>
            </div>
            <div class="mb-6">
                <FilterChips label="Tags" options=tags selected=selected on_select=on_select />
            </div>
            <Show
                when=move || cards.with(|c| !c.is_empty())
                fallback=|| view! { <p class="text-stone-500 py-12 text-center">"No guides match this tag."</p> }
            >
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || cards.get()
                        key=|card| card.id.clone()
                        children=|card| view! { <GuideCardView card=card /> }
                    />
                </div>
            </Show>
        </section>
    }
}
