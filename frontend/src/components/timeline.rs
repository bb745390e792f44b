//! Trip timeline: entries grouped on a vertical rail, filtered by year,
//! month and post type.

use leptos::prelude::*;
use phosphor_leptos::{Icon, MAP_PIN};
use timeless_trips::core::facets::{self, MONTHS};
use timeless_trips::core::filter::{derive, Selection, TimelineFilter};
use timeless_trips::core::fixtures::FixtureStore;
use timeless_trips::core::media::MediaView;
use timeless_trips::core::models::EntryKind;
use timeless_trips::core::present::TimelineCard;

use crate::components::design_system::{FallbackImage, FilterChips, FilterOption, TagList};

const SELECT_CLASS: &str =
    "px-3 py-1.5 rounded-lg border border-stone-300 bg-white text-sm text-stone-700 focus:outline-none focus:ring-2 focus:ring-emerald-500";

fn kind_value(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Photo => "photo",
        EntryKind::Video => "video",
        EntryKind::Guide => "guide",
    }
}

fn kind_selection(value: &str) -> Selection<EntryKind> {
    EntryKind::ALL
        .into_iter()
        .find(|kind| kind_value(*kind) == value)
        .into()
}

#[component]
fn Media(media: MediaView) -> impl IntoView {
    match media {
        MediaView::Image { src, alt } => view! {
            <FallbackImage src=src alt=alt class="w-full max-h-96 object-cover rounded-lg" />
        }
        .into_any(),
        MediaView::Video { src, poster } => view! {
            <video
                src=src
                poster=poster
                controls=true
                preload="metadata"
                class="w-full max-h-96 rounded-lg bg-black"
            />
        }
        .into_any(),
    }
}

#[component]
fn TimelineItem(card: TimelineCard) -> impl IntoView {
    view! {
        <li class="relative pl-16">
            <div class="absolute left-0 top-0 w-12 h-12 rounded-full bg-emerald-600 text-white flex flex-col items-center justify-center shadow">
                <span class="text-lg font-bold leading-none">{card.day_badge}</span>
            </div>
            <div class="bg-white border border-stone-200 rounded-xl shadow-sm p-5">
                <div class="flex flex-wrap items-center gap-x-3 gap-y-1 text-sm text-stone-500">
                    <span>{card.kind_icon}</span>
                    <span>{card.date}</span>
                    <span class="inline-flex items-center gap-1">
                        <Icon icon=MAP_PIN size="12px" />
                        {card.location}
                    </span>
                </div>
                <h3 class="mt-2 text-lg font-semibold text-stone-900">{card.title}</h3>
                <p class="mt-1 text-stone-600">{card.description}</p>
                <div class="mt-4">
                    <Media media=card.media />
                </div>
                <div class="mt-4">
                    <TagList tags=card.tags />
                </div>
            </div>
        </li>
    }
}

#[component]
pub fn TimelinePage() -> impl IntoView {
    let store = FixtureStore::bundled();
    let years = facets::years(&store.timeline);
    let kinds: Vec<FilterOption> = facets::entry_kinds(&store.timeline)
        .into_iter()
        .map(|kind| FilterOption::new(kind_value(kind), format!("{} {}", kind.icon(), kind.label())))
        .collect();

    let filter = RwSignal::new(TimelineFilter::default());
    let cards = Memo::new(move |_| {
        filter.with(|f| {
            derive(&store.timeline, f)
                .into_iter()
                .map(TimelineCard::new)
                .collect::<Vec<_>>()
        })
    });

    let selected_kind = Signal::derive(move || {
        filter.with(|f| f.kind.as_option().map_or("all", |k| kind_value(*k)).to_string())
    });

    view! {
        <section class="max-w-3xl mx-auto px-4 py-10">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-stone-900">"Timeline"</h1>
                <p class="text-stone-500 mt-2">
                    {move || format!("{} of {} entries", cards.with(Vec::len), store.timeline.len())}
                </p>
            </div>

            <div class="mb-8 flex flex-col gap-3">
                <div class="flex flex-wrap items-center gap-3">
                    <select
                        class=SELECT_CLASS
                        aria-label="Year"
                        prop:value=move || filter.with(|f| f.year.value().to_string())
                        on:change=move |e| {
                            let value = event_target_value(&e);
                            filter.update(|f| f.year = Selection::from_value(&value));
                        }
                    >
                        <option value="all">"All years"</option>
                        {years
                            .into_iter()
                            .map(|year| view! { <option value=year.clone()>{year}</option> })
                            .collect_view()}
                    </select>
                    <select
                        class=SELECT_CLASS
                        aria-label="Month"
                        prop:value=move || filter.with(|f| f.month.value().to_string())
                        on:change=move |e| {
                            let value = event_target_value(&e);
                            filter.update(|f| f.month = Selection::from_value(&value));
                        }
                    >
                        <option value="all">"All months"</option>
                        {MONTHS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </div>
                <FilterChips
                    label="Type"
                    options=kinds
                    selected=selected_kind
                    on_select=move |value: String| filter.update(|f| f.kind = kind_selection(&value))
                />
            </div>

            <Show
                when=move || cards.with(|c| !c.is_empty())
                fallback=|| view! { <p class="text-stone-500 py-12 text-center">"Nothing recorded for this period."</p> }
            >
                <ol class="relative flex flex-col gap-8 before:absolute before:left-6 before:top-0 before:bottom-0 before:w-0.5 before:bg-emerald-100">
                    <For
                        each=move || cards.get()
                        key=|card| card.id.clone()
                        children=|card| view! { <TimelineItem card=card /> }
                    />
                </ol>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_selection_round_trips_every_kind() {
        for kind in EntryKind::ALL {
            assert_eq!(kind_selection(kind_value(kind)), Selection::Only(kind));
        }
        assert_eq!(kind_selection("all"), Selection::All);
    }
}
