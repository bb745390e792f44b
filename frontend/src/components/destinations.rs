use leptos::prelude::*;
use timeless_trips::core::fixtures::FixtureStore;

/// Destinations placeholder until destination pages exist.
#[component]
pub fn DestinationsPage() -> impl IntoView {
    let destinations = &FixtureStore::bundled().destinations;

    view! {
        <section class="max-w-4xl mx-auto px-4 py-20 text-center">
            <h1 class="text-3xl font-bold text-stone-900">"Destinations"</h1>
            <p class="mt-3 text-stone-500">"Coming soon"</p>
            <p class="mt-8 text-sm text-stone-400">
                {format!("{} places on the map so far", destinations.len())}
            </p>
            <ul class="mt-4 flex flex-wrap justify-center gap-2">
                {destinations
                    .iter()
                    .map(|d| {
                        view! {
                            <li class="px-3 py-1 rounded-full bg-white border border-stone-200 text-sm text-stone-600">
                                {format!("{}, {}", d.name, d.country)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
