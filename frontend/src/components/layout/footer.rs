use leptos::prelude::*;
use timeless_trips::core::routes::NAV_ITEMS;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="mt-16 border-t border-stone-200 bg-white">
            <div class="max-w-6xl mx-auto px-4 py-8 flex flex-col md:flex-row gap-6 justify-between">
                <div>
                    <div class="font-semibold text-stone-900">"Timeless Trips"</div>
                    <p class="text-sm text-stone-500 mt-1">
                        "Road journeys, photographs and guides from the road."
                    </p>
                </div>
                <nav class="flex flex-wrap gap-x-5 gap-y-2 text-sm text-stone-500">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <a href=item.path class="hover:text-emerald-700">{item.label}</a> })
                        .collect_view()}
                </nav>
            </div>
            <div class="text-center text-xs text-stone-400 pb-6">
                {format!("© {year} Timeless Trips · v{}", timeless_trips::VERSION)}
            </div>
        </footer>
    }
}
