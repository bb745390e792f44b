use leptos::prelude::*;
use phosphor_leptos::{Icon, COMPASS};

/// Not-found page. `missing` names a guide id that failed to resolve.
#[component]
pub fn NotFound(#[prop(into, optional)] missing: Option<String>) -> impl IntoView {
    let message = match missing {
        Some(id) => format!("We couldn't find a guide called \"{id}\"."),
        None => "This page wandered off the map.".to_string(),
    };

    view! {
        <section class="max-w-xl mx-auto px-4 py-24 text-center">
            <div class="inline-flex p-4 rounded-full bg-stone-100 text-stone-400 mb-6">
                <Icon icon=COMPASS size="40px" />
            </div>
            <h1 class="text-4xl font-bold text-stone-900">"404"</h1>
            <p class="mt-3 text-stone-500">{message}</p>
            <div class="mt-8 flex justify-center gap-3">
                <a href="/" class="px-4 py-2 rounded-lg bg-emerald-600 text-white hover:bg-emerald-700">
                    "Back home"
                </a>
                <a href="/guides" class="px-4 py-2 rounded-lg border border-stone-300 text-stone-700 hover:bg-stone-100">
                    "Browse guides"
                </a>
            </div>
        </section>
    }
}
