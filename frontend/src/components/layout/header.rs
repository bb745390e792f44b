use leptos::prelude::*;
use leptos_router::hooks::use_location;
use phosphor_leptos::{Icon, LIST, X};
use timeless_trips::core::routes::{Route, NAV_ITEMS};

/// A header navigation link, highlighted while its section is showing.
#[component]
pub fn NavLink(
    href: &'static str,
    label: &'static str,
    icon: &'static str,
    #[prop(into)]
    current: Signal<String>,
) -> impl IntoView {
    let is_active = move || Route::is_active(href, &current.get());

    view! {
        <a
            href=href
            class=move || {
                if is_active() {
                    "flex items-center gap-1.5 px-3 py-2 rounded-lg text-sm font-medium bg-emerald-50 text-emerald-700"
                } else {
                    "flex items-center gap-1.5 px-3 py-2 rounded-lg text-sm font-medium text-stone-600 hover:text-emerald-700 hover:bg-stone-100"
                }
            }
            aria-current=move || is_active().then_some("page")
        >
            <span aria-hidden="true">{icon}</span>
            {label}
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let current = Signal::derive(move || location.pathname.get());
    let menu_open = RwSignal::new(false);

    // Close the mobile menu after navigating
    Effect::new(move |_| {
        location.pathname.track();
        menu_open.set(false);
    });

    let links = move || {
        NAV_ITEMS
            .iter()
            .map(|item| {
                view! {
                    <NavLink href=item.path label=item.label icon=item.icon current=current />
                }
            })
            .collect_view()
    };

    view! {
        <header class="sticky top-0 z-40 bg-white/90 backdrop-blur border-b border-stone-200">
            <div class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <a href="/" class="flex items-center gap-2 text-lg font-semibold text-stone-900">
                    <span class="w-8 h-8 rounded-full bg-gradient-to-br from-emerald-500 to-sky-600 flex items-center justify-center text-white text-sm">
                        "TT"
                    </span>
                    "Timeless Trips"
                </a>
                <nav class="hidden md:flex items-center gap-1">{links}</nav>
                <button
                    class="md:hidden p-2 rounded-lg text-stone-600 hover:bg-stone-100"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon icon=X size="20px" /> }.into_any()
                        } else {
                            view! { <Icon icon=LIST size="20px" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden px-4 pb-4 flex flex-col gap-1">{links}</nav>
            </Show>
        </header>
    }
}
