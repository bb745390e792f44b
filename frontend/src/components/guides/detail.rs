use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use phosphor_leptos::{Icon, ARROW_LEFT, ARROW_UP, HEART, SHARE_NETWORK};
use timeless_trips::core::fixtures::FixtureStore;
use timeless_trips::core::present::{
    BudgetTierView, DayPlanView, GuideDetailView, HighlightView,
};
use timeless_trips::core::routes::{resolve_guide, GuidePage};
use timeless_trips::core::scroll::{active_section, SectionBounds, SECTION_PROBE};

use crate::components::design_system::{Badge, BadgeVariant, Card, CardBody, FallbackImage, Markdown, TagList};
use crate::components::not_found::NotFound;
use crate::services::scroll_service::{scroll_to_section, scroll_to_top, use_scrolled_past};

/// `/guides/:id`
#[component]
pub fn GuideDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();

    move || {
        let id = id();
        match resolve_guide(FixtureStore::bundled(), &id) {
            GuidePage::Found(guide) => {
                view! { <GuideDetailContent detail=GuideDetailView::new(guide) /> }.into_any()
            }
            GuidePage::NotFound { id } => {
                log::debug!("No guide with id {id}");
                view! { <NotFound missing=id.to_string() /> }.into_any()
            }
        }
    }
}

/// Bounds of the rendered section anchors relative to the viewport.
fn measure_sections(ids: &[&'static str]) -> Vec<SectionBounds<'static>> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|&id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

#[component]
pub fn GuideDetailContent(detail: GuideDetailView) -> impl IntoView {
    let sections = detail.sections();
    let ids: Vec<&'static str> = sections.iter().map(|(id, _)| *id).collect();

    let active = RwSignal::new(ids.first().copied());
    let handle = window_event_listener(ev::scroll, move |_| {
        let bounds = measure_sections(&ids);
        if let Some(id) = active_section(&bounds, SECTION_PROBE) {
            if active.get_untracked() != Some(id) {
                active.set(Some(id));
            }
        }
    });
    on_cleanup(move || handle.remove());

    let scrolled = use_scrolled_past();
    let favorite = RwSignal::new(false);

    let GuideDetailView {
        card,
        author,
        published,
        stats,
        overview,
        route_description,
        days,
        highlights,
        budget,
        money_saving_tips,
        tips,
    } = detail;

    view! {
        <article>
            // Hero
            <div class="relative h-80 md:h-96 overflow-hidden bg-stone-800">
                <FallbackImage src=card.cover.clone() alt=card.title.clone() class="w-full h-full object-cover opacity-80" />
                <div class="absolute inset-0 bg-gradient-to-t from-black/70 to-transparent" />
                <div class="absolute bottom-0 inset-x-0 max-w-5xl mx-auto px-4 pb-8 text-white">
                    <a href="/guides" class="inline-flex items-center gap-1 text-sm text-white/80 hover:text-white mb-3">
                        <Icon icon=ARROW_LEFT size="14px" />
                        "All guides"
                    </a>
                    <h1 class="text-3xl md:text-4xl font-bold">{card.title.clone()}</h1>
                    <p class="mt-2 text-white/80">{card.meta.clone()}</p>
                    <div class="mt-3 flex items-center gap-3 text-sm text-white/70">
                        <span>{format!("By {author}")}</span>
                        <span>{published}</span>
                    </div>
                </div>
            </div>

            // Sticky section navigation
            <nav class="sticky top-16 z-30 bg-white/95 backdrop-blur border-b border-stone-200">
                <div class="max-w-5xl mx-auto px-4 flex items-center gap-1 overflow-x-auto">
                    {sections
                        .into_iter()
                        .map(|(id, label)| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == Some(id) {
                                            "px-3 py-3 text-sm font-medium border-b-2 border-emerald-600 text-emerald-700 whitespace-nowrap"
                                        } else {
                                            "px-3 py-3 text-sm text-stone-500 border-b-2 border-transparent hover:text-stone-800 whitespace-nowrap"
                                        }
                                    }
                                    on:click=move |_| {
                                        active.set(Some(id));
                                        scroll_to_section(id);
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <div class="flex-1" />
                    <button
                        class=move || {
                            if favorite.get() {
                                "p-2 rounded-full text-rose-600 bg-rose-50"
                            } else {
                                "p-2 rounded-full text-stone-400 hover:text-rose-500"
                            }
                        }
                        aria-label="Favorite"
                        on:click=move |_| favorite.update(|f| *f = !*f)
                    >
                        <Icon icon=HEART size="18px" />
                    </button>
                    <button class="p-2 rounded-full text-stone-400 hover:text-stone-700" aria-label="Share">
                        <Icon icon=SHARE_NETWORK size="18px" />
                    </button>
                </div>
            </nav>

            <div class="max-w-5xl mx-auto px-4 py-10 flex flex-col gap-14">
                <section id="stats" class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {stats
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <Card>
                                    <CardBody>
                                        <div class="text-xs uppercase tracking-wide text-stone-400">{label}</div>
                                        <div class="mt-1 text-lg font-semibold text-stone-900">{value}</div>
                                    </CardBody>
                                </Card>
                            }
                        })
                        .collect_view()}
                </section>

                <section id="overview">
                    <h2 class="text-2xl font-bold text-stone-900 mb-4">"Overview"</h2>
                    <Markdown content=overview />
                    {(!route_description.is_empty()).then(|| {
                        view! {
                            <h3 class="text-lg font-semibold text-stone-800 mt-6 mb-2">"The route"</h3>
                            <Markdown content=route_description />
                        }
                    })}
                    <div class="mt-4">
                        <TagList tags=card.tags.clone() />
                    </div>
                </section>

                {(!days.is_empty()).then(|| view! { <ItinerarySection days=days /> })}
                {(!highlights.is_empty()).then(|| view! { <HighlightsSection highlights=highlights /> })}
                {(!budget.is_empty()).then(|| {
                    view! { <BudgetSection tiers=budget money_saving_tips=money_saving_tips /> }
                })}
                {(!tips.is_empty()).then(|| {
                    view! {
                        <section id="tips">
                            <h2 class="text-2xl font-bold text-stone-900 mb-4">"Tips"</h2>
                            <div class="grid gap-4 md:grid-cols-2">
                                {tips
                                    .into_iter()
                                    .map(|group| {
                                        view! {
                                            <Card>
                                                <CardBody>
                                                    <Badge variant=BadgeVariant::Accent>{group.category}</Badge>
                                                    <h3 class="font-semibold text-stone-900 mt-2 mb-2">{group.title}</h3>
                                                    <ul class="list-disc pl-5 text-sm text-stone-600 space-y-1">
                                                        {group.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                                                    </ul>
                                                </CardBody>
                                            </Card>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })}
            </div>

            <Show when=move || scrolled.get()>
                <button
                    class="fixed bottom-6 right-6 z-40 p-3 rounded-full bg-emerald-600 text-white shadow-lg hover:bg-emerald-700"
                    aria-label="Back to top"
                    on:click=move |_| scroll_to_top()
                >
                    <Icon icon=ARROW_UP size="20px" />
                </button>
            </Show>
        </article>
    }
}

#[component]
fn ItinerarySection(days: Vec<DayPlanView>) -> impl IntoView {
    let detail_row = |label: &'static str, value: String| {
        view! {
            <div>
                <dt class="text-xs text-stone-400">{label}</dt>
                <dd class="text-sm text-stone-700">{value}</dd>
            </div>
        }
    };

    view! {
        <section id="timeline">
            <h2 class="text-2xl font-bold text-stone-900 mb-4">"Itinerary"</h2>
            <ol class="relative border-l-2 border-emerald-100 ml-3 flex flex-col gap-8">
                {days
                    .into_iter()
                    .map(|day| {
                        view! {
                            <li class="pl-6 relative">
                                <span class="absolute -left-[15px] top-0 w-7 h-7 rounded-full bg-emerald-600 text-white text-xs font-semibold flex items-center justify-center">
                                    {day.day}
                                </span>
                                <h3 class="font-semibold text-stone-900">{day.title}</h3>
                                <div class="text-sm text-stone-500 mt-0.5 flex gap-3">
                                    <span>{day.route}</span>
                                    {day.distance.map(|d| view! { <span>{d}</span> })}
                                </div>
                                <ul class="list-disc pl-5 mt-3 text-sm text-stone-600 space-y-1">
                                    {day.plan.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
                                </ul>
                                <dl class="mt-3 grid grid-cols-2 md:grid-cols-3 gap-3">
                                    {detail_row("Stay", day.stay)}
                                    {detail_row("Food", day.food)}
                                    {detail_row("Tickets", day.ticket)}
                                    {detail_row("Best time", day.best_time)}
                                    {detail_row("Photo tip", day.photo_tip)}
                                    {detail_row("Notice", day.notice)}
                                </dl>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn HighlightsSection(highlights: Vec<HighlightView>) -> impl IntoView {
    view! {
        <section id="highlights">
            <h2 class="text-2xl font-bold text-stone-900 mb-4">"Highlights"</h2>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {highlights
                    .into_iter()
                    .map(|highlight| {
                        view! {
                            <Card>
                                <FallbackImage
                                    src=highlight.image.current().to_string()
                                    alt=highlight.title.clone()
                                    class="w-full aspect-[4/3] object-cover"
                                />
                                <CardBody>
                                    <h3 class="font-semibold text-stone-900">
                                        <span class="mr-1.5">{highlight.icon}</span>
                                        {highlight.title}
                                    </h3>
                                    <p class="text-sm text-stone-600 mt-1">{highlight.description}</p>
                                </CardBody>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn BudgetSection(tiers: Vec<BudgetTierView>, money_saving_tips: Vec<String>) -> impl IntoView {
    view! {
        <section id="budget">
            <h2 class="text-2xl font-bold text-stone-900 mb-4">"Budget"</h2>
            <div class="grid gap-4 md:grid-cols-3">
                {tiers
                    .into_iter()
                    .map(|tier| {
                        view! {
                            <Card>
                                <CardBody class="flex flex-col gap-2">
                                    <div class="text-sm text-stone-500">{tier.label}</div>
                                    <div class="text-2xl font-bold text-amber-700">{tier.amount}</div>
                                    <p class="text-sm text-stone-600">{tier.description}</p>
                                    <ul class="list-disc pl-5 text-sm text-stone-600 space-y-1">
                                        {tier.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                                    </ul>
                                    <div class="text-xs text-stone-400 pt-2 border-t border-stone-100">
                                        {format!("Suitable for: {}", tier.suitable_for)}
                                    </div>
                                </CardBody>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
            {(!money_saving_tips.is_empty()).then(|| {
                view! {
                    <div class="mt-6 p-4 rounded-xl bg-amber-50 border border-amber-100">
                        <h3 class="font-semibold text-amber-900 mb-2">"Saving money"</h3>
                        <ul class="list-disc pl-5 text-sm text-amber-900/80 space-y-1">
                            {money_saving_tips.into_iter().map(|tip| view! { <li>{tip}</li> }).collect_view()}
                        </ul>
                    </div>
                }
            })}
        </section>
    }
}
