//! Photo gallery: tag and location filters over a masonry grid, with the
//! fullscreen viewer bound to the filtered subset.

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, MAP_PIN};
use timeless_trips::core::facets;
use timeless_trips::core::filter::{derive, GalleryFilter, Selection};
use timeless_trips::core::fixtures::FixtureStore;
use timeless_trips::core::present::{GalleryStats, PhotoCard};
use timeless_trips::core::viewer::{Viewer, ViewerCommand};

use super::PhotoViewer;
use crate::components::design_system::{FallbackImage, FilterChips, FilterOption, TagList};

#[component]
pub fn PhotosPage() -> impl IntoView {
    let store = FixtureStore::bundled();
    let stats = GalleryStats::new(&store.photos);
    let tags = FilterOption::plain(&facets::tags(&store.photos));
    let locations = FilterOption::plain(&facets::locations(&store.photos));

    let filter = RwSignal::new(GalleryFilter::default());
    let visible = Memo::new(move |_| {
        filter.with(|f| {
            derive(&store.photos, f)
                .into_iter()
                .map(PhotoCard::new)
                .collect::<Vec<_>>()
        })
    });

    let viewer = RwSignal::new(Viewer::new());

    // Keep an open viewer inside the subset when the filter changes
    Effect::new(move |_| {
        let len = visible.with(Vec::len);
        let mut next = viewer.get_untracked();
        if next.reconcile(len) {
            viewer.set(next);
        }
    });

    let handle = window_event_listener(ev::keydown, move |e| {
        if !viewer.with_untracked(Viewer::is_open) {
            return;
        }
        let len = visible.with_untracked(Vec::len);
        let mut next = viewer.get_untracked();
        if next.handle_key(&e.key(), len) {
            e.prevent_default();
            viewer.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    let selected_tag = Signal::derive(move || filter.with(|f| f.tag.value().to_string()));
    let selected_location = Signal::derive(move || filter.with(|f| f.location.value().to_string()));

    view! {
        <section class="max-w-6xl mx-auto px-4 py-10">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-stone-900">"Photo Gallery"</h1>
                <p class="text-stone-500 mt-2">
                    {format!(
                        "{} photos · {} tags · {} places",
                        stats.photos,
                        stats.tags,
                        stats.locations,
                    )}
                </p>
            </div>

            <div class="mb-8 flex flex-col gap-3">
                <FilterChips
                    label="Tags"
                    options=tags
                    selected=selected_tag
                    on_select=move |value: String| filter.update(|f| f.tag = Selection::from_value(&value))
                />
                <FilterChips
                    label="Places"
                    options=locations
                    selected=selected_location
                    on_select=move |value: String| filter.update(|f| f.location = Selection::from_value(&value))
                />
            </div>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="text-stone-500 py-12 text-center">"No photos match these filters."</p> }
            >
                <div class="columns-1 sm:columns-2 lg:columns-3 gap-4">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, photo)| {
                                view! {
                                    <button
                                        class="group mb-4 block w-full break-inside-avoid text-left rounded-xl overflow-hidden bg-white border border-stone-200 shadow-sm hover:shadow-md"
                                        on:click=move |_| {
                                            let len = visible.with_untracked(Vec::len);
                                            viewer.update(|v| {
                                                v.apply(ViewerCommand::Open(index), len);
                                            });
                                        }
                                    >
                                        <FallbackImage
                                            src=photo.src.clone()
                                            alt=photo.caption.clone()
                                            class="w-full object-cover transition-transform duration-300 group-hover:scale-[1.02]"
                                        />
                                        <div class="p-4 flex flex-col gap-2">
                                            <div class="font-medium text-stone-900">{photo.caption}</div>
                                            <div class="flex items-center gap-1 text-xs text-stone-500">
                                                <Icon icon=MAP_PIN size="12px" />
                                                {format!("{} · {}", photo.location, photo.date)}
                                            </div>
                                            <TagList tags=photo.tags />
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <PhotoViewer viewer=viewer photos=visible />
        </section>
    }
}
