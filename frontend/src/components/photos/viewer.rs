use leptos::prelude::*;
use phosphor_leptos::{Icon, CARET_LEFT, CARET_RIGHT, MAGNIFYING_GLASS_MINUS, MAGNIFYING_GLASS_PLUS, X};
use timeless_trips::core::present::PhotoCard;
use timeless_trips::core::viewer::{Viewer, ViewerCommand};

use crate::components::design_system::{FallbackImage, TagList};

/// Fullscreen overlay over the open photo of `photos`.
#[component]
pub fn PhotoViewer(viewer: RwSignal<Viewer>, #[prop(into)] photos: Signal<Vec<PhotoCard>>) -> impl IntoView {
    let send = move |command: ViewerCommand| {
        let len = photos.with_untracked(Vec::len);
        viewer.update(|v| {
            v.apply(command, len);
        });
    };

    let current = move || viewer.with(|v| photos.with(|p| v.current(p).cloned()));
    let zoom_style = Signal::derive(move || {
        format!(
            "transform: scale({}); transition: transform 150ms ease-out",
            viewer.with(Viewer::zoom)
        )
    });

    view! {
        <Show when=move || viewer.with(Viewer::is_open)>
            <div
                class="fixed inset-0 z-50 flex flex-col bg-black/95 text-white"
                on:click=move |_| send(ViewerCommand::Close)
            >
                <div class="flex items-center justify-between px-4 py-3" on:click=|e| e.stop_propagation()>
                    <div class="text-sm text-white/70">
                        {move || {
                            let index = viewer.with(Viewer::index).unwrap_or(0);
                            format!("{} / {}", index + 1, photos.with(Vec::len))
                        }}
                    </div>
                    <div class="flex items-center gap-2">
                        <button class="p-2 rounded-full hover:bg-white/10" aria-label="Zoom out" on:click=move |_| send(ViewerCommand::ZoomOut)>
                            <Icon icon=MAGNIFYING_GLASS_MINUS size="20px" />
                        </button>
                        <span class="text-sm w-12 text-center">
                            {move || format!("{}%", viewer.with(Viewer::zoom_percent))}
                        </span>
                        <button class="p-2 rounded-full hover:bg-white/10" aria-label="Zoom in" on:click=move |_| send(ViewerCommand::ZoomIn)>
                            <Icon icon=MAGNIFYING_GLASS_PLUS size="20px" />
                        </button>
                        <button class="p-2 rounded-full hover:bg-white/10" aria-label="Close" on:click=move |_| send(ViewerCommand::Close)>
                            <Icon icon=X size="20px" />
                        </button>
                    </div>
                </div>

                <div class="relative flex-1 flex items-center justify-center overflow-hidden">
                    <Show when=move || viewer.with(Viewer::has_previous)>
                        <button
                            class="absolute left-4 z-10 p-3 rounded-full bg-white/10 hover:bg-white/20"
                            aria-label="Previous photo"
                            on:click=move |e| {
                                e.stop_propagation();
                                send(ViewerCommand::Previous);
                            }
                        >
                            <Icon icon=CARET_LEFT size="24px" />
                        </button>
                    </Show>
                    // Re-created per photo so each one gets its own fallback state
                    {move || {
                        current()
                            .map(|photo| {
                                view! {
                                    <div style=move || zoom_style.get() on:click=|e| e.stop_propagation()>
                                        <FallbackImage
                                            src=photo.src
                                            alt=photo.caption
                                            class="max-h-[75vh] max-w-[90vw] object-contain"
                                        />
                                    </div>
                                }
                            })
                    }}
                    <Show when=move || {
                        let len = photos.with(Vec::len);
                        viewer.with(|v| v.has_next(len))
                    }>
                        <button
                            class="absolute right-4 z-10 p-3 rounded-full bg-white/10 hover:bg-white/20"
                            aria-label="Next photo"
                            on:click=move |e| {
                                e.stop_propagation();
                                send(ViewerCommand::Next);
                            }
                        >
                            <Icon icon=CARET_RIGHT size="24px" />
                        </button>
                    </Show>
                </div>

                {move || {
                    current()
                        .map(|photo| {
                            view! {
                                <div class="px-6 py-4 max-w-3xl mx-auto w-full" on:click=|e| e.stop_propagation()>
                                    <div class="font-medium">{photo.caption}</div>
                                    <div class="text-sm text-white/60 mt-1">
                                        {format!("{} · {}", photo.location, photo.date)}
                                        {photo.author.map(|a| format!(" · {a}"))}
                                    </div>
                                    {photo.description.map(|d| view! { <p class="text-sm text-white/80 mt-2">{d}</p> })}
                                    <div class="mt-3">
                                        <TagList tags=photo.tags />
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
