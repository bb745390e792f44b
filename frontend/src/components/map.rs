//! Travel map drawn as SVG: the trip polyline plus destination and guide
//! markers, with a layer filter and a popup for the selected marker.

use leptos::prelude::*;
use phosphor_leptos::{Icon, X};
use timeless_trips::core::filter::{MarkerFilter, Selection};
use timeless_trips::core::fixtures::FixtureStore;
use timeless_trips::core::markers::{self, Viewport};
use timeless_trips::core::models::{GeoPoint, MapMarker, MarkerKind, MarkerSource};

use crate::components::design_system::{FilterChips, FilterOption};

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const MARGIN: f64 = 40.0;
/// Guide pins share their destination's position; nudge them aside.
const GUIDE_OFFSET: f64 = 16.0;

fn kind_value(kind: MarkerKind) -> &'static str {
    match kind {
        MarkerKind::Destination => "destination",
        MarkerKind::Guide => "guide",
    }
}

/// Viewport point to SVG user space.
fn to_svg(viewport: &Viewport, point: GeoPoint) -> (f64, f64) {
    let (x, y) = viewport.project(point);
    (
        MARGIN + x * (WIDTH - 2.0 * MARGIN),
        MARGIN + y * (HEIGHT - 2.0 * MARGIN),
    )
}

fn marker_position(viewport: &Viewport, marker: &MapMarker) -> (f64, f64) {
    let (x, y) = to_svg(viewport, marker.coordinates);
    match marker.kind {
        MarkerKind::Destination => (x, y),
        MarkerKind::Guide => (x + GUIDE_OFFSET, y - GUIDE_OFFSET),
    }
}

#[component]
pub fn MapPage() -> impl IntoView {
    let store = FixtureStore::bundled();
    let route = markers::route_path(&store.timeline);

    // Fitted to everything so toggling a layer does not move the map
    let viewport = {
        let all = markers::project(store, &MarkerFilter::default());
        let points: Vec<GeoPoint> = all
            .iter()
            .map(|m| m.coordinates)
            .chain(route.iter().copied())
            .collect();
        Viewport::fit(&points)
    };

    let polyline = route
        .iter()
        .map(|p| {
            let (x, y) = to_svg(&viewport, *p);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let kinds: Vec<FilterOption> = MarkerKind::ALL
        .into_iter()
        .map(|kind| FilterOption::new(kind_value(kind), kind.label()))
        .collect();

    let filter = RwSignal::new(MarkerFilter::default());
    let visible = Memo::new(move |_| filter.with(|f| markers::project(store, f)));
    let selected = RwSignal::new(None::<String>);

    // Drop the popup when its marker is filtered out
    Effect::new(move |_| {
        let still_visible = visible.with(|markers| {
            selected.with_untracked(|id| {
                id.as_ref()
                    .is_none_or(|id| markers.iter().any(|m| &m.id == id))
            })
        });
        if !still_visible {
            selected.set(None);
        }
    });

    let selected_kind = Signal::derive(move || {
        filter.with(|f| f.kind.as_option().map_or("all", |k| kind_value(*k)).to_string())
    });
    let on_select = move |value: String| {
        let kind = MarkerKind::ALL
            .into_iter()
            .find(|kind| kind_value(*kind) == value);
        filter.update(|f| f.kind = Selection::from(kind));
    };

    let popup = move || {
        let id = selected.get()?;
        visible.with(|markers| markers.iter().find(|m| m.id == id).cloned())
    };

    view! {
        <section class="max-w-6xl mx-auto px-4 py-10">
            <div class="mb-6">
                <h1 class="text-3xl font-bold text-stone-900">"Travel Map"</h1>
                <p class="text-stone-500 mt-2">
                    {move || format!("{} markers · {} route points", visible.with(Vec::len), route.len())}
                </p>
            </div>
            <div class="mb-4">
                <FilterChips label="Show" options=kinds selected=selected_kind on_select=on_select />
            </div>

            <div class="relative rounded-xl overflow-hidden border border-stone-200 bg-sky-50">
                <svg
                    viewBox=format!("0 0 {WIDTH} {HEIGHT}")
                    class="w-full h-auto"
                    role="img"
                    aria-label="Map of destinations and the trip route"
                    on:click=move |_| selected.set(None)
                >
                    <rect x="0" y="0" width=WIDTH height=HEIGHT fill="#f0f7f4" />
                    <polyline
                        points=polyline
                        fill="none"
                        stroke="#d97706"
                        stroke-width="3"
                        stroke-dasharray="8 6"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|marker| {
                                let (x, y) = marker_position(&viewport, &marker);
                                let id = marker.id.clone();
                                let is_selected = {
                                    let id = id.clone();
                                    move || selected.with(|s| s.as_deref() == Some(id.as_str()))
                                };
                                let (fill, radius) = match marker.kind {
                                    MarkerKind::Destination => ("#059669", 9.0),
                                    MarkerKind::Guide => ("#0284c7", 7.0),
                                };
                                view! {
                                    <g
                                        class="cursor-pointer"
                                        aria-label=marker.title.clone()
                                        on:click=move |e| {
                                            e.stop_propagation();
                                            selected.set(Some(id.clone()));
                                        }
                                    >
                                        <circle
                                            cx=x
                                            cy=y
                                            r=move || if is_selected() { radius + 4.0 } else { radius }
                                            fill=fill
                                            stroke="white"
                                            stroke-width="3"
                                        />
                                        {(marker.kind == MarkerKind::Destination).then(|| {
                                            view! {
                                                <text
                                                    x=x
                                                    y={y + 26.0}
                                                    text-anchor="middle"
                                                    font-size="14"
                                                    fill="#44403c"
                                                >
                                                    {marker.title.clone()}
                                                </text>
                                            }
                                        })}
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                </svg>

                {move || {
                    popup()
                        .map(|marker| {
                            let link = match &marker.source {
                                MarkerSource::Guide(id) => Some(format!("/guides/{id}")),
                                MarkerSource::Destination(_) => None,
                            };
                            view! {
                                <div class="absolute top-4 right-4 w-72 bg-white rounded-xl shadow-lg border border-stone-200 p-4">
                                    <div class="flex items-start justify-between gap-2">
                                        <div>
                                            <div class="text-xs text-stone-400">{marker.kind.label()}</div>
                                            <h3 class="font-semibold text-stone-900">{marker.title}</h3>
                                        </div>
                                        <button
                                            class="p-1 rounded-full text-stone-400 hover:bg-stone-100"
                                            aria-label="Close"
                                            on:click=move |_| selected.set(None)
                                        >
                                            <Icon icon=X size="16px" />
                                        </button>
                                    </div>
                                    <p class="text-sm text-stone-600 mt-2">{marker.description}</p>
                                    <div class="text-xs text-stone-400 mt-2">
                                        {format!("{:.2}, {:.2}", marker.coordinates.lat, marker.coordinates.lng)}
                                    </div>
                                    {link.map(|href| {
                                        view! {
                                            <a href=href class="inline-block mt-3 text-sm font-medium text-emerald-700 hover:underline">
                                                "Open guide →"
                                            </a>
                                        }
                                    })}
                                </div>
                            }
                        })
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_projection_stays_inside_margins() {
        let store = FixtureStore::bundled();
        let all = markers::project(store, &MarkerFilter::default());
        let points: Vec<GeoPoint> = all.iter().map(|m| m.coordinates).collect();
        let viewport = Viewport::fit(&points);
        for point in points {
            let (x, y) = to_svg(&viewport, point);
            assert!((MARGIN..=WIDTH - MARGIN).contains(&x));
            assert!((MARGIN..=HEIGHT - MARGIN).contains(&y));
        }
    }
}
