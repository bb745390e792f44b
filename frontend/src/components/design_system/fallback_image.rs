use leptos::prelude::*;
use timeless_trips::core::media::ImageSource;

/// An `<img>` that swaps to the placeholder image once if loading fails.
#[component]
pub fn FallbackImage(
    #[prop(into)]
    src: String,
    #[prop(into)]
    alt: String,
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let source = RwSignal::new(ImageSource::new(src));

    let on_error = move |_| {
        let mut next = source.get_untracked();
        if next.on_error() {
            source.set(next);
        }
    };

    view! {
        <img
            src=move || source.with(|s| s.current().to_string())
            alt=alt
            class=class
            loading="lazy"
            on:error=on_error
        />
    }
}
