use leptos::prelude::*;

/// One selectable chip: form value and display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Options whose value doubles as the label, e.g. tags and locations.
    pub fn plain(values: &[String]) -> Vec<Self> {
        values.iter().map(|v| Self::new(v.clone(), v.clone())).collect()
    }
}

/// A labelled row of chips with a leading "All" chip (value `"all"`).
#[component]
pub fn FilterChips(
    #[prop(into)]
    label: String,
    options: Vec<FilterOption>,
    #[prop(into)]
    selected: Signal<String>,
    #[prop(into)]
    on_select: Callback<String>,
) -> impl IntoView {
    let chip = move |option: FilterOption| {
        let value = option.value.clone();
        let is_active = {
            let value = value.clone();
            move || selected.get() == value
        };
        view! {
            <button
                class=move || {
                    if is_active() {
                        "px-3 py-1 rounded-full text-sm bg-emerald-600 text-white shadow-sm"
                    } else {
                        "px-3 py-1 rounded-full text-sm bg-white text-stone-600 border border-stone-200 hover:border-emerald-400"
                    }
                }
                on:click=move |_| on_select.run(value.clone())
            >
                {option.label}
            </button>
        }
    };

    let chips = std::iter::once(FilterOption::new("all", "All"))
        .chain(options)
        .map(chip)
        .collect_view();

    view! {
        <div class="flex flex-wrap items-center gap-2">
            <span class="text-sm font-medium text-stone-500 mr-1">{label}</span>
            {chips}
        </div>
    }
}
