use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Tag,
    Accent,
    Overlay,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Tag => "bg-emerald-50 text-emerald-700 border border-emerald-100",
            BadgeVariant::Accent => "bg-amber-100 text-amber-800",
            BadgeVariant::Overlay => "bg-black/50 text-white backdrop-blur-sm",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)]
    variant: BadgeVariant,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "px-2 py-0.5 rounded-full text-xs font-medium inline-flex items-center gap-1 {}",
        variant.class()
    );

    view! {
        <span class=class>
            {children()}
        </span>
    }
}

/// A wrapping row of tag badges.
#[component]
pub fn TagList(tags: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-1.5">
            {tags
                .into_iter()
                .map(|tag| view! { <Badge>{format!("#{tag}")}</Badge> })
                .collect_view()}
        </div>
    }
}
