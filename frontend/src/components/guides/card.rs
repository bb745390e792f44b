use leptos::prelude::*;
use timeless_trips::core::present::GuideCard;

use crate::components::design_system::{Badge, BadgeVariant, Card, CardBody, FallbackImage, TagList};

/// Summary card linking to a guide.
#[component]
pub fn GuideCardView(card: GuideCard) -> impl IntoView {
    let GuideCard {
        title,
        meta,
        excerpt,
        tags,
        budget,
        cover,
        href,
        days,
        ..
    } = card;

    view! {
        <a href=href class="group block">
            <Card class="h-full transition-shadow group-hover:shadow-md">
                <div class="relative aspect-[16/10] overflow-hidden bg-stone-100">
                    <FallbackImage
                        src=cover
                        alt=title.clone()
                        class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-105"
                    />
                    <div class="absolute top-3 left-3">
                        <Badge variant=BadgeVariant::Overlay>{format!("{days} days")}</Badge>
                    </div>
                </div>
                <CardBody class="flex flex-col gap-3">
                    <div>
                        <h3 class="text-lg font-semibold text-stone-900 group-hover:text-emerald-700">
                            {title}
                        </h3>
                        <p class="text-xs text-stone-500 mt-1">{meta}</p>
                    </div>
                    <p class="text-sm text-stone-600 line-clamp-3">{excerpt}</p>
                    <TagList tags=tags />
                    <div class="flex items-center justify-between pt-2 border-t border-stone-100">
                        <span class="text-sm font-semibold text-amber-700">{budget}</span>
                        <span class="text-sm text-emerald-700">"Read guide →"</span>
                    </div>
                </CardBody>
            </Card>
        </a>
    }
}
