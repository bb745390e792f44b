use leptos::prelude::*;

/// A rounded surface with a soft shadow
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let base_class = "bg-white border border-stone-200 rounded-xl shadow-sm overflow-hidden";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

#[component]
pub fn CardBody(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!("p-5 {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}
