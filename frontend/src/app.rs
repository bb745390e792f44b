use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::destinations::DestinationsPage;
use crate::components::guides::{GuideDetailPage, GuidesPage};
use crate::components::home::HomePage;
use crate::components::layout::{Footer, Header};
use crate::components::map::MapPage;
use crate::components::not_found::NotFound;
use crate::components::photos::PhotosPage;
use crate::components::timeline::TimelinePage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen flex flex-col">
                <Header />
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/map") view=MapPage />
                        <Route path=path!("/timeline") view=TimelinePage />
                        <Route path=path!("/photos") view=PhotosPage />
                        <Route path=path!("/guides") view=GuidesPage />
                        <Route path=path!("/guides/:id") view=GuideDetailPage />
                        <Route path=path!("/destinations") view=DestinationsPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
