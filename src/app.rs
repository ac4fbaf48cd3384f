use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{
    AboutPage, BookingPage, ContactPage, HomePage, NotFoundPage, OfficeSpacesPage,
};
use crate::ui::{NotificationsContainer, provide_notifications};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages titles and meta tags
    provide_meta_context();

    // Toasts are shared by every page
    provide_notifications();

    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/office-spaces") view=OfficeSpacesPage />
                    <Route path=path!("/booking") view=BookingPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
        </Router>

        <NotificationsContainer />
    }
}
