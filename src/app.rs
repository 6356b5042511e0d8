//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::pages::{
    entry::EntryPage, entry_edit::EntryEditPage, journals::JournalsPage, landing::LandingPage,
    login::LoginPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::auth::AuthState;
use crate::state::journal::JournalState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, kicks off the one-time startup
/// session check, and sets up client-side routing. The route guard renders
/// its loading state until that check settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let journal = RwSignal::new(JournalState::default());

    provide_context(auth);
    provide_context(journal);

    #[cfg(feature = "hydrate")]
    crate::state::auth::initialize(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/emotion-aware.css"/>
        <Title text="Emotion Aware"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("app") view=RequireAuth>
                    <Route path=StaticSegment("") view=JournalsPage/>
                    <Route path=StaticSegment("journals") view=JournalsPage/>
                    <Route path=StaticSegment("new") view=EntryEditPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=(StaticSegment("entry"), ParamSegment("id")) view=EntryPage/>
                    <Route
                        path=(StaticSegment("entry"), ParamSegment("id"), StaticSegment("edit"))
                        view=EntryEditPage
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
