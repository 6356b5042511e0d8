//! Route guard wrapping every authenticated route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the `/app` layout route. Renders a neutral loading view while
//! the startup session check is in flight, redirects once to the login
//! screen (carrying the attempted path) when the check settles without a
//! user, and renders the nested routes behind the navbar otherwise. A
//! logout elsewhere clears the user and re-evaluates the gate reactively.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;
use crate::util::auth::{Gate, RedirectIntent, evaluate};

#[component]
pub fn RequireAuth() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        if evaluate(&auth.get()) == Gate::Denied {
            let intent = RedirectIntent::capture(&location.pathname.get_untracked());
            navigate(
                &intent.login_url(),
                NavigateOptions { replace: true, ..Default::default() },
            );
        }
    });

    view! {
        <Show
            when=move || evaluate(&auth.get()) == Gate::Granted
            fallback=move || {
                view! {
                    <div class="guard-screen">
                        <p class="guard-screen__message">
                            {move || {
                                if auth.get().initializing { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__main">
                    <Outlet/>
                </main>
            </div>
        </Show>
    }
}
