//! Top navigation bar for the authenticated layout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::theme;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let current_theme = RwSignal::new(theme::initial());
    theme::set(current_theme.get_untracked());

    let user_name = move || {
        auth.get()
            .user
            .map(|user| user.full_name())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::state::auth::logout(auth).await {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
            });
        }
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/app/journals">
                "Emotion Aware"
            </a>
            <nav class="navbar__links">
                <a class="navbar__link" href="/app/journals">
                    "Journals"
                </a>
                <a class="navbar__link" href="/app/new">
                    "New Entry"
                </a>
                <a class="navbar__link" href="/app/profile">
                    "Profile"
                </a>
            </nav>

            <span class="navbar__spacer"></span>

            <button
                class="btn navbar__theme-toggle"
                on:click=move |_| {
                    let next = current_theme.get_untracked().toggled();
                    theme::set(next);
                    current_theme.set(next);
                }
                title="Toggle dark mode"
            >
                {move || if current_theme.get().is_dark() { "☀" } else { "☾" }}
            </button>

            <span class="navbar__self">{user_name}</span>

            <button
                class="btn navbar__logout"
                on:click=on_logout
                disabled=move || auth.get().action_pending
                title="Logout"
            >
                "Logout"
            </button>
        </header>
    }
}
