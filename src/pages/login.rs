//! Login page: email + password against the backend session endpoints.
//!
//! On success the page consumes the `from` query parameter (the path the
//! route guard captured when it denied access) and navigates there,
//! deciding from the returned outcome rather than waiting on a re-render.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthState;
use crate::util::validate::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(String::new());

    let busy = move || auth.get().action_pending;
    let error_text = move || {
        let local = form_error.get();
        if local.is_empty() { auth.get().last_error } else { Some(local) }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().action_pending {
            return;
        }
        let credentials =
            match validate_login(&email.get_untracked(), &password.get_untracked()) {
                Ok(credentials) => credentials,
                Err(message) => {
                    form_error.set(message.to_owned());
                    return;
                }
            };
        form_error.set(String::new());
        let from = query.get_untracked().get("from");
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::auth::{ActionOutcome, login};
            use crate::util::auth::RedirectIntent;

            if login(auth, &credentials).await == ActionOutcome::SignedIn {
                let intent = RedirectIntent::from_query(from);
                navigate(
                    &intent.target_path,
                    leptos_router::NavigateOptions { replace: true, ..Default::default() },
                );
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, from, navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in to Emotion Aware"</h1>
                <p class="auth-card__subtitle">
                    "Or " <a href="/register">"create a new account"</a>
                </p>
                <Show when=move || error_text().is_some()>
                    <p class="auth-card__error">{move || error_text().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
