//! Registration page. A successful registration is already an authenticated
//! session (the backend sets the cookie on the register request), so the
//! page navigates straight into the app without a second login call.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::validate::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
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
        let details = match validate_registration(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(details) => details,
            Err(message) => {
                form_error.set(message.to_owned());
                return;
            }
        };
        form_error.set(String::new());
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::auth::{ActionOutcome, register};
            use crate::util::auth::DEFAULT_AFTER_LOGIN;

            if register(auth, &details).await == ActionOutcome::SignedIn {
                navigate(
                    DEFAULT_AFTER_LOGIN,
                    leptos_router::NavigateOptions { replace: true, ..Default::default() },
                );
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (details, navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Your Emotion Aware Account"</h1>
                <p class="auth-card__subtitle">
                    "Already have an account? " <a href="/login">"Sign in here"</a>
                </p>
                <Show when=move || error_text().is_some()>
                    <p class="auth-card__error">{move || error_text().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="First Name"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Last Name"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </div>
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
                        placeholder="Password (min 8 characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        {move || if busy() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
