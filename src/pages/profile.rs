//! Profile page: edit the signed-in user's name and email.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::validate::validate_profile;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Behind the route guard the user is always present at mount.
    let current = auth.get_untracked().user;
    let first_name =
        RwSignal::new(current.as_ref().map(|u| u.first_name.clone()).unwrap_or_default());
    let last_name =
        RwSignal::new(current.as_ref().map(|u| u.last_name.clone()).unwrap_or_default());
    let email = RwSignal::new(current.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let message = RwSignal::new(String::new());
    let saved = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(user_id) = auth.get_untracked().user.map(|user| user.id) else {
            return;
        };
        let update = match validate_profile(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
        ) {
            Ok(update) => update,
            Err(text) => {
                message.set(text.to_owned());
                saved.set(false);
                return;
            }
        };
        message.set(String::new());
        saved.set(false);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let response = crate::net::user::update_user(user_id, &update).await;
            busy.set(false);
            if let Some(user) = response.data.filter(|_| response.success) {
                auth.update(|state| state.refresh_identity(user));
                saved.set(true);
            } else {
                message.set(
                    response
                        .message
                        .unwrap_or_else(|| "Could not update your profile".to_owned()),
                );
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user_id, update);
    };

    view! {
        <div class="profile-page">
            <h1>"Your Profile"</h1>
            <Show when=move || !message.get().is_empty()>
                <p class="profile-page__error">{move || message.get()}</p>
            </Show>
            <Show when=move || saved.get()>
                <p class="profile-page__saved">"Profile updated."</p>
            </Show>
            <form class="profile-form" on:submit=on_submit>
                <label class="profile-form__label">
                    "First Name"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Last Name"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Email"
                    <input
                        class="profile-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
}
