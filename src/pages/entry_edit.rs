//! Create/edit form for a journal entry.
//!
//! Mounted at `/app/new` (no `:id` parameter, creates) and at
//! `/app/entry/:id/edit` (prefills from the backend, updates).

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::util::validate::validate_draft;

#[component]
pub fn EntryEditPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let entry_id = super::entry::parse_entry_id(params.get_untracked().get("id"));
    let editing = entry_id.is_some();

    // Prefill when editing an existing entry.
    #[cfg(feature = "hydrate")]
    if let Some(id) = entry_id {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let response = crate::net::journal::fetch_entry(id).await;
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            if let Some(entry) = response.data.filter(|_| response.success) {
                title.try_set(entry.title.unwrap_or_default());
                content.try_set(entry.content);
            } else {
                message.try_set(
                    response
                        .message
                        .unwrap_or_else(|| "Could not load this entry".to_owned()),
                );
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = match validate_draft(&title.get_untracked(), &content.get_untracked()) {
            Ok(draft) => draft,
            Err(text) => {
                message.set(text.to_owned());
                return;
            }
        };
        message.set(String::new());
        busy.set(true);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let response = match entry_id {
                Some(id) => crate::net::journal::update_entry(id, &draft).await,
                None => crate::net::journal::create_entry(&draft).await,
            };
            if response.success {
                let destination = response
                    .data
                    .map_or_else(|| "/app/journals".to_owned(), |entry| {
                        format!("/app/entry/{}", entry.id)
                    });
                navigate(&destination, leptos_router::NavigateOptions::default());
            } else {
                busy.set(false);
                message.set(
                    response
                        .message
                        .unwrap_or_else(|| "Could not save the entry".to_owned()),
                );
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, navigate);
    };

    view! {
        <div class="entry-edit-page">
            <h1>{if editing { "Edit Entry" } else { "New Entry" }}</h1>
            <Show when=move || !message.get().is_empty()>
                <p class="entry-edit-page__message">{move || message.get()}</p>
            </Show>
            <form class="entry-edit-form" on:submit=on_submit>
                <input
                    class="entry-edit-form__title"
                    type="text"
                    placeholder="Title (optional)"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="entry-edit-form__content"
                    placeholder="What happened today?"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <div class="entry-edit-form__actions">
                    <a class="btn" href="/app/journals">
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save Entry" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
