//! Single journal entry view with emotion analysis and delete flow.

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::emotion_badge::EmotionBadge;
use crate::net::types::JournalEntry;

/// Parse the `:id` route parameter. Missing or malformed ids yield `None`
/// and the page renders its not-found state.
pub(crate) fn parse_entry_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|raw| raw.parse().ok())
}

#[component]
pub fn EntryPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let entry = RwSignal::new(None::<JournalEntry>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let show_delete = RwSignal::new(false);
    let delete_busy = RwSignal::new(false);

    let entry_id = parse_entry_id(params.get_untracked().get("id"));

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let response = match entry_id {
                Some(id) => crate::net::journal::fetch_entry(id).await,
                None => crate::net::types::Envelope::failure("Entry not found"),
            };
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            loading.try_set(false);
            if response.success {
                entry.try_set(response.data);
            } else {
                error.try_set(Some(
                    response.message.unwrap_or_else(|| "Entry not found".to_owned()),
                ));
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = entry_id;

    let on_delete = move |_| {
        if delete_busy.get_untracked() {
            return;
        }
        let Some(id) = entry.get_untracked().map(|entry| entry.id) else {
            return;
        };
        delete_busy.set(true);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let response = crate::net::journal::delete_entry(id).await;
            if response.success {
                navigate("/app/journals", leptos_router::NavigateOptions::default());
            } else {
                delete_busy.set(false);
                show_delete.set(false);
                error.set(Some(
                    response
                        .message
                        .unwrap_or_else(|| "Could not delete the entry".to_owned()),
                ));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, navigate);
    };

    view! {
        <div class="entry-page">
            <Show when=move || error.get().is_some()>
                <p class="entry-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading entry..."</p> }
            >
                {move || {
                    entry
                        .get()
                        .map(|entry| {
                            let edit_href = format!("/app/entry/{}/edit", entry.id);
                            let date = entry.created_at.clone().unwrap_or_default();
                            let title = entry.display_title().to_owned();
                            let content = entry.content.clone();
                            let emotions = entry.emotions.clone();
                            view! {
                                <article class="entry-view">
                                    <header class="entry-view__header">
                                        <h1>{title}</h1>
                                        <span class="entry-view__date">{date}</span>
                                    </header>
                                    <div class="entry-view__emotions">
                                        {emotions
                                            .into_iter()
                                            .map(|emotion| view! { <EmotionBadge emotion=emotion/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <p class="entry-view__content">{content}</p>
                                    <footer class="entry-view__actions">
                                        <a class="btn" href=edit_href>
                                            "Edit"
                                        </a>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| show_delete.set(true)
                                        >
                                            "Delete"
                                        </button>
                                    </footer>
                                </article>
                            }
                        })
                }}
            </Show>
            <Show when=move || show_delete.get()>
                <div class="dialog-backdrop" on:click=move |_| show_delete.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete Entry"</h2>
                        <p class="dialog__danger">
                            "This will permanently delete this entry and its analysis."
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_delete.set(false)>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || delete_busy.get()
                                on:click=on_delete.clone()
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
