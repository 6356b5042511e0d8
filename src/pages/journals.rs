//! Journal timeline page with emotion filter and substring search.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the entry list once
//! on mount; filter and search run purely over the loaded items.

use leptos::prelude::*;

use crate::components::entry_card::EntryCard;
use crate::state::journal::{EMOTION_FILTERS, JournalState};

#[component]
pub fn JournalsPage() -> impl IntoView {
    let journal = expect_context::<RwSignal<JournalState>>();

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        journal.update(|state| {
            state.loading = true;
            state.error = None;
        });
        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let response = crate::net::journal::list_entries().await;
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            journal.try_update(|state| {
                state.loading = false;
                if response.success {
                    state.items = response.data.unwrap_or_default();
                    state.error = None;
                } else {
                    state.error = Some(
                        response
                            .message
                            .unwrap_or_else(|| "Could not load journal entries".to_owned()),
                    );
                }
            });
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="journals-page">
            <header class="journals-page__header">
                <h1>"Your Journal Timeline"</h1>
                <a class="btn btn--primary" href="/app/new">
                    "+ New Entry"
                </a>
            </header>

            <div class="journals-page__controls">
                <input
                    class="journals-page__search"
                    type="text"
                    placeholder="Search by title or content..."
                    prop:value=move || journal.get().search
                    on:input=move |ev| {
                        journal.update(|state| state.search = event_target_value(&ev));
                    }
                />
                <label class="journals-page__filter-label">
                    "Filter by Emotion:"
                    <select
                        class="journals-page__filter"
                        on:change=move |ev| {
                            journal.update(|state| state.filter = event_target_value(&ev));
                        }
                    >
                        {EMOTION_FILTERS
                            .into_iter()
                            .map(|name| {
                                view! {
                                    <option value=name selected=move || journal.get().filter == name>
                                        {name}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>

            <Show when=move || journal.get().error.is_some()>
                <p class="journals-page__error">
                    {move || journal.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !journal.get().loading
                fallback=move || view! { <p>"Loading entries..."</p> }
            >
                <div class="journals-page__grid">
                    {move || {
                        let visible = journal.get().visible();
                        if visible.is_empty() {
                            view! {
                                <div class="journals-page__empty">
                                    <p>"No journal entries match your criteria."</p>
                                    <p>"Clear the search or try a different emotion filter."</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            visible
                                .into_iter()
                                .map(|entry| view! { <EntryCard entry=entry/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
