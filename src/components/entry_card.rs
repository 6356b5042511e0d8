//! Journal entry card for the timeline grid.

#[cfg(test)]
#[path = "entry_card_test.rs"]
mod entry_card_test;

use leptos::prelude::*;

use crate::components::emotion_badge::EmotionBadge;
use crate::net::types::JournalEntry;

const PREVIEW_CHARS: usize = 160;

/// First `max_chars` characters of the content with an ellipsis when
/// truncated. Cuts on character boundaries, never mid-codepoint.
pub fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_owned();
    }
    let mut short: String = content.chars().take(max_chars).collect();
    short.push('…');
    short
}

#[component]
pub fn EntryCard(entry: JournalEntry) -> impl IntoView {
    let href = format!("/app/entry/{}", entry.id);
    let title = entry.display_title().to_owned();
    let date = entry.created_at.clone().unwrap_or_default();
    let body = preview(&entry.content, PREVIEW_CHARS);
    let top = entry.top_emotion().cloned();

    view! {
        <a class="entry-card" href=href>
            <div class="entry-card__meta">
                <span class="entry-card__date">{date}</span>
                {top.map(|emotion| view! { <EmotionBadge emotion=emotion/> })}
            </div>
            <h2 class="entry-card__title">{title}</h2>
            <p class="entry-card__preview">{body}</p>
        </a>
    }
}
