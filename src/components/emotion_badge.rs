//! Badge showing a detected emotion and its confidence.

#[cfg(test)]
#[path = "emotion_badge_test.rs"]
mod emotion_badge_test;

use leptos::prelude::*;

use crate::net::types::Emotion;

/// CSS modifier class for a detected emotion name.
pub fn badge_class(emotion: &str) -> &'static str {
    match emotion.to_ascii_lowercase().as_str() {
        "joy" => "emotion-badge--joy",
        "sadness" => "emotion-badge--sadness",
        "anger" => "emotion-badge--anger",
        "fear" => "emotion-badge--fear",
        "neutral" => "emotion-badge--neutral",
        _ => "emotion-badge--other",
    }
}

#[component]
pub fn EmotionBadge(emotion: Emotion) -> impl IntoView {
    let class = format!("emotion-badge {}", badge_class(&emotion.name));
    let label = format!("{} {}%", emotion.name, emotion.percent());
    view! { <span class=class>{label}</span> }
}
