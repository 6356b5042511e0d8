//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and presentation while reading/writing shared
//! state from Leptos context providers; route-level orchestration stays in
//! `pages`.

pub mod emotion_badge;
pub mod entry_card;
pub mod guard;
pub mod navbar;
