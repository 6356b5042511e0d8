//! Application state modules provided as Leptos context signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs hold plain data; the app root wraps each in an `RwSignal`
//! and provides it via context so pages and components share one source of
//! truth. Transition logic lives on the structs themselves, keeping it
//! testable without a browser.

pub mod auth;
pub mod journal;
