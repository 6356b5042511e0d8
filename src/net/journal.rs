//! Journal REST client for the `/api/journals` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookies included.
//! Server-side (SSR): stubs returning structured failures.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "journal_test.rs"]
mod journal_test;

use super::types::{Envelope, JournalDraft, JournalEntry};

#[cfg(feature = "hydrate")]
const JOURNALS_URL: &str = "/api/journals/";

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn entry_endpoint(entry_id: i64) -> String {
    format!("/api/journals/{entry_id}")
}

/// Fetch all journal entries for the current user.
pub async fn list_entries() -> Envelope<Vec<JournalEntry>> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_envelope(JOURNALS_URL, "Could not load journal entries").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Envelope::failure(SERVER_STUB)
    }
}

/// Fetch a single journal entry by id.
pub async fn fetch_entry(entry_id: i64) -> Envelope<JournalEntry> {
    #[cfg(feature = "hydrate")]
    {
        super::http::get_envelope(&entry_endpoint(entry_id), "Could not load this entry").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entry_id;
        Envelope::failure(SERVER_STUB)
    }
}

/// Create a new journal entry.
pub async fn create_entry(draft: &JournalDraft) -> Envelope<JournalEntry> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_envelope(JOURNALS_URL, draft, "Could not save the entry").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Envelope::failure(SERVER_STUB)
    }
}

/// Update an existing journal entry.
pub async fn update_entry(entry_id: i64, draft: &JournalDraft) -> Envelope<JournalEntry> {
    #[cfg(feature = "hydrate")]
    {
        super::http::put_envelope(&entry_endpoint(entry_id), draft, "Could not save the entry").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (entry_id, draft);
        Envelope::failure(SERVER_STUB)
    }
}

/// Delete a journal entry.
pub async fn delete_entry(entry_id: i64) -> Envelope<()> {
    #[cfg(feature = "hydrate")]
    {
        super::http::delete_envelope(&entry_endpoint(entry_id), "Could not delete the entry").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entry_id;
        Envelope::failure(SERVER_STUB)
    }
}
