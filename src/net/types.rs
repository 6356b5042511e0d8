//! Shared wire DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's serialized shapes (snake_case field
//! names, envelope wrapper) so serde can decode responses without any
//! renaming layer. Request payloads live here too, next to the responses
//! they produce.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Normalized REST response envelope.
///
/// The backend wraps every response in `{ success, message, data, ... }`;
/// extra bookkeeping fields (`status_code`, `path`, `time_stamp`) are
/// ignored. Transport failures are normalized into this same shape by the
/// request helpers so callers only ever see one result type.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// A failure result carrying a user-facing message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// A bare failure with no message, used for the startup session check
    /// where "no session" is an expected outcome rather than an error.
    pub fn absent() -> Self {
        Self {
            success: false,
            data: None,
            message: None,
        }
    }
}

/// The authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserIdentity {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Login request payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Profile update payload for `/api/users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// One detected emotion with its model confidence (a 0..=1 probability).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emotion {
    pub name: String,
    pub confidence: f64,
}

impl Emotion {
    /// Confidence as a whole percentage, clamped to 0..=100.
    pub fn percent(&self) -> u8 {
        let percent = (self.confidence.clamp(0.0, 1.0) * 100.0).round();
        // round() of a value in 0..=100 fits u8
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            percent as u8
        }
    }
}

/// A journal entry with the backend's attached emotion analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    /// ISO 8601 timestamp string, absent on freshly echoed drafts.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub emotions: Vec<Emotion>,
}

impl JournalEntry {
    /// Title to display; entries may be saved without one.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => "Untitled",
        }
    }

    /// The highest-confidence detected emotion, if analysis has run.
    pub fn top_emotion(&self) -> Option<&Emotion> {
        self.emotions
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

/// Create/update payload for a journal entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JournalDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
}
