//! User REST client for the `/api/users` endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use super::types::{Envelope, ProfileUpdate, UserIdentity};

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: i64) -> String {
    format!("/api/users/{user_id}")
}

/// Update the current user's profile fields.
pub async fn update_user(user_id: i64, profile: &ProfileUpdate) -> Envelope<UserIdentity> {
    #[cfg(feature = "hydrate")]
    {
        super::http::put_envelope(&user_endpoint(user_id), profile, "Could not update your profile")
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, profile);
        Envelope::failure(SERVER_STUB)
    }
}
