//! Session REST client for the backend auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookies included.
//! Server-side (SSR): stubs returning structured failures since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! All four operations resolve to an `Envelope`; transport failures become
//! `success: false` results so the auth store never sees an unhandled
//! rejection.

#![allow(clippy::unused_async)]

use super::types::{Credentials, Envelope, Registration, UserIdentity};

#[cfg(feature = "hydrate")]
const LOGIN_URL: &str = "/api/auth/login";
#[cfg(feature = "hydrate")]
const REGISTER_URL: &str = "/api/auth/register";
#[cfg(feature = "hydrate")]
const LOGOUT_URL: &str = "/api/auth/logout";
#[cfg(feature = "hydrate")]
const CURRENT_USER_URL: &str = "/api/auth/current_user";

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB: &str = "not available on server";

/// Authenticate with email and password.
pub async fn login(credentials: &Credentials) -> Envelope<UserIdentity> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_envelope(LOGIN_URL, credentials, "Network error during login").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Envelope::failure(SERVER_STUB)
    }
}

/// Create an account. The backend establishes the session cookie on this
/// same request and echoes the created user, so a successful registration
/// is already an authenticated session.
pub async fn register(details: &Registration) -> Envelope<UserIdentity> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_envelope(REGISTER_URL, details, "Network error during registration").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = details;
        Envelope::failure(SERVER_STUB)
    }
}

/// Invalidate the backend session.
pub async fn logout() -> Envelope<()> {
    #[cfg(feature = "hydrate")]
    {
        super::http::post_envelope(LOGOUT_URL, &serde_json::json!({}), "Network error during logout").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Envelope::failure(SERVER_STUB)
    }
}

/// Ask whether a session already exists (cookie-based). Used only by the
/// startup check; any failure means "no session", not an error.
pub async fn fetch_current_session() -> Envelope<UserIdentity> {
    #[cfg(feature = "hydrate")]
    {
        let envelope: Envelope<UserIdentity> =
            super::http::get_envelope(CURRENT_USER_URL, "no session").await;
        if envelope.success { envelope } else { Envelope::absent() }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Envelope::absent()
    }
}
