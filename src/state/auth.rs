//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for "is someone signed in". The signal is provided
//! from the app root; the route guard, login/register forms, and navbar all
//! read it. Every mutation funnels through the transition helpers below so
//! the lifecycle rules hold no matter which page triggered the request:
//! the startup check settles `initializing` exactly once, and at most one
//! auth action is in flight at a time.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::session;
use crate::net::types::{Credentials, Envelope, Registration, UserIdentity};

pub(crate) const LOGIN_FALLBACK: &str = "Login failed";
pub(crate) const REGISTER_FALLBACK: &str = "Registration failed";
pub(crate) const LOGOUT_FALLBACK: &str = "Logout failed";

/// Authentication state tracking the current user and request lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// The authority for "is authenticated".
    pub user: Option<UserIdentity>,
    /// True only while the one-time startup session check is in flight.
    pub initializing: bool,
    /// True while a login/register/logout request is in flight.
    pub action_pending: bool,
    /// Message from the last failed action, cleared on success.
    pub last_error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            initializing: true,
            action_pending: false,
            last_error: None,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Record the result of the startup session check. `initializing` drops
    /// exactly once; a second settle is ignored. An explicit sign-in that
    /// completed while the check was still in flight wins over the (older)
    /// cookie snapshot.
    pub fn settle_initial(&mut self, user: Option<UserIdentity>) {
        if !self.initializing {
            return;
        }
        if self.user.is_none() {
            self.user = user;
        }
        self.initializing = false;
    }

    /// Mark an auth action as started. Returns `false` (changing nothing)
    /// when another action is already in flight.
    pub fn begin_action(&mut self) -> bool {
        if self.action_pending {
            return false;
        }
        self.action_pending = true;
        true
    }

    /// Apply a login or register result. Returns whether a user is now
    /// signed in. A "success" without a user payload counts as a failure.
    pub fn apply_sign_in(&mut self, result: &Envelope<UserIdentity>, fallback: &str) -> bool {
        if result.success && result.data.is_some() {
            self.user = result.data.clone();
            self.last_error = None;
        } else {
            self.user = None;
            self.last_error = Some(
                result
                    .message
                    .clone()
                    .unwrap_or_else(|| fallback.to_owned()),
            );
        }
        self.action_pending = false;
        self.user.is_some()
    }

    /// Apply a logout result. On failure the session is kept as-is so the
    /// user can retry; the backend still considers them signed in.
    pub fn apply_logout(&mut self, result: &Envelope<()>) {
        if result.success {
            self.user = None;
            self.last_error = None;
        } else {
            self.last_error = Some(
                result
                    .message
                    .clone()
                    .unwrap_or_else(|| LOGOUT_FALLBACK.to_owned()),
            );
        }
        self.action_pending = false;
    }

    /// Replace the stored identity after a profile update. Only meaningful
    /// while signed in; ignored otherwise.
    pub fn refresh_identity(&mut self, user: UserIdentity) {
        if self.user.is_some() {
            self.user = Some(user);
        }
    }
}

/// The user to store from a startup-check response: only a successful check
/// yields a session.
pub(crate) fn session_user(response: Envelope<UserIdentity>) -> Option<UserIdentity> {
    if response.success { response.data } else { None }
}

/// Apply the settled session result unless the owning component has gone
/// away. Returns whether the state was written.
pub(crate) fn settle_checked(
    alive: &AtomicBool,
    state: &mut AuthState,
    user: Option<UserIdentity>,
) -> bool {
    if !alive.load(Ordering::Relaxed) {
        return false;
    }
    state.settle_initial(user);
    true
}

/// Run the one-time startup session check.
///
/// Call from the component that owns the auth context. If that component is
/// unmounted before the check resolves, the pending result is discarded
/// instead of written into disposed state.
#[cfg(feature = "hydrate")]
pub fn initialize(auth: RwSignal<AuthState>) {
    use std::sync::Arc;

    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = alive.clone();
    leptos::task::spawn_local(async move {
        let response = session::fetch_current_session().await;
        let user = session_user(response);
        auth.try_update(|state| settle_checked(&alive_task, state, user));
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));
}

/// Outcome of a login or register call, handed back to the submitting form
/// so it can decide navigation without waiting on a re-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The request completed and the user is signed in.
    SignedIn,
    /// The request completed and failed; `last_error` holds the message.
    Failed,
    /// Another auth action was already in flight; nothing was sent.
    Busy,
}

/// Log in with the given credentials.
pub async fn login(auth: RwSignal<AuthState>, credentials: &Credentials) -> ActionOutcome {
    if !auth.try_update(AuthState::begin_action).unwrap_or(false) {
        return ActionOutcome::Busy;
    }
    let result = session::login(credentials).await;
    let signed_in = auth
        .try_update(|state| state.apply_sign_in(&result, LOGIN_FALLBACK))
        .unwrap_or(false);
    if signed_in { ActionOutcome::SignedIn } else { ActionOutcome::Failed }
}

/// Register a new account. The register response itself carries the
/// authenticated user, so no follow-up login request is made.
pub async fn register(auth: RwSignal<AuthState>, details: &Registration) -> ActionOutcome {
    if !auth.try_update(AuthState::begin_action).unwrap_or(false) {
        return ActionOutcome::Busy;
    }
    let result = session::register(details).await;
    let signed_in = auth
        .try_update(|state| state.apply_sign_in(&result, REGISTER_FALLBACK))
        .unwrap_or(false);
    if signed_in { ActionOutcome::SignedIn } else { ActionOutcome::Failed }
}

/// Log out the current session. Returns whether the backend confirmed it.
pub async fn logout(auth: RwSignal<AuthState>) -> bool {
    if !auth.try_update(AuthState::begin_action).unwrap_or(false) {
        return false;
    }
    let result = session::logout().await;
    auth.try_update(|state| state.apply_logout(&result));
    auth.try_with(|state| state.user.is_none()).unwrap_or(false)
}
