use std::sync::atomic::{AtomicBool, Ordering};

use super::*;

fn user(id: i64) -> UserIdentity {
    UserIdentity {
        id,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "a@b.com".to_owned(),
    }
}

fn success(id: i64) -> Envelope<UserIdentity> {
    Envelope { success: true, data: Some(user(id)), message: None }
}

// =============================================================
// Startup lifecycle
// =============================================================

#[test]
fn starts_initializing_with_no_user() {
    let state = AuthState::default();
    assert!(state.initializing);
    assert!(state.user.is_none());
    assert!(!state.action_pending);
    assert!(state.last_error.is_none());
}

#[test]
fn settle_initial_drops_initializing_exactly_once() {
    let mut state = AuthState::default();
    state.settle_initial(Some(user(1)));
    assert!(!state.initializing);
    assert_eq!(state.user.as_ref().unwrap().id, 1);

    // A late duplicate settle must not revive or overwrite the session.
    state.settle_initial(None);
    assert!(!state.initializing);
    assert_eq!(state.user.as_ref().unwrap().id, 1);
}

#[test]
fn login_during_startup_survives_late_settle() {
    let mut state = AuthState::default();
    // Login resolves before the startup check does.
    state.begin_action();
    assert!(state.apply_sign_in(&success(5), LOGIN_FALLBACK));
    // The stale cookie snapshot must not wipe the fresher session.
    state.settle_initial(None);
    assert!(!state.initializing);
    assert_eq!(state.user.as_ref().unwrap().id, 5);
}

#[test]
fn settle_initial_with_no_session_leaves_user_none() {
    let mut state = AuthState::default();
    state.settle_initial(None);
    assert!(!state.initializing);
    assert!(state.user.is_none());
}

#[test]
fn session_user_requires_success() {
    assert_eq!(session_user(success(1)).unwrap().id, 1);
    assert!(session_user(Envelope::absent()).is_none());
    // A success flag without a payload is still no session.
    let hollow = Envelope { success: true, data: None, message: None };
    assert!(session_user(hollow).is_none());
}

#[test]
fn settle_checked_applies_while_alive() {
    let alive = AtomicBool::new(true);
    let mut state = AuthState::default();
    assert!(settle_checked(&alive, &mut state, Some(user(1))));
    assert!(!state.initializing);
    assert!(state.is_authenticated());
}

#[test]
fn settle_checked_discards_result_after_unmount() {
    let alive = AtomicBool::new(true);
    let mut state = AuthState::default();
    alive.store(false, Ordering::Relaxed);
    assert!(!settle_checked(&alive, &mut state, Some(user(1))));
    // No mutation observed: still initializing, still no user.
    assert!(state.initializing);
    assert!(state.user.is_none());
}

// =============================================================
// Action lifecycle
// =============================================================

#[test]
fn begin_action_blocks_reentry() {
    let mut state = AuthState::default();
    assert!(state.begin_action());
    assert!(state.action_pending);
    assert!(!state.begin_action());
    assert!(state.action_pending);
}

#[test]
fn sign_in_success_sets_user_and_clears_error() {
    let mut state = AuthState { last_error: Some("old".to_owned()), ..AuthState::default() };
    state.begin_action();
    assert!(state.apply_sign_in(&success(1), LOGIN_FALLBACK));
    assert_eq!(state.user.as_ref().unwrap().id, 1);
    assert!(state.last_error.is_none());
    assert!(!state.action_pending);
}

#[test]
fn sign_in_failure_clears_user_and_keeps_server_message() {
    let mut state = AuthState::default();
    state.begin_action();
    let result = Envelope::failure("Invalid email or password.");
    assert!(!state.apply_sign_in(&result, LOGIN_FALLBACK));
    assert!(state.user.is_none());
    assert_eq!(state.last_error.as_deref(), Some("Invalid email or password."));
    assert!(!state.action_pending);
}

#[test]
fn sign_in_failure_without_message_uses_fallback() {
    let mut state = AuthState::default();
    state.begin_action();
    assert!(!state.apply_sign_in(&Envelope::absent(), LOGIN_FALLBACK));
    assert_eq!(state.last_error.as_deref(), Some(LOGIN_FALLBACK));
}

#[test]
fn sign_in_success_without_payload_is_a_failure() {
    let mut state = AuthState::default();
    state.begin_action();
    let hollow = Envelope { success: true, data: None, message: None };
    assert!(!state.apply_sign_in(&hollow, REGISTER_FALLBACK));
    assert!(state.user.is_none());
    assert_eq!(state.last_error.as_deref(), Some(REGISTER_FALLBACK));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_success_clears_user_and_error() {
    let mut state = AuthState::default();
    state.settle_initial(Some(user(1)));
    state.last_error = Some("old".to_owned());
    state.begin_action();
    state.apply_logout(&Envelope { success: true, data: None, message: None });
    assert!(state.user.is_none());
    assert!(state.last_error.is_none());
    assert!(!state.action_pending);
}

#[test]
fn logout_failure_keeps_session_and_surfaces_error() {
    let mut state = AuthState::default();
    state.settle_initial(Some(user(1)));
    state.begin_action();
    state.apply_logout(&Envelope::failure("Session backend unavailable"));
    assert!(state.is_authenticated());
    assert_eq!(state.last_error.as_deref(), Some("Session backend unavailable"));
    assert!(!state.action_pending);
}

#[test]
fn logout_when_already_logged_out_is_harmless() {
    let mut state = AuthState::default();
    state.settle_initial(None);
    state.begin_action();
    // The backend rejects the call (no session to invalidate); the user
    // stays logged out and the failure is surfaced, not thrown.
    state.apply_logout(&Envelope::failure("No active session"));
    assert!(state.user.is_none());
    assert_eq!(state.last_error.as_deref(), Some("No active session"));
    assert!(!state.action_pending);
}

// =============================================================
// Profile refresh
// =============================================================

#[test]
fn refresh_identity_replaces_signed_in_user() {
    let mut state = AuthState::default();
    state.settle_initial(Some(user(1)));
    let renamed = UserIdentity { first_name: "Grace".to_owned(), ..user(1) };
    state.refresh_identity(renamed.clone());
    assert_eq!(state.user.as_ref().unwrap().first_name, "Grace");
}

#[test]
fn refresh_identity_ignored_when_signed_out() {
    let mut state = AuthState::default();
    state.settle_initial(None);
    state.refresh_identity(user(1));
    assert!(state.user.is_none());
}
