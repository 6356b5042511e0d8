use super::*;
use crate::net::types::UserIdentity;

fn signed_in() -> AuthState {
    let mut state = AuthState::default();
    state.settle_initial(Some(UserIdentity {
        id: 1,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "a@b.com".to_owned(),
    }));
    state
}

// =============================================================
// Gate evaluation
// =============================================================

#[test]
fn checking_while_startup_unsettled() {
    let state = AuthState::default();
    assert_eq!(evaluate(&state), Gate::Checking);
}

#[test]
fn denied_once_settled_without_user() {
    let mut state = AuthState::default();
    state.settle_initial(None);
    assert_eq!(evaluate(&state), Gate::Denied);
}

#[test]
fn granted_once_settled_with_user() {
    assert_eq!(evaluate(&signed_in()), Gate::Granted);
}

#[test]
fn denied_again_after_logout_clears_user() {
    let mut state = signed_in();
    state.user = None;
    assert_eq!(evaluate(&state), Gate::Denied);
}

// =============================================================
// Redirect intent
// =============================================================

#[test]
fn capture_carries_the_attempted_path() {
    let intent = RedirectIntent::capture("/app/journals");
    assert_eq!(intent.target_path, "/app/journals");
    assert_eq!(intent.login_url(), "/login?from=/app/journals");
}

#[test]
fn capture_falls_back_on_non_absolute_paths() {
    let intent = RedirectIntent::capture("");
    assert_eq!(intent.target_path, DEFAULT_AFTER_LOGIN);
}

#[test]
fn from_query_round_trips_the_captured_path() {
    let intent = RedirectIntent::from_query(Some("/app/entry/7".to_owned()));
    assert_eq!(intent.target_path, "/app/entry/7");
}

#[test]
fn from_query_defaults_when_absent() {
    let intent = RedirectIntent::from_query(None);
    assert_eq!(intent.target_path, DEFAULT_AFTER_LOGIN);
}

#[test]
fn from_query_rejects_external_destinations() {
    assert_eq!(
        RedirectIntent::from_query(Some("https://evil.example".to_owned())).target_path,
        DEFAULT_AFTER_LOGIN
    );
    assert_eq!(
        RedirectIntent::from_query(Some("//evil.example".to_owned())).target_path,
        DEFAULT_AFTER_LOGIN
    );
}
