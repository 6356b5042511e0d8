//! Route-gating decisions derived from auth-session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same three-way gate: hold while the
//! startup check is in flight, redirect to login (remembering the attempted
//! path) once it settles without a user, render otherwise. Keeping the
//! decision pure lets the guard component stay a thin reactive shell.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Where a successful login lands when no destination was remembered.
pub const DEFAULT_AFTER_LOGIN: &str = "/app/journals";

/// Observable gate states for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Startup session check still in flight; render a neutral loading view.
    Checking,
    /// Settled with no user; redirect to the login screen.
    Denied,
    /// Settled with a user; render the protected subtree.
    Granted,
}

/// Evaluate the gate for the current auth state. Never yields `Denied` or
/// `Granted` before the startup check settles.
pub fn evaluate(state: &AuthState) -> Gate {
    if state.initializing {
        Gate::Checking
    } else if state.user.is_none() {
        Gate::Denied
    } else {
        Gate::Granted
    }
}

/// The destination a visitor was trying to reach before being sent to login.
///
/// Captured by the guard at the moment of a denied access, carried to the
/// login screen as the `from` query parameter, and consumed once after a
/// successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectIntent {
    pub target_path: String,
}

impl RedirectIntent {
    /// Capture the currently requested path.
    pub fn capture(current_path: &str) -> Self {
        let target = if current_path.starts_with('/') {
            current_path
        } else {
            DEFAULT_AFTER_LOGIN
        };
        Self { target_path: target.to_owned() }
    }

    /// Login URL carrying this intent as the `from` query parameter.
    pub fn login_url(&self) -> String {
        format!("/login?from={}", self.target_path)
    }

    /// Rebuild the intent from the login page's `from` query parameter.
    /// Only same-app absolute paths are honored; anything else falls back
    /// to the default landing page.
    pub fn from_query(from: Option<String>) -> Self {
        let target = from
            .filter(|path| path.starts_with('/') && !path.starts_with("//"))
            .unwrap_or_else(|| DEFAULT_AFTER_LOGIN.to_owned());
        Self { target_path: target }
    }
}
