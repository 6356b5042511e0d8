//! Client-side form validation for the auth and journal forms.
//!
//! Validation failures never reach the network: a rejected submit leaves the
//! auth store's action-pending flag untouched and surfaces the message next
//! to the form instead.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{Credentials, JournalDraft, ProfileUpdate, Registration};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Structural email check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && !tld.is_empty()
}

/// Validate the login form into request credentials.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Validate the registration form into a request payload.
pub fn validate_registration(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    let email = email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Registration {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Validate the profile form into an update payload.
pub fn validate_profile(
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<ProfileUpdate, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    let email = email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
        return Err("All fields are required.");
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(ProfileUpdate {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
    })
}

/// Validate the entry editor form into a journal draft. The title is
/// optional; blank titles are stored as absent.
pub fn validate_draft(title: &str, content: &str) -> Result<JournalDraft, &'static str> {
    let content = content.trim();
    if content.is_empty() {
        return Err("Write something before saving.");
    }
    let title = title.trim();
    Ok(JournalDraft {
        title: (!title.is_empty()).then(|| title.to_owned()),
        content: content.to_owned(),
    })
}
