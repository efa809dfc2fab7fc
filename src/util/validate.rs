//! Local form validation rules.
//!
//! Each check is an independent per-field rule evaluated before any network
//! call; failures surface as inline alert text, never as errors.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Loose email shape check: one `@`, a non-empty local part, and a dotted
/// domain, with no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let mut segments = domain.split('.');
    domain.contains('.')
        && segments.all(|seg| !seg.is_empty() && !seg.contains(char::is_whitespace))
}

/// Minimum password length accepted by the signup form.
pub const MIN_PASSWORD_LEN: usize = 8;

pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}

/// Usernames: non-empty, no whitespace.
pub fn is_valid_username(value: &str) -> bool {
    !value.is_empty() && !value.contains(char::is_whitespace)
}
