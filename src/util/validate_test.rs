use super::*;

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_valid_email("sam@mail.utoronto.ca"));
    assert!(is_valid_email("a@b.co"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("no-at-sign"));
    assert!(!is_valid_email("@missing-local.com"));
    assert!(!is_valid_email("two@@ats.com"));
    assert!(!is_valid_email("spaces in@local.com"));
    assert!(!is_valid_email("sam@nodot"));
    assert!(!is_valid_email("sam@dot."));
}

#[test]
fn password_length_boundary() {
    assert!(!is_valid_password("1234567"));
    assert!(is_valid_password("12345678"));
}

#[test]
fn username_rules() {
    assert!(is_valid_username("sam_123"));
    assert!(!is_valid_username(""));
    assert!(!is_valid_username("two words"));
}
