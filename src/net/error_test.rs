use super::*;

#[test]
fn error_body_prefers_error_then_message() {
    let err = ApiError::from_error_body(r#"{"error":"Invalid credentials"}"#);
    assert_eq!(err, ApiError::Server("Invalid credentials".to_owned()));

    let err = ApiError::from_error_body(r#"{"message":"Email not verified"}"#);
    assert_eq!(err, ApiError::Server("Email not verified".to_owned()));

    let err = ApiError::from_error_body(r#"{"error":"e1","message":"m1"}"#);
    assert_eq!(err, ApiError::Server("e1".to_owned()));
}

#[test]
fn unrecognized_body_is_unknown() {
    assert_eq!(ApiError::from_error_body("<html>502</html>"), ApiError::Unknown);
    assert_eq!(ApiError::from_error_body(r#"{"status":500}"#), ApiError::Unknown);
    assert_eq!(ApiError::from_error_body(""), ApiError::Unknown);
}

#[test]
fn unknown_error_displays_fallback_text() {
    assert_eq!(ApiError::Unknown.to_string(), "Unknown error");
}

#[test]
fn server_error_displays_its_message() {
    let err = ApiError::Server("User already exists".to_owned());
    assert_eq!(err.to_string(), "User already exists");
}
