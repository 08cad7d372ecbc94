use super::*;
use crate::net::error::ApiError;

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret1"), Err("Please fill in all fields"));
    assert_eq!(validate_login_input("alice", ""), Err("Please fill in all fields"));
}

#[test]
fn validate_login_input_enforces_minimum_length() {
    assert_eq!(
        validate_login_input("bob", "secret1"),
        Err("Username and password must be at least 5 characters long")
    );
    assert_eq!(
        validate_login_input("alice", "1234"),
        Err("Username and password must be at least 5 characters long")
    );
}

#[test]
fn validate_login_input_sends_values_as_typed() {
    assert_eq!(
        validate_login_input("  alice  ", " pass word "),
        Ok(("  alice  ".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_counts_surrounding_spaces() {
    assert!(validate_login_input(" bob ", "secret1").is_ok());
    assert_eq!(
        validate_login_input("bob", "secret1"),
        Err("Username and password must be at least 5 characters long")
    );
}

#[test]
fn validate_login_input_counts_characters_not_bytes() {
    assert!(validate_login_input("ünïcö", "sécrét").is_ok());
    assert!(validate_login_input("üñï", "secret1").is_err());
}

#[test]
fn rejected_login_shows_server_text() {
    let err = ApiError::from_rejection(401, r#"{"error":"bad credentials"}"#);
    assert_eq!(err.user_message(LOGIN_FAILED_MESSAGE), "bad credentials");
}

#[test]
fn rejected_login_without_text_falls_back() {
    let err = ApiError::from_rejection(401, "{}");
    assert_eq!(err.user_message(LOGIN_FAILED_MESSAGE), "Login failed");
}
