use crate::email;

#[test]
fn test_normalize_lowercases_and_trims() {
    assert_eq!(email::normalize("  A@X.Com "), "a@x.com");
    assert_eq!(email::normalize("a@x.com"), "a@x.com");
}

#[test]
fn test_validate_accepts_plain_address() {
    assert!(email::validate("a@x.com").is_ok());
    assert!(email::validate("first.last@sub.example.org").is_ok());
}

#[test]
fn test_validate_rejects_malformed_input() {
    assert!(email::validate("").is_err());
    assert!(email::validate("no-at-sign").is_err());
    assert!(email::validate("@x.com").is_err());
    assert!(email::validate("a@").is_err());
    assert!(email::validate("a b@x.com").is_err());
}
