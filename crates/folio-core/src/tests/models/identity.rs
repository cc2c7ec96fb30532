use crate::Identity;

use chrono::{Duration, Utc};

fn sample() -> Identity {
    Identity::new(
        "a@x.com".to_string(),
        "$2b$12$fakefakefakefakefakefake".to_string(),
        Some("Ada".to_string()),
        None,
        Utc::now(),
    )
}

#[test]
fn test_identity_new_defaults() {
    let identity = sample();

    assert!(identity.is_active);
    assert!(!identity.email_verified);
    assert!(identity.last_login_at.is_none());
    assert_eq!(identity.created_at, identity.updated_at);
    assert_eq!(identity.first_name.as_deref(), Some("Ada"));
    assert_eq!(identity.last_name, None);
}

#[test]
fn test_mark_logged_in_sets_timestamp() {
    let mut identity = sample();
    let later = identity.created_at + Duration::minutes(5);

    identity.mark_logged_in(later);

    assert_eq!(identity.last_login_at, Some(later));
    assert_eq!(identity.updated_at, later);
}

#[test]
fn test_change_email_resets_verification() {
    let mut identity = sample();
    let now = Utc::now();
    identity.mark_email_verified(now);
    assert!(identity.email_verified);

    identity.change_email("b@y.com".to_string(), now + Duration::seconds(1));

    assert_eq!(identity.email, "b@y.com");
    assert!(!identity.email_verified);
}

#[test]
fn test_serialized_identity_omits_hash_and_deserializes_back() {
    let identity = sample();

    let json = serde_json::to_value(&identity).unwrap();
    assert!(json.get("credential_hash").is_none());

    let restored: Identity = serde_json::from_value(json).unwrap();
    assert_eq!(restored.id, identity.id);
    assert_eq!(restored.email, identity.email);
    assert_eq!(restored.credential_hash, "");
}

#[test]
fn test_set_credential_hash_replaces_digest() {
    let mut identity = sample();
    let later = identity.created_at + Duration::seconds(10);

    identity.set_credential_hash("$2b$12$anotherfakehash".to_string(), later);

    assert_eq!(identity.credential_hash, "$2b$12$anotherfakehash");
    assert_eq!(identity.updated_at, later);
}
