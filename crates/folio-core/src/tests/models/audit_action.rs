use crate::{AuditAction, CoreError};

use std::str::FromStr;

#[test]
fn test_audit_action_round_trip() {
    for action in [
        AuditAction::Register,
        AuditAction::Login,
        AuditAction::Logout,
        AuditAction::PasswordChange,
    ] {
        assert_eq!(AuditAction::from_str(action.as_str()).unwrap(), action);
    }
}

#[test]
fn test_audit_action_rejects_unknown_value() {
    let result = AuditAction::from_str("connect_broker");

    assert!(matches!(
        result,
        Err(CoreError::InvalidAuditAction { .. })
    ));
}
