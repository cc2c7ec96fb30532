
use crate::{
    AuditRecorder, AuditWritePolicy, AuthService, NewRegistration, RecordingNotifier,
};

use folio_auth::{PasswordHasher, TokenCodec, TokenSecrets, TokenTtls};
use folio_core::{ManualClock, RequestContext};
use folio_store::{InMemoryAuditSink, InMemoryIdentityStore, InMemorySettingsStore};

use std::sync::Arc;

pub(crate) struct Harness {
    pub service: Arc<AuthService>,
    pub identities: Arc<InMemoryIdentityStore>,
    pub settings: Arc<InMemorySettingsStore>,
    pub audit_sink: Arc<InMemoryAuditSink>,
    pub notifier: Arc<RecordingNotifier>,
    pub clock: Arc<ManualClock>,
}

pub(crate) fn test_secrets() -> TokenSecrets {
    TokenSecrets {
        access: "test-access-secret-32-bytes-long!!!!!!".to_string(),
        refresh: "test-refresh-secret-32-bytes-long!!!!!".to_string(),
        password_reset: "test-reset-secret-32-bytes-long!!!!!!!".to_string(),
        email_verification: "test-verify-secret-32-bytes-long!!!!!!".to_string(),
    }
}

pub(crate) fn harness() -> Harness {
    harness_with_policy(AuditWritePolicy::FailOpen)
}

pub(crate) fn harness_with_policy(policy: AuditWritePolicy) -> Harness {
    let identities = Arc::new(InMemoryIdentityStore::new());
    let settings = Arc::new(InMemorySettingsStore::new());
    let audit_sink = Arc::new(InMemoryAuditSink::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let clock = Arc::new(ManualClock::starting_now());

    let codec = TokenCodec::new(test_secrets(), TokenTtls::default(), clock.clone());
    let service = Arc::new(AuthService::new(
        identities.clone(),
        settings.clone(),
        AuditRecorder::new(audit_sink.clone(), policy),
        // Minimum bcrypt cost keeps the suite fast; the work factor is
        // covered in folio-auth.
        PasswordHasher::with_cost(4),
        codec,
        notifier.clone(),
        clock.clone(),
    ));

    Harness {
        service,
        identities,
        settings,
        audit_sink,
        notifier,
        clock,
    }
}

pub(crate) fn registration(email: &str, password: &str) -> NewRegistration {
    NewRegistration {
        email: email.to_string(),
        password: password.to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
    }
}

pub(crate) fn ctx() -> RequestContext {
    RequestContext::new(Some("127.0.0.1".to_string()), Some("folio-tests".to_string()))
}
