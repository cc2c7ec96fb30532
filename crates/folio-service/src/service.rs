//! The auth orchestrator: composes the store, hasher, token codec, audit
//! recorder and notifier into the user-facing credential-lifecycle
//! operations.
//!
//! Every operation is a single-shot request/response; the two-phase flows
//! (password reset, email verification) are issue-token-now, redeem-later.
//! Correctness under concurrent requests against the same identity relies on
//! the store's atomicity, not on any locking here.

use crate::{
    AuditRecorder, AuditWritePolicy, Notifier, Result as ServiceResult, ServiceError,
};

use folio_auth::{
    AuthError, PasswordHasher, TokenCodec, TokenPurpose, TokenSecrets, TokenTtls,
};
use folio_config::Config;
use folio_core::{AuditAction, AuditEvent, Clock, Identity, RequestContext, email};
use folio_store::{IdentityStore, SettingsStore, StoreError};

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const USER_NOT_FOUND: &str = "User not found";

/// Access/refresh pair returned by register, login and refresh.
#[derive(Debug, Clone, Serialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone)]
pub struct AuthResponse {
    pub identity: Identity,
    pub tokens: AuthTokens,
}

#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Fields to apply in `update_profile`. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub struct AuthService {
    identities: Arc<dyn IdentityStore>,
    settings: Arc<dyn SettingsStore>,
    audit: AuditRecorder,
    hasher: PasswordHasher,
    tokens: TokenCodec,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl AuthService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        identities: Arc<dyn IdentityStore>,
        settings: Arc<dyn SettingsStore>,
        audit: AuditRecorder,
        hasher: PasswordHasher,
        tokens: TokenCodec,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            identities,
            settings,
            audit,
            hasher,
            tokens,
            notifier,
            clock,
        }
    }

    /// Wire up a service from validated configuration.
    pub fn from_config(
        config: &Config,
        identities: Arc<dyn IdentityStore>,
        settings: Arc<dyn SettingsStore>,
        audit_sink: Arc<dyn folio_store::AuditSink>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let secrets = TokenSecrets {
            access: config.token.access_secret.clone(),
            refresh: config.token.refresh_secret.clone(),
            password_reset: config.token.password_reset_secret.clone(),
            email_verification: config.token.email_verification_secret.clone(),
        };
        let ttls = TokenTtls {
            access_secs: config.token.access_ttl_secs,
            refresh_secs: config.token.refresh_ttl_secs,
            password_reset_secs: config.token.password_reset_ttl_secs,
            email_verification_secs: config.token.email_verification_ttl_secs,
        };
        let policy = if config.audit.fail_open {
            AuditWritePolicy::FailOpen
        } else {
            AuditWritePolicy::FailClosed
        };

        Self::new(
            identities,
            settings,
            AuditRecorder::new(audit_sink, policy),
            PasswordHasher::new(),
            TokenCodec::new(secrets, ttls, clock.clone()),
            notifier,
            clock,
        )
    }

    /// Create a new identity with default settings and return it with a
    /// token pair. The pre-check gives a clean error in the common case; the
    /// store's unique constraint is the final authority under race.
    pub async fn register(
        &self,
        registration: NewRegistration,
        ctx: &RequestContext,
    ) -> ServiceResult<AuthResponse> {
        let address = email::normalize(&registration.email);
        email::validate(&address)
            .map_err(|_| ServiceError::bad_request("Invalid email address"))?;

        if self.identities.find_by_email(&address).await?.is_some() {
            return Err(ServiceError::conflict("User with this email already exists"));
        }

        let credential_hash = self.hasher.hash(&registration.password)?;
        let now = self.clock.now();
        let identity = Identity::new(
            address,
            credential_hash,
            registration.first_name,
            registration.last_name,
            now,
        );

        let identity = match self.identities.insert(identity).await {
            Ok(identity) => identity,
            Err(StoreError::Conflict { .. }) => {
                return Err(ServiceError::conflict("User with this email already exists"));
            }
            Err(other) => return Err(other.into()),
        };

        self.settings.create_default(identity.id).await?;

        self.audit
            .record(AuditEvent::for_user(
                AuditAction::Register,
                identity.id,
                ctx,
                now,
            ))
            .await?;

        let tokens = self.issue_token_pair(&identity)?;
        Ok(AuthResponse { identity, tokens })
    }

    /// Verify credentials and return a fresh token pair. Unknown email and
    /// wrong password produce the identical message so callers cannot
    /// enumerate accounts.
    pub async fn login(
        &self,
        email_raw: &str,
        password: &str,
        ctx: &RequestContext,
    ) -> ServiceResult<AuthResponse> {
        let address = email::normalize(email_raw);

        let Some(mut identity) = self.identities.find_by_email(&address).await? else {
            return Err(ServiceError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify(password, &identity.credential_hash)? {
            return Err(ServiceError::unauthorized(INVALID_CREDENTIALS));
        }

        if !identity.is_active {
            return Err(ServiceError::unauthorized("Account is disabled"));
        }

        let now = self.clock.now();
        identity.mark_logged_in(now);
        let identity = self.identities.update(identity).await?;

        self.audit
            .record(AuditEvent::for_user(AuditAction::Login, identity.id, ctx, now))
            .await?;

        let tokens = self.issue_token_pair(&identity)?;
        Ok(AuthResponse { identity, tokens })
    }

    /// Re-issue a token pair for a caller who already proved possession of a
    /// valid refresh token (the transport guard verifies it before this
    /// call). No state transition, no audit event.
    pub fn refresh_tokens(&self, identity: &Identity) -> ServiceResult<AuthTokens> {
        self.issue_token_pair(identity)
    }

    /// Record the logout in the audit trail. Tokens are stateless and not
    /// tracked server-side, so the refresh token stays valid until expiry.
    pub async fn logout(&self, user_id: Uuid, ctx: &RequestContext) -> ServiceResult<()> {
        self.audit
            .record(AuditEvent::for_user(
                AuditAction::Logout,
                user_id,
                ctx,
                self.clock.now(),
            ))
            .await?;
        Ok(())
    }

    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
        ctx: &RequestContext,
    ) -> ServiceResult<()> {
        let Some(mut identity) = self.identities.find_by_id(user_id).await? else {
            return Err(ServiceError::not_found(USER_NOT_FOUND));
        };

        if !self
            .hasher
            .verify(current_password, &identity.credential_hash)?
        {
            return Err(ServiceError::unauthorized("Current password is incorrect"));
        }

        let new_hash = self.hasher.hash(new_password)?;
        let now = self.clock.now();
        identity.set_credential_hash(new_hash, now);
        self.identities.update(identity).await?;

        self.audit
            .record(AuditEvent::for_user(
                AuditAction::PasswordChange,
                user_id,
                ctx,
                now,
            ))
            .await?;
        Ok(())
    }

    pub async fn get_profile(&self, user_id: Uuid) -> ServiceResult<Identity> {
        match self.identities.find_by_id(user_id).await? {
            Some(identity) => Ok(identity),
            None => Err(ServiceError::not_found(USER_NOT_FOUND)),
        }
    }

    /// Apply optional profile fields. An email change re-checks uniqueness
    /// and resets the verified flag; the new address needs verification.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: ProfileUpdate,
    ) -> ServiceResult<Identity> {
        let Some(mut identity) = self.identities.find_by_id(user_id).await? else {
            return Err(ServiceError::not_found(USER_NOT_FOUND));
        };

        let now = self.clock.now();

        if let Some(raw) = update.email {
            let address = email::normalize(&raw);
            email::validate(&address)
                .map_err(|_| ServiceError::bad_request("Invalid email address"))?;

            if address != identity.email {
                if self.identities.find_by_email(&address).await?.is_some() {
                    return Err(ServiceError::conflict("Email is already in use"));
                }
                identity.change_email(address, now);
            }
        }

        if let Some(first_name) = update.first_name {
            identity.first_name = Some(first_name);
        }
        if let Some(last_name) = update.last_name {
            identity.last_name = Some(last_name);
        }
        identity.updated_at = now;

        Ok(self.identities.update(identity).await?)
    }

    /// Issue a password-reset token and hand it to the notifier. Returns
    /// success for unknown emails so the operation reveals nothing about
    /// which addresses exist. No audit event is recorded for this flow.
    pub async fn forgot_password(&self, email_raw: &str) -> ServiceResult<()> {
        let address = email::normalize(email_raw);

        let Some(identity) = self.identities.find_by_email(&address).await? else {
            debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = self.tokens.issue(
            TokenPurpose::PasswordReset,
            identity.id,
            email_snapshot(&identity),
        )?;

        if let Err(e) = self.notifier.send_reset_link(&identity.email, &token).await {
            warn!("Failed to dispatch password reset link: {e}");
        }
        Ok(())
    }

    /// Redeem a password-reset token. Any token defect (expired, tampered,
    /// wrong purpose, malformed) collapses into one BadRequest message.
    /// No audit event is recorded, unlike `change_password`.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> ServiceResult<()> {
        let claims = self
            .tokens
            .parse(token, TokenPurpose::PasswordReset)
            .map_err(|e| token_rejection(e, "Invalid or expired reset token"))?;
        let subject = claims
            .subject()
            .map_err(|e| token_rejection(e, "Invalid or expired reset token"))?;

        let Some(mut identity) = self.identities.find_by_id(subject).await? else {
            return Err(ServiceError::not_found(USER_NOT_FOUND));
        };

        let new_hash = self.hasher.hash(new_password)?;
        identity.set_credential_hash(new_hash, self.clock.now());
        self.identities.update(identity).await?;
        Ok(())
    }

    /// Issue an email-verification token for an unverified account and hand
    /// it to the notifier.
    pub async fn send_verification_email(&self, user_id: Uuid) -> ServiceResult<()> {
        let Some(identity) = self.identities.find_by_id(user_id).await? else {
            return Err(ServiceError::not_found(USER_NOT_FOUND));
        };

        if identity.email_verified {
            return Err(ServiceError::bad_request("Email is already verified"));
        }

        let token = self.tokens.issue(
            TokenPurpose::EmailVerification,
            identity.id,
            email_snapshot(&identity),
        )?;

        if let Err(e) = self
            .notifier
            .send_verification_link(&identity.email, &token)
            .await
        {
            warn!("Failed to dispatch email verification link: {e}");
        }
        Ok(())
    }

    /// Redeem an email-verification token.
    pub async fn verify_email(&self, token: &str) -> ServiceResult<()> {
        let claims = self
            .tokens
            .parse(token, TokenPurpose::EmailVerification)
            .map_err(|e| token_rejection(e, "Invalid or expired verification token"))?;
        let subject = claims
            .subject()
            .map_err(|e| token_rejection(e, "Invalid or expired verification token"))?;

        let Some(mut identity) = self.identities.find_by_id(subject).await? else {
            return Err(ServiceError::not_found(USER_NOT_FOUND));
        };

        identity.mark_email_verified(self.clock.now());
        self.identities.update(identity).await?;
        Ok(())
    }

    fn issue_token_pair(&self, identity: &Identity) -> ServiceResult<AuthTokens> {
        let extra = email_snapshot(identity);
        let access_token = self
            .tokens
            .issue(TokenPurpose::Access, identity.id, extra.clone())?;
        let refresh_token = self
            .tokens
            .issue(TokenPurpose::Refresh, identity.id, extra)?;
        Ok(AuthTokens {
            access_token,
            refresh_token,
        })
    }
}

fn email_snapshot(identity: &Identity) -> HashMap<String, String> {
    HashMap::from([("email".to_string(), identity.email.clone())])
}

/// Collapse token parse failures into one user-facing message; anything else
/// is a server fault.
#[track_caller]
fn token_rejection(e: AuthError, message: &str) -> ServiceError {
    if e.is_token_rejection() {
        ServiceError::bad_request(message)
    } else {
        ServiceError::internal(e.to_string())
    }
}
