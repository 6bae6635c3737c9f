use std::sync::Arc;

use sc_core::auth::AuthStatus;
use sc_core::ports::{AuthSessionPort, ClockPort, IdentityProviderPort};

/// Use case for restoring the auth state on startup (and whenever the shell
/// re-checks it).
///
/// An expired ID token is refreshed through the identity provider; a refresh
/// the provider rejects signs the user out rather than erroring.
pub struct GetAuthSession {
    session: Arc<dyn AuthSessionPort>,
    identity: Arc<dyn IdentityProviderPort>,
    clock: Arc<dyn ClockPort>,
}

impl GetAuthSession {
    pub fn new(
        session: Arc<dyn AuthSessionPort>,
        identity: Arc<dyn IdentityProviderPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            session,
            identity,
            clock,
        }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    ///
    /// Convenience for the UseCases accessor pattern.
    pub fn from_ports(
        session: Arc<dyn AuthSessionPort>,
        identity: Arc<dyn IdentityProviderPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self::new(session, identity, clock)
    }

    pub async fn execute(&self) -> anyhow::Result<AuthStatus> {
        let Some(session) = self.session.current().await? else {
            return Ok(AuthStatus::SignedOut);
        };

        if !session.is_expired(self.clock.now()) {
            return Ok(AuthStatus::SignedIn(session.user));
        }

        match self.identity.refresh(&session.refresh_token).await {
            Ok(fresh) => {
                self.session.store(&fresh).await?;
                Ok(AuthStatus::SignedIn(fresh.user))
            }
            Err(err) => {
                log::warn!("session refresh failed, signing out: {}", err);
                self.session.clear().await?;
                Ok(AuthStatus::SignedOut)
            }
        }
    }
}
