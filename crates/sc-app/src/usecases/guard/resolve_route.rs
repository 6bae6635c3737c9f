use std::sync::Arc;

use sc_core::auth::AuthStatus;
use sc_core::guard::{resolve_route, RouteDecision};
use sc_core::ports::{AuthSessionPort, OnboardingStatePort};

/// Use case for gating a requested path.
///
/// Reads the persisted session and completion flag, then applies the pure
/// guard decision. Token freshness is deliberately not checked here: the
/// guard runs on every navigation and must stay local; an expired token
/// surfaces on the next backend call instead.
pub struct ResolveRoute {
    session: Arc<dyn AuthSessionPort>,
    onboarding_state: Arc<dyn OnboardingStatePort>,
}

impl ResolveRoute {
    pub fn new(
        session: Arc<dyn AuthSessionPort>,
        onboarding_state: Arc<dyn OnboardingStatePort>,
    ) -> Self {
        Self {
            session,
            onboarding_state,
        }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    ///
    /// Convenience for the UseCases accessor pattern.
    pub fn from_ports(
        session: Arc<dyn AuthSessionPort>,
        onboarding_state: Arc<dyn OnboardingStatePort>,
    ) -> Self {
        Self::new(session, onboarding_state)
    }

    pub async fn execute(&self, path: &str) -> anyhow::Result<RouteDecision> {
        let auth = match self.session.current().await? {
            Some(session) => AuthStatus::SignedIn(session.user),
            None => AuthStatus::SignedOut,
        };
        let onboarding_complete = self.onboarding_state.is_completed().await?;

        Ok(resolve_route(&auth, onboarding_complete, path))
    }
}
