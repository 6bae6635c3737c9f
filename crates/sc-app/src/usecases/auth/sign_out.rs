use std::sync::Arc;

use sc_core::ports::{AuthSessionPort, OnboardingStatePort};

/// Use case for signing out.
///
/// Local state goes first (session, onboarding record and flag) so a
/// half-finished sign-out can never leave a signed-out user with another
/// user's wizard progress. There is no provider network call; revocation is
/// the provider's concern.
pub struct SignOut {
    session: Arc<dyn AuthSessionPort>,
    onboarding_state: Arc<dyn OnboardingStatePort>,
}

impl SignOut {
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

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.onboarding_state.reset().await?;
        self.session.clear().await?;
        log::info!("signed out and cleared local state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::{
        fixed_now, session_for, MockAuthSessionPort, MockOnboardingStatePort,
    };
    use sc_core::onboarding::OnboardingRecord;

    #[tokio::test]
    async fn test_sign_out_clears_session_and_onboarding_state() {
        let session = Arc::new(MockAuthSessionPort::with_session(session_for("u1")));
        let onboarding = Arc::new(MockOnboardingStatePort::default());
        *onboarding.record.lock().unwrap() = Some(OnboardingRecord::new(fixed_now()));
        *onboarding.completed.lock().unwrap() = true;

        SignOut::new(session.clone(), onboarding.clone())
            .execute()
            .await
            .unwrap();

        assert!(session.session.lock().unwrap().is_none());
        assert!(onboarding.record.lock().unwrap().is_none());
        assert!(!*onboarding.completed.lock().unwrap());
    }
}
