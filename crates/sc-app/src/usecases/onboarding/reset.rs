use std::sync::Arc;

use sc_core::ports::OnboardingStatePort;

/// Use case for resetting onboarding.
///
/// Drops the persisted record and the completion flag. Used by sign-out and
/// by support-driven re-onboarding.
pub struct ResetOnboarding {
    onboarding_state: Arc<dyn OnboardingStatePort>,
}

impl ResetOnboarding {
    pub fn new(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self { onboarding_state }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    ///
    /// Convenience for the UseCases accessor pattern.
    pub fn from_ports(onboarding_state: Arc<dyn OnboardingStatePort>) -> Self {
        Self::new(onboarding_state)
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        self.onboarding_state.reset().await
    }
}
