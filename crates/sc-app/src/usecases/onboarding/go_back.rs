use std::sync::Arc;

use sc_core::onboarding::{OnboardingEvent, OnboardingFlow, OnboardingRecord};
use sc_core::ports::{ClockPort, OnboardingStatePort};

use crate::usecases::OnboardingStateDto;

/// Use case for navigating back one wizard step.
///
/// Decrements the pointer without discarding anything already entered for
/// later steps.
pub struct GoBackOnboardingStep {
    onboarding_state: Arc<dyn OnboardingStatePort>,
    clock: Arc<dyn ClockPort>,
}

impl GoBackOnboardingStep {
    pub fn new(onboarding_state: Arc<dyn OnboardingStatePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            onboarding_state,
            clock,
        }
    }

    /// Create the use case from cloned `Arc<dyn Port>` references.
    ///
    /// Convenience for the UseCases accessor pattern.
    pub fn from_ports(
        onboarding_state: Arc<dyn OnboardingStatePort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self::new(onboarding_state, clock)
    }

    pub async fn execute(&self) -> anyhow::Result<OnboardingStateDto> {
        let now = self.clock.now();
        let record = self
            .onboarding_state
            .get_record()
            .await?
            .unwrap_or_else(|| OnboardingRecord::new(now));

        let (record, _actions) = OnboardingFlow::transition(record, OnboardingEvent::Back, now);
        self.onboarding_state.set_record(&record).await?;
        let has_completed = self.onboarding_state.is_completed().await?;

        Ok(OnboardingStateDto {
            record,
            has_completed,
        })
    }
}
