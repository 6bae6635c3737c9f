use std::sync::Arc;

use sc_core::onboarding::OnboardingRecord;
use sc_core::ports::{ClockPort, OnboardingStatePort};

use crate::usecases::OnboardingStateDto;

/// Use case for reading the current onboarding state.
///
/// A first visit has no persisted record; one is created at step zero with
/// empty per-step payloads and persisted before returning.
pub struct GetOnboardingState {
    onboarding_state: Arc<dyn OnboardingStatePort>,
    clock: Arc<dyn ClockPort>,
}

impl GetOnboardingState {
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
        let record = match self.onboarding_state.get_record().await? {
            Some(record) => record,
            None => {
                let record = OnboardingRecord::new(self.clock.now());
                self.onboarding_state.set_record(&record).await?;
                record
            }
        };
        let has_completed = self.onboarding_state.is_completed().await?;

        Ok(OnboardingStateDto {
            record,
            has_completed,
        })
    }
}
