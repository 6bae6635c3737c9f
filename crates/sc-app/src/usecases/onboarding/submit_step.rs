use std::sync::Arc;

use sc_core::onboarding::{
    OnboardingAction, OnboardingEvent, OnboardingFlow, OnboardingRecord, StepSubmission,
};
use sc_core::ports::{ClockPort, OnboardingStatePort};

use crate::usecases::{OnboardingStateDto, SubmitStepOutcome};

/// Use case for submitting the current wizard step.
///
/// Validates the payload, runs the pure transition, persists the updated
/// record, and executes any actions the machine emitted (setting the
/// completion flag after the final step).
pub struct SubmitOnboardingStep {
    onboarding_state: Arc<dyn OnboardingStatePort>,
    clock: Arc<dyn ClockPort>,
}

impl SubmitOnboardingStep {
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

    pub async fn execute(&self, submission: StepSubmission) -> anyhow::Result<SubmitStepOutcome> {
        let errors = submission.validate();
        if !errors.is_empty() {
            return Ok(SubmitStepOutcome::Invalid { errors });
        }

        let now = self.clock.now();
        let record = self
            .onboarding_state
            .get_record()
            .await?
            .unwrap_or_else(|| OnboardingRecord::new(now));

        let step = submission.step();
        let (record, actions) =
            OnboardingFlow::transition(record, OnboardingEvent::Submit(submission), now);
        self.onboarding_state.set_record(&record).await?;

        for action in &actions {
            match action {
                OnboardingAction::MarkComplete => {
                    self.onboarding_state.set_completed(true).await?;
                    log::info!("onboarding marked as complete");
                }
            }
        }
        log::info!("onboarding step {} submitted", step.key());

        let has_completed = self.onboarding_state.is_completed().await?;
        Ok(SubmitStepOutcome::Saved {
            state: OnboardingStateDto {
                record,
                has_completed,
            },
        })
    }
}
