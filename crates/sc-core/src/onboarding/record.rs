//! Persisted onboarding progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::onboarding::payloads::StepPayloads;
use crate::onboarding::step::OnboardingStep;

/// Onboarding progress, persisted as a single JSON blob.
///
/// The completion flag is deliberately NOT part of this record; it is a
/// separate durable key so that the route guard can answer "is onboarding
/// done" without deserializing the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    /// Index of the step currently shown, 0-based.
    pub current_step: usize,
    #[serde(default)]
    pub steps: StepPayloads,
    #[serde(default)]
    pub completed_steps: Vec<usize>,
    pub last_updated: DateTime<Utc>,
}

impl OnboardingRecord {
    /// Fresh record at step zero with empty per-step payloads.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            current_step: 0,
            steps: StepPayloads::default(),
            completed_steps: Vec::new(),
            last_updated: now,
        }
    }

    /// The step to render for this record, clamped to the final step so a
    /// corrupt pointer can never render past the wizard.
    pub fn current(&self) -> OnboardingStep {
        OnboardingStep::from_index(self.current_step).unwrap_or(OnboardingStep::FINAL)
    }

    pub fn is_step_completed(&self, step: OnboardingStep) -> bool {
        self.completed_steps.contains(&step.index())
    }

    /// All steps strictly before `current_step` have been submitted.
    pub fn completed_in_order(&self) -> bool {
        (0..self.current_step).all(|index| self.completed_steps.contains(&index))
    }
}
