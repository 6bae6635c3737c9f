//! Wizard step identity and ordering.

use serde::{Deserialize, Serialize};

/// The ordered onboarding steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    UserInfo,
    Preferences,
    CompanyDetails,
    Confirmation,
}

impl OnboardingStep {
    pub const COUNT: usize = 4;

    /// Steps in wizard order.
    pub const ALL: [OnboardingStep; Self::COUNT] = [
        OnboardingStep::UserInfo,
        OnboardingStep::Preferences,
        OnboardingStep::CompanyDetails,
        OnboardingStep::Confirmation,
    ];

    /// The final step; submitting it completes onboarding instead of
    /// advancing the pointer.
    pub const FINAL: OnboardingStep = OnboardingStep::Confirmation;

    pub fn index(self) -> usize {
        match self {
            OnboardingStep::UserInfo => 0,
            OnboardingStep::Preferences => 1,
            OnboardingStep::CompanyDetails => 2,
            OnboardingStep::Confirmation => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Key the step's payload is stored under in the persisted record.
    pub fn key(self) -> &'static str {
        match self {
            OnboardingStep::UserInfo => "user_info",
            OnboardingStep::Preferences => "preferences",
            OnboardingStep::CompanyDetails => "company_details",
            OnboardingStep::Confirmation => "confirmation",
        }
    }
}
