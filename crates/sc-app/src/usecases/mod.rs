//! Use cases
//!
//! Each use case is a small struct holding the `Arc<dyn Port>` references it
//! needs, constructed with `new()` (or `from_ports()` for the UseCases
//! accessor) and driven through `execute()`.

pub mod auth;
pub mod guard;
pub mod onboarding;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{GetAuthSession, SignIn, SignOut};
pub use guard::ResolveRoute;
pub use onboarding::{
    GetOnboardingState, GoBackOnboardingStep, ResetOnboarding, SubmitOnboardingStep,
};
pub use settings::{
    GetAccount, GetCompany, UpdateAccount, UpdateCompany, UploadProfilePicture,
};

use sc_core::onboarding::OnboardingRecord;
use sc_core::validation::FieldError;

/// Data transfer object for onboarding state
#[derive(Debug, Clone, serde::Serialize)]
pub struct OnboardingStateDto {
    pub record: OnboardingRecord,
    pub has_completed: bool,
}

/// Result of submitting a wizard step.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitStepOutcome {
    /// Validation failed; inline field errors for the form.
    Invalid { errors: Vec<FieldError> },
    /// Step persisted; `state.has_completed` is true after the final step.
    Saved { state: OnboardingStateDto },
}

/// Result of saving a settings form.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SettingsSaveOutcome {
    Invalid { errors: Vec<FieldError> },
    Saved,
}
