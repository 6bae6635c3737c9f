//! Onboarding use cases
//!
//! This module contains use cases for driving the onboarding wizard:
//! reading progress, submitting and re-validating steps, navigating back,
//! and resetting the flow.

pub mod get_state;
pub mod go_back;
pub mod reset;
pub mod submit_step;

pub use get_state::GetOnboardingState;
pub use go_back::GoBackOnboardingStep;
pub use reset::ResetOnboarding;
pub use submit_step::SubmitOnboardingStep;
