//! Onboarding domain models
//!
//! This module defines the core domain models for the onboarding flow: the
//! ordered four-step wizard (user information, preferences, company details,
//! confirmation) every new user walks through before the dashboard unlocks.
//!
//! The flow itself is a pure state machine ([`state_machine::OnboardingFlow`]);
//! persistence and side effects live behind [`crate::ports::OnboardingStatePort`].

pub mod payloads;
pub mod record;
pub mod state_machine;
pub mod step;
mod validate;

pub use payloads::{
    Confirmation, Preferences, StepPayloads, StepSubmission, UserInformation, INTEREST_OPTIONS,
};
pub use record::OnboardingRecord;
pub use state_machine::{OnboardingAction, OnboardingEvent, OnboardingFlow};
pub use step::OnboardingStep;
